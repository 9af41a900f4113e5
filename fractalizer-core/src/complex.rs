use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A point on the Argand plane, represented as two `f64` components.
///
/// A lightweight, `Copy` type shared by view centers, drag offsets, and
/// the orbit tracer. We roll our own instead of using `num::Complex` to
/// keep the dependency graph minimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

/// Renders as `a + bi` / `a - bi`, matching the HUD readouts.
impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{:.6} + {:.6}i", self.re, self.im)
        } else {
            write!(f, "{:.6} - {:.6}i", self.re, -self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn addition() {
        let c = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert!(approx_eq(c.re, 4.0));
        assert!(approx_eq(c.im, 6.0));
    }

    #[test]
    fn subtraction() {
        let c = Complex::new(5.0, 3.0) - Complex::new(2.0, 1.0);
        assert!(approx_eq(c.re, 3.0));
        assert!(approx_eq(c.im, 2.0));
    }

    #[test]
    fn squaring() {
        // z² where z = 1 + i → (1+i)(1+i) = 1 + 2i - 1 = 0 + 2i
        let z = Complex::new(1.0, 1.0);
        let z2 = z * z;
        assert!(approx_eq(z2.re, 0.0));
        assert!(approx_eq(z2.im, 2.0));
    }

    #[test]
    fn display_negative_imaginary() {
        let s = format!("{}", Complex::new(0.25, -0.5));
        assert_eq!(s, "0.250000 - 0.500000i");
    }

    #[test]
    fn serde_round_trip() {
        let c = Complex::new(-0.7, 0.27015);
        let json = serde_json::to_string(&c).unwrap();
        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
