use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::screen::ScreenSize;

/// Bounds for the iteration-count control.
pub const MIN_ITERATIONS: u32 = 10;
pub const MAX_ITERATIONS: u32 = 1000;

/// Iteration count at startup.
pub const DEFAULT_ITERATIONS: u32 = 200;

/// Which member of the Mandelbrot family the renderer evaluates. The
/// per-pixel formula itself lives in the renderer; this is only the
/// selector handed across the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    BurningShip,
}

impl FractalKind {
    pub fn ordinal(self) -> i32 {
        match self {
            Self::Mandelbrot => 0,
            Self::BurningShip => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
        }
    }
}

/// Immutable per-frame snapshot handed to the renderer.
///
/// This flat record is the entire contract with the shader side: both
/// view centres (the active one with any pending drag offset already
/// folded in for display), both zooms, the mouse position on the plane,
/// the Julia sample point, and the discrete selectors. Built once per
/// frame, never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParameters {
    pub size: ScreenSize,

    pub fractal_center: Complex,
    pub fractal_zoom: f64,

    pub julia_center: Complex,
    pub julia_zoom: f64,

    /// Where the mouse points on the plane of the active view.
    pub mouse_plane: Complex,

    /// The `c` of `z ← z² + c` for the Julia image. Tracks `mouse_plane`
    /// until frozen.
    pub julia_sample: Complex,

    pub kind: FractalKind,

    /// [`RenderMode`](crate::mode::RenderMode) ordinal: 0 / 1 / 2.
    pub mode_ordinal: i32,

    pub iterations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordinals() {
        assert_eq!(FractalKind::Mandelbrot.ordinal(), 0);
        assert_eq!(FractalKind::BurningShip.ordinal(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let params = FrameParameters {
            size: ScreenSize::new(1280, 720),
            fractal_center: Complex::new(-0.75, 0.1),
            fractal_zoom: 0.5,
            julia_center: Complex::ZERO,
            julia_zoom: 2.0,
            mouse_plane: Complex::new(0.3, -0.2),
            julia_sample: Complex::new(-0.7, 0.27015),
            kind: FractalKind::Mandelbrot,
            mode_ordinal: 1,
            iterations: 200,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: FrameParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
