use crate::argand;
use crate::complex::Complex;
use crate::screen::{ScreenPos, ScreenSize};
use crate::view::ViewState;

/// Default number of iterates in the path-trace overlay.
pub const DEFAULT_TRACE_LENGTH: u32 = 25;

/// Lazy trace of the orbit `z ← z² + c` starting at `z = 0`, mapped to
/// screen space for overlay drawing.
///
/// Yields exactly `length` points regardless of divergence — there is no
/// escape test. This is a visualization aid, entirely separate from the
/// renderer's per-pixel fractal evaluation.
#[derive(Debug, Clone)]
pub struct OrbitTrace {
    z: Complex,
    c: Complex,
    remaining: u32,
    size: ScreenSize,
    view: ViewState,
}

impl OrbitTrace {
    pub fn new(c: Complex, length: u32, size: ScreenSize, view: ViewState) -> Self {
        Self {
            z: Complex::ZERO,
            c,
            remaining: length,
            size,
            view,
        }
    }

    /// Rewind to the first iterate so the trace can be walked again.
    pub fn restart(&mut self, length: u32) {
        self.z = Complex::ZERO;
        self.remaining = length;
    }
}

impl Iterator for OrbitTrace {
    type Item = ScreenPos;

    fn next(&mut self) -> Option<ScreenPos> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.z = self.z * self.z + self.c;
        Some(argand::plane_to_screen(self.z, self.size, &self.view))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for OrbitTrace {}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> ScreenSize {
        ScreenSize::new(1280, 720)
    }

    #[test]
    fn yields_exactly_requested_length() {
        let trace = OrbitTrace::new(Complex::new(0.3, 0.5), 25, size(), ViewState::default());
        assert_eq!(trace.count(), 25);
    }

    #[test]
    fn divergent_seed_still_yields_full_length() {
        // Far outside the set: the orbit blows up immediately, but the
        // trace is not an escape-time test and must not stop short.
        let trace = OrbitTrace::new(Complex::new(10.0, 10.0), 25, size(), ViewState::default());
        assert_eq!(trace.count(), 25);
    }

    #[test]
    fn restart_reproduces_the_sequence() {
        let mut trace = OrbitTrace::new(Complex::new(-0.4, 0.6), 10, size(), ViewState::default());
        let first: Vec<ScreenPos> = trace.by_ref().collect();
        trace.restart(10);
        let second: Vec<ScreenPos> = trace.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn first_iterate_is_c() {
        // z₀ = 0, so z₁ = 0² + c = c.
        let c = Complex::new(0.1, 0.2);
        let view = ViewState::default();
        let mut trace = OrbitTrace::new(c, 5, size(), view);
        let first = trace.next().unwrap();
        let expected = argand::plane_to_screen(c, size(), &view);
        assert!((first.x - expected.x).abs() < 1e-10);
        assert!((first.y - expected.y).abs() < 1e-10);
    }

    #[test]
    fn exact_size_hint() {
        let mut trace = OrbitTrace::new(Complex::ZERO, 7, size(), ViewState::default());
        assert_eq!(trace.len(), 7);
        trace.next();
        assert_eq!(trace.len(), 6);
    }
}
