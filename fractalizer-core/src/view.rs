use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Multiplicative zoom step per scroll notch. Scroll-in applies the exact
/// reciprocal, so opposite scrolls return the zoom to its prior value.
pub const ZOOM_STEP: f64 = 1.1;

/// Zoom at startup and after a reset.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Clamp bounds for the zoom. The multiplicative update can never reach
/// zero from a positive value, but it can reach magnitudes where the
/// transform degenerates; values outside this range are silently clamped.
pub const MIN_ZOOM: f64 = 1e-14;
pub const MAX_ZOOM: f64 = 1e4;

/// One independently navigable view of the Argand plane.
///
/// Two instances exist for the lifetime of the process: the primary
/// fractal view and the Julia set view. The zoom is the half-height of
/// the visible region in plane units (half-width after aspect scaling),
/// and is strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Centre of the view on the Argand plane.
    pub center: Complex,

    /// Magnification; smaller is closer. Always positive and finite.
    pub zoom: f64,
}

impl ViewState {
    /// Create a view with explicit parameters.
    pub fn new(center: Complex, zoom: f64) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom));
        }
        Ok(Self { center, zoom })
    }

    /// Apply one scroll notch. Only the sign of `delta` matters: positive
    /// zooms in (`zoom / ZOOM_STEP`), negative zooms out (`zoom * ZOOM_STEP`).
    pub fn apply_scroll(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        if delta > 0.0 {
            self.zoom *= 1.0 / ZOOM_STEP;
        } else {
            self.zoom *= ZOOM_STEP;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Return to the home view: origin-centred at the default zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn default_view() {
        let view = ViewState::default();
        assert_eq!(view.center, Complex::ZERO);
        assert!((view.zoom - 2.0).abs() < EPSILON);
    }

    #[test]
    fn invalid_zoom_rejected() {
        assert!(ViewState::new(Complex::ZERO, 0.0).is_err());
        assert!(ViewState::new(Complex::ZERO, -1.0).is_err());
        assert!(ViewState::new(Complex::ZERO, f64::NAN).is_err());
        assert!(ViewState::new(Complex::ZERO, f64::INFINITY).is_err());
    }

    #[test]
    fn scroll_round_trip() {
        let mut view = ViewState::default();
        view.apply_scroll(1.0);
        assert!(view.zoom < 2.0);
        view.apply_scroll(-1.0);
        assert!((view.zoom - 2.0).abs() < EPSILON);
    }

    #[test]
    fn scroll_magnitude_ignored() {
        let mut a = ViewState::default();
        let mut b = ViewState::default();
        a.apply_scroll(0.1);
        b.apply_scroll(120.0);
        assert!((a.zoom - b.zoom).abs() < EPSILON);
    }

    #[test]
    fn zero_scroll_is_noop() {
        let mut view = ViewState::default();
        view.apply_scroll(0.0);
        assert!((view.zoom - 2.0).abs() < EPSILON);
    }

    #[test]
    fn zoom_clamped_at_extremes() {
        let mut view = ViewState::new(Complex::ZERO, MIN_ZOOM).unwrap();
        view.apply_scroll(1.0);
        assert!(view.zoom >= MIN_ZOOM);

        let mut view = ViewState::new(Complex::ZERO, MAX_ZOOM).unwrap();
        view.apply_scroll(-1.0);
        assert!(view.zoom <= MAX_ZOOM);
    }

    #[test]
    fn reset_restores_home() {
        let mut view = ViewState::new(Complex::new(-0.5, 0.3), 0.01).unwrap();
        view.reset();
        assert_eq!(view, ViewState::default());
    }
}
