use serde::{Deserialize, Serialize};

/// A position in screen pixels. `(0, 0)` is the top-left corner.
///
/// Fractional because pointer positions arrive with sub-pixel precision
/// from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

impl ScreenPos {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The viewport dimensions in pixels, re-read every frame — the window
/// may be resized (or minimized) between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Callers must check [`is_degenerate`](Self::is_degenerate) first.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// True when either dimension is zero (e.g. a minimized window).
    /// Transforms against a degenerate size would divide by zero, so the
    /// whole frame update is skipped instead.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio() {
        let size = ScreenSize::new(1920, 1080);
        assert!((size.aspect_ratio() - 1920.0 / 1080.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_sizes() {
        assert!(ScreenSize::new(0, 720).is_degenerate());
        assert!(ScreenSize::new(1280, 0).is_degenerate());
        assert!(!ScreenSize::new(1280, 720).is_degenerate());
    }
}
