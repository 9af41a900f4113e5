//! Screen-space ↔ Argand-plane mapping.
//!
//! These are pure functions of the current viewport size and view state,
//! recomputed every frame — never cached, since the window may be resized
//! and the active view changes with the render mode.

use crate::complex::Complex;
use crate::screen::{ScreenPos, ScreenSize};
use crate::view::ViewState;

/// Map a screen position to its point on the Argand plane.
///
/// Screen coordinates are normalized to `[-1, 1]` on both axes, scaled by
/// `aspect_ratio * zoom` horizontally (so circles stay circular regardless
/// of window shape) and by `zoom` vertically, then offset by the view
/// centre. The y axis is inverted: screen-down is decreasing imaginary
/// part, the standard Argand orientation.
pub fn screen_to_plane(pos: ScreenPos, size: ScreenSize, view: &ViewState) -> Complex {
    let nx = (pos.x / size.width as f64) * 2.0 - 1.0;
    let ny = (pos.y / size.height as f64) * 2.0 - 1.0;
    let nx = nx * size.aspect_ratio() * view.zoom;
    let ny = ny * view.zoom;
    Complex::new(view.center.re + nx * 0.5, view.center.im - ny * 0.5)
}

/// Map a plane point back to screen pixels. Exact inverse of
/// [`screen_to_plane`]; used by the orbit-trace overlay.
pub fn plane_to_screen(point: Complex, size: ScreenSize, view: &ViewState) -> ScreenPos {
    let nx = (point.re - view.center.re) / (0.5 * size.aspect_ratio() * view.zoom);
    let ny = (view.center.im - point.im) / (0.5 * view.zoom);
    ScreenPos::new(
        (nx + 1.0) * 0.5 * size.width as f64,
        (ny + 1.0) * 0.5 * size.height as f64,
    )
}

/// Plane-space displacement of an in-progress drag.
///
/// Measures the offset from `current` back to `start`, so that adding the
/// result to the view centre moves the visible content along with the
/// pointer. Equivalent to `screen_to_plane(start) - screen_to_plane(current)`
/// but independent of the view centre.
pub fn drag_offset(start: ScreenPos, current: ScreenPos, size: ScreenSize, zoom: f64) -> Complex {
    let dx = (start.x - current.x) / (size.width as f64 / (size.aspect_ratio() * zoom));
    let dy = (start.y - current.y) / (size.height as f64 / -zoom);
    Complex::new(dx, dy)
}
