use tracing::debug;

use crate::argand;
use crate::complex::Complex;
use crate::screen::{ScreenPos, ScreenSize};
use crate::view::ViewState;

/// An in-progress pan gesture. Transient: created on pointer-down over
/// the canvas, destroyed when the offset is committed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Screen position where the gesture started.
    start: ScreenPos,

    /// Plane-space displacement since `start`, recomputed on every move.
    offset: Complex,
}

/// Tracks at most one pan gesture and produces a committable offset.
///
/// Between pointer-down and pointer-up the target view's centre is never
/// mutated; only the pending offset changes. The renderer adds the
/// pending offset to the active centre for display, and the offset is
/// folded into the centre exactly once, on release.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The current plane-space offset, or zero when no gesture is active.
    pub fn pending_offset(&self) -> Complex {
        self.session.map(|s| s.offset).unwrap_or(Complex::ZERO)
    }

    /// Begin a gesture, unless the pointer is over a UI surface or a
    /// session is already active.
    pub fn pointer_down(&mut self, pos: ScreenPos, over_ui: bool) {
        if over_ui || self.session.is_some() {
            return;
        }
        self.session = Some(DragSession {
            start: pos,
            offset: Complex::ZERO,
        });
    }

    /// Recompute the pending offset from the latest pointer position.
    pub fn pointer_move(&mut self, pos: ScreenPos, size: ScreenSize, zoom: f64) {
        if let Some(ref mut session) = self.session {
            session.offset = argand::drag_offset(session.start, pos, size, zoom);
        }
    }

    /// Commit the pending offset into the target view and end the gesture.
    ///
    /// Driven by *polled* button state each frame rather than release
    /// events alone, so a pointer released outside the window still closes
    /// the session.
    pub fn pointer_up(&mut self, target: &mut ViewState) {
        if let Some(session) = self.session.take() {
            target.center += session.offset;
            debug!(re = target.center.re, im = target.center.im, "pan committed");
        }
    }

    /// Discard the gesture without committing. Used when a mode switch
    /// changes the active view mid-drag.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("pan cancelled");
        }
    }
}
