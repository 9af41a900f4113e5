//! The per-frame update pipeline.
//!
//! One logical frame: read input → mode transitions → drag commit/update
//! → reset → zoom → transforms → parameter build. Later steps read state
//! mutated by earlier ones, so the order is fixed here rather than left
//! to incidental statement ordering at the call site.

use tracing::info;

use crate::argand;
use crate::complex::Complex;
use crate::drag::DragController;
use crate::frame::{
    FractalKind, FrameParameters, DEFAULT_ITERATIONS, MAX_ITERATIONS, MIN_ITERATIONS,
};
use crate::mode::{ActiveView, ModeEvent, ModeMachine, RenderMode};
use crate::orbit::OrbitTrace;
use crate::screen::{ScreenPos, ScreenSize};
use crate::view::ViewState;

/// Everything consumed from the windowing/UI collaborator for one frame.
///
/// Pointer button state is carried both as a press edge and as the polled
/// down state: release is derived from the latter, so a pointer released
/// outside the window still ends the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub size: ScreenSize,
    pub pointer: ScreenPos,
    /// The pointer is currently over a UI surface; drags must not start there.
    pub pointer_over_ui: bool,
    /// Primary button went down this frame.
    pub pointer_pressed: bool,
    /// Primary button is currently held (polled, not edge-triggered).
    pub pointer_down: bool,
    /// Scroll delta; only the sign is meaningful.
    pub scroll: f64,
    pub julia_pressed: bool,
    pub overlay_pressed: bool,
    pub overlay_released: bool,
    pub freeze_pressed: bool,
    pub reset_pressed: bool,
}

impl FrameInput {
    /// An idle frame: no pointer activity, no key edges.
    pub fn idle(size: ScreenSize) -> Self {
        Self {
            size,
            pointer: ScreenPos::new(0.0, 0.0),
            pointer_over_ui: false,
            pointer_pressed: false,
            pointer_down: false,
            scroll: 0.0,
            julia_pressed: false,
            overlay_pressed: false,
            overlay_released: false,
            freeze_pressed: false,
            reset_pressed: false,
        }
    }
}

/// Process-wide interaction state: both views, the mode machine, the drag
/// controller, and the live/frozen Julia sample point.
///
/// Owned by the application loop and touched only by [`advance`](Self::advance)
/// once per frame; no state escapes a frame except through the returned
/// [`FrameParameters`] snapshot.
#[derive(Debug)]
pub struct Explorer {
    fractal_view: ViewState,
    julia_view: ViewState,
    machine: ModeMachine,
    drag: DragController,
    julia_sample: Complex,
    iterations: u32,
    kind: FractalKind,
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            fractal_view: ViewState::default(),
            julia_view: ViewState::default(),
            machine: ModeMachine::new(),
            drag: DragController::new(),
            julia_sample: Complex::ZERO,
            iterations: DEFAULT_ITERATIONS,
            kind: FractalKind::default(),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.machine.mode()
    }

    pub fn is_frozen(&self) -> bool {
        self.machine.is_frozen()
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Set the iteration count, silently clamped to `[10, 1000]`.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    }

    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FractalKind) {
        self.kind = kind;
    }

    /// The view currently receiving drag and zoom input.
    fn active_view_mut(&mut self) -> &mut ViewState {
        match self.machine.active_view() {
            ActiveView::Fractal => &mut self.fractal_view,
            ActiveView::Julia => &mut self.julia_view,
        }
    }

    fn active_view(&self) -> &ViewState {
        match self.machine.active_view() {
            ActiveView::Fractal => &self.fractal_view,
            ActiveView::Julia => &self.julia_view,
        }
    }

    /// Run one frame of the pipeline and snapshot the renderer parameters.
    ///
    /// Returns `None` for a degenerate viewport (minimized window): the
    /// transform would divide by zero, so the whole update is skipped and
    /// no NaN can reach persisted state.
    pub fn advance(&mut self, input: &FrameInput) -> Option<FrameParameters> {
        if input.size.is_degenerate() {
            return None;
        }

        // 1. Mode transitions. Any change of mode or frozen flag may
        //    switch the active view, so an in-progress drag is cancelled,
        //    never committed against the wrong view.
        let mut changed = false;
        if input.julia_pressed {
            changed |= self.machine.apply(ModeEvent::JuliaToggle);
        }
        if input.overlay_pressed {
            changed |= self.machine.apply(ModeEvent::OverlayDown);
        }
        if input.overlay_released {
            changed |= self.machine.apply(ModeEvent::OverlayUp);
        }
        if input.freeze_pressed {
            changed |= self.machine.apply(ModeEvent::FreezeToggle);
        }
        if changed {
            self.drag.cancel();
        }

        // 2. Drag. Release is detected from polled button state, so a
        //    session can never dangle past the button going up.
        if input.pointer_pressed {
            self.drag.pointer_down(input.pointer, input.pointer_over_ui);
        }
        if input.pointer_down {
            let zoom = self.active_view().zoom;
            self.drag.pointer_move(input.pointer, input.size, zoom);
        } else {
            let target = match self.machine.active_view() {
                ActiveView::Fractal => &mut self.fractal_view,
                ActiveView::Julia => &mut self.julia_view,
            };
            self.drag.pointer_up(target);
        }

        // 3. Reset the active view.
        if input.reset_pressed {
            self.drag.cancel();
            self.active_view_mut().reset();
            info!(mode = self.machine.mode().label(), "view reset");
        }

        // 4. Zoom.
        if input.scroll != 0.0 {
            self.active_view_mut().apply_scroll(input.scroll);
        }

        // 5. Transforms and the frame snapshot.
        let mouse_plane = argand::screen_to_plane(input.pointer, input.size, self.active_view());
        if !self.machine.is_frozen() {
            self.julia_sample = mouse_plane;
        }

        let pending = self.drag.pending_offset();
        let (fractal_offset, julia_offset) = match self.machine.active_view() {
            ActiveView::Fractal => (pending, Complex::ZERO),
            ActiveView::Julia => (Complex::ZERO, pending),
        };

        Some(FrameParameters {
            size: input.size,
            fractal_center: self.fractal_view.center + fractal_offset,
            fractal_zoom: self.fractal_view.zoom,
            julia_center: self.julia_view.center + julia_offset,
            julia_zoom: self.julia_view.zoom,
            mouse_plane,
            julia_sample: self.julia_sample,
            kind: self.kind,
            mode_ordinal: self.machine.mode().ordinal(),
            iterations: self.iterations,
        })
    }

    /// Diagnostic orbit trace for the current Julia sample, mapped to
    /// screen space against the displayed fractal view (pending drag
    /// offset included).
    pub fn trace_orbit(&self, size: ScreenSize, length: u32) -> OrbitTrace {
        let mut view = self.fractal_view;
        if self.machine.active_view() == ActiveView::Fractal {
            view.center += self.drag.pending_offset();
        }
        OrbitTrace::new(self.julia_sample, length, size, view)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
