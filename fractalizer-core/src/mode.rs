use tracing::debug;

/// Which image the renderer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The primary fractal (Mandelbrot family).
    #[default]
    Fractal,
    /// The Julia set for the current sample point, full screen.
    JuliaSet,
    /// The primary fractal with the Julia set overlaid (held TAB).
    FractalWithJuliaOverlay,
}

impl RenderMode {
    /// Wire ordinal handed to the renderer: 0 / 1 / 2.
    pub fn ordinal(self) -> i32 {
        match self {
            Self::Fractal => 0,
            Self::JuliaSet => 1,
            Self::FractalWithJuliaOverlay => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fractal => "Fractal",
            Self::JuliaSet => "Julia set",
            Self::FractalWithJuliaOverlay => "Fractal + Julia overlay",
        }
    }
}

/// Which of the two views receives drag and zoom input this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Fractal,
    Julia,
}

/// Edge-triggered key events driving the mode machine, at most one each
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// J pressed: toggle Julia mode (always returns to `Fractal` from
    /// either Julia state).
    JuliaToggle,
    /// TAB pressed: enter the overlay from `JuliaSet`.
    OverlayDown,
    /// TAB released: leave the overlay back to `JuliaSet`.
    OverlayUp,
    /// F pressed: toggle the frozen flag (ignored in `Fractal`).
    FreezeToggle,
}

/// Finite state machine over the three render modes plus the frozen flag.
///
/// The frozen flag is only meaningful outside `Fractal`: when set, the
/// Julia sample point stops tracking the mouse and the Julia view becomes
/// the drag/zoom target.
#[derive(Debug, Default)]
pub struct ModeMachine {
    mode: RenderMode,
    frozen: bool,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Whether the Julia sample point is frozen. Never observed while in
    /// `Fractal` state.
    pub fn is_frozen(&self) -> bool {
        self.mode != RenderMode::Fractal && self.frozen
    }

    /// The view that drag and zoom apply to. In the Julia states the
    /// underlying fractal view stays active unless the sample is frozen,
    /// so the user can pan the fractal while the sample follows the mouse.
    pub fn active_view(&self) -> ActiveView {
        match self.mode {
            RenderMode::Fractal => ActiveView::Fractal,
            RenderMode::JuliaSet | RenderMode::FractalWithJuliaOverlay => {
                if self.frozen {
                    ActiveView::Julia
                } else {
                    ActiveView::Fractal
                }
            }
        }
    }

    /// Apply one event. Undefined events for the current state leave it
    /// unchanged. Returns `true` if the mode or frozen flag changed —
    /// callers must cancel any in-progress drag on a `true` return, since
    /// the active view may have switched mid-gesture.
    pub fn apply(&mut self, event: ModeEvent) -> bool {
        use ModeEvent::*;
        use RenderMode::*;

        let before = (self.mode, self.frozen);
        match (self.mode, event) {
            (Fractal, JuliaToggle) => self.mode = JuliaSet,
            (JuliaSet, JuliaToggle) | (FractalWithJuliaOverlay, JuliaToggle) => {
                self.mode = Fractal;
            }
            (JuliaSet, OverlayDown) => self.mode = FractalWithJuliaOverlay,
            (FractalWithJuliaOverlay, OverlayUp) => self.mode = JuliaSet,
            (JuliaSet, FreezeToggle) | (FractalWithJuliaOverlay, FreezeToggle) => {
                self.frozen = !self.frozen;
            }
            // TAB in Fractal, TAB release outside the overlay, F in Fractal.
            _ => {}
        }

        let changed = (self.mode, self.frozen) != before;
        if changed {
            debug!(mode = self.mode.label(), frozen = self.frozen, "mode transition");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ModeEvent::*;
    use RenderMode::*;

    #[test]
    fn starts_in_fractal() {
        let machine = ModeMachine::new();
        assert_eq!(machine.mode(), Fractal);
        assert!(!machine.is_frozen());
    }

    #[test]
    fn julia_toggles_both_ways() {
        let mut machine = ModeMachine::new();
        assert!(machine.apply(JuliaToggle));
        assert_eq!(machine.mode(), JuliaSet);
        assert!(machine.apply(JuliaToggle));
        assert_eq!(machine.mode(), Fractal);
    }

    #[test]
    fn overlay_is_held_not_toggled() {
        let mut machine = ModeMachine::new();
        machine.apply(JuliaToggle);
        assert!(machine.apply(OverlayDown));
        assert_eq!(machine.mode(), FractalWithJuliaOverlay);
        assert!(machine.apply(OverlayUp));
        assert_eq!(machine.mode(), JuliaSet);
    }

    #[test]
    fn julia_key_exits_overlay_to_fractal() {
        let mut machine = ModeMachine::new();
        machine.apply(JuliaToggle);
        machine.apply(OverlayDown);
        assert!(machine.apply(JuliaToggle));
        assert_eq!(machine.mode(), Fractal);
    }

    #[test]
    fn undefined_events_leave_state_unchanged() {
        let mut machine = ModeMachine::new();
        assert!(!machine.apply(OverlayDown));
        assert!(!machine.apply(OverlayUp));
        assert_eq!(machine.mode(), Fractal);

        machine.apply(JuliaToggle);
        assert!(!machine.apply(OverlayUp));
        assert_eq!(machine.mode(), JuliaSet);
    }

    #[test]
    fn freeze_ignored_in_fractal() {
        let mut machine = ModeMachine::new();
        assert!(!machine.apply(FreezeToggle));
        assert!(!machine.is_frozen());
        assert_eq!(machine.active_view(), ActiveView::Fractal);
    }

    #[test]
    fn freeze_toggles_in_julia_states() {
        let mut machine = ModeMachine::new();
        machine.apply(JuliaToggle);
        assert!(machine.apply(FreezeToggle));
        assert!(machine.is_frozen());
        machine.apply(OverlayDown);
        assert!(machine.apply(FreezeToggle));
        assert!(!machine.is_frozen());
    }

    #[test]
    fn active_view_follows_frozen_flag() {
        let mut machine = ModeMachine::new();
        assert_eq!(machine.active_view(), ActiveView::Fractal);

        machine.apply(JuliaToggle);
        // Unfrozen: the sample tracks the mouse, drags pan the fractal.
        assert_eq!(machine.active_view(), ActiveView::Fractal);

        machine.apply(FreezeToggle);
        assert_eq!(machine.active_view(), ActiveView::Julia);

        machine.apply(OverlayDown);
        assert_eq!(machine.active_view(), ActiveView::Julia);
    }

    #[test]
    fn totality_over_all_states_and_events() {
        // Every (state, event) pair must land in a defined state.
        let seeds: [&[ModeEvent]; 3] = [
            &[],                        // Fractal
            &[JuliaToggle],             // JuliaSet
            &[JuliaToggle, OverlayDown], // FractalWithJuliaOverlay
        ];
        for seed in seeds {
            for event in [JuliaToggle, OverlayDown, OverlayUp, FreezeToggle] {
                let mut machine = ModeMachine::new();
                for &e in seed {
                    machine.apply(e);
                }
                machine.apply(event);
                assert!(matches!(
                    machine.mode(),
                    Fractal | JuliaSet | FractalWithJuliaOverlay
                ));
            }
        }
    }
}
