pub mod argand;
pub mod complex;
pub mod drag;
pub mod error;
pub mod explorer;
pub mod frame;
pub mod mode;
pub mod orbit;
pub mod screen;
pub mod view;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use drag::DragController;
pub use error::CoreError;
pub use explorer::{Explorer, FrameInput};
pub use frame::{FractalKind, FrameParameters};
pub use mode::{ActiveView, ModeEvent, ModeMachine, RenderMode};
pub use orbit::OrbitTrace;
pub use screen::{ScreenPos, ScreenSize};
pub use view::ViewState;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
