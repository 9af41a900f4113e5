use thiserror::Error;

/// Errors originating from the coordinate/state core.
///
/// These only surface from explicit constructors; the interactive loop
/// itself prevents or clamps every failure mode rather than reporting it.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid zoom: {0} (must be positive and finite)")]
    InvalidZoom(f64),
}
