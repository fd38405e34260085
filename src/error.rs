/*
 * Error Module
 *
 * Crate-wide error type and Result alias. Configuration problems are
 * caught at initialization, before the first tick, so the animation
 * never runs with degenerate spawn bounds.
 */

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration field has a value the engine cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Propagated I/O errors (e.g., writing a rendered SVG frame).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
