use thiserror::Error;

/// Errors produced when building a [`crate::Screen`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("invalid screen size {rows}x{columns}: both must be non-zero")]
    InvalidSize { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, ScreenError>;
