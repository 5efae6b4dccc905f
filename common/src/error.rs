//! Errors raised while building a face layout.

use core::fmt;

/// A viewport the face cannot be laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Zero width, not taller than the vertical margin, or larger than
    /// [`MAX_VIEWPORT_EXTENT`](crate::config::MAX_VIEWPORT_EXTENT) in either direction.
    InvalidViewport { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "viewport {width}x{height} is too small for the watch face")
            },
        }
    }
}

impl core::error::Error for ConfigError {}
