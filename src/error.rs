use std::ffi::c_int;

use thiserror::Error;

/// Value returned across the C boundary when the destination is too small.
pub const CAPACITY_EXCEEDED: c_int = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConcatError {
    #[error("Concatenation needs {required} bytes but the buffer only holds {capacity}.")]
    CapacityExceeded { required: usize, capacity: usize },
}

impl ConcatError {
    /// The integer a C caller sees for this error.
    pub fn sentinel(&self) -> c_int {
        match self {
            ConcatError::CapacityExceeded { .. } => CAPACITY_EXCEEDED,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("A global tracing subscriber has already been installed.")]
    AlreadyInitialized,
}
