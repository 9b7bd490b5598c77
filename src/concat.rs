use std::ffi::{CStr, CString};

use tracing::{debug, trace};

use crate::error::ConcatError;

/// Bytes needed to hold `a` followed by `b` and the NUL terminator.
pub fn required_capacity(a: &[u8], b: &[u8]) -> usize {
    a.len() + b.len() + 1
}

/// Writes `a`, `b` and a terminating NUL into `dest`, returning the content
/// length (terminator excluded).
///
/// `dest.len()` is the capacity. The check runs before anything is copied,
/// so on error `dest` is exactly as it was.
pub fn concat_into(dest: &mut [u8], a: &[u8], b: &[u8]) -> Result<usize, ConcatError> {
    let required = required_capacity(a, b);
    let capacity = dest.len();

    if required > capacity {
        debug!(required, capacity, "buffer too small for concatenation");
        return Err(ConcatError::CapacityExceeded { required, capacity });
    }

    let (head, rest) = dest.split_at_mut(a.len());
    head.copy_from_slice(a);
    let (tail, rest) = rest.split_at_mut(b.len());
    tail.copy_from_slice(b);
    rest[0] = 0;

    let len = a.len() + b.len();
    trace!(len, capacity, "concatenated");
    Ok(len)
}

/// Owned variant for callers that don't manage their own buffer.
pub fn concat(a: &CStr, b: &CStr) -> CString {
    let a = a.to_bytes();
    let b = b.to_bytes();

    let mut joined = Vec::with_capacity(required_capacity(a, b));
    joined.extend_from_slice(a);
    joined.extend_from_slice(b);

    // Both halves came out of a CStr, so no interior NUL can exist.
    CString::new(joined).unwrap_or_default()
}
