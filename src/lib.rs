//! Native helpers exported over the C ABI.
//!
//! The library is loaded by a foreign-call bridge (the JVM's FFM API, `ctypes`,
//! plain `dlopen`) under the name `nativelib`. Every export is a thin shim that
//! turns raw pointers into slices and forwards to the safe functions in
//! [`concat`] and [`print`]. Declarations for C callers live in
//! `include/nativelib.h`.

use std::ffi::{c_char, c_int, CStr};

pub mod concat;
pub mod error;
pub mod logging;
pub mod print;

pub use concat::{concat, concat_into, required_capacity};
pub use error::{ConcatError, LoggingError, CAPACITY_EXCEEDED};
pub use print::{write_message, MESSAGE_PREFIX};

/// Concatenates `str1` and `str2` into `dest`, NUL-terminated.
///
/// Returns the content length, or `-1` if `strlen(str1) + strlen(str2) + 1`
/// exceeds `dest_size`, in which case `dest` is not written at all. A
/// negative `dest_size` counts as zero.
///
/// # Safety
///
/// `str1` and `str2` must point to NUL-terminated strings. `dest` must be
/// valid for writes of `dest_size` bytes and must not overlap either input.
#[export_name = "concatenate_strings"]
pub unsafe extern "C" fn concatenate_strings(
    dest: *mut c_char,
    str1: *const c_char,
    str2: *const c_char,
    dest_size: c_int,
) -> c_int {
    debug_assert!(!str1.is_null() && !str2.is_null());

    let a = unsafe { CStr::from_ptr(str1) }.to_bytes();
    let b = unsafe { CStr::from_ptr(str2) }.to_bytes();

    let capacity = usize::try_from(dest_size).unwrap_or(0);
    let dest: &mut [u8] = if capacity == 0 {
        &mut []
    } else {
        debug_assert!(!dest.is_null());
        unsafe { std::slice::from_raw_parts_mut(dest.cast::<u8>(), capacity) }
    };

    match concat_into(dest, a, b) {
        // len < capacity <= c_int::MAX
        Ok(len) => len as c_int,
        Err(err) => err.sentinel(),
    }
}

/// Prints `Message from C: <message>` and a newline to stdout.
///
/// # Safety
///
/// `message` must point to a NUL-terminated string.
#[cfg(feature = "print")]
#[export_name = "print_from_c"]
pub unsafe extern "C" fn print_from_c(message: *const c_char) {
    debug_assert!(!message.is_null());

    let message = unsafe { CStr::from_ptr(message) };
    print::print_message(message.to_bytes());
}

/// Installs a stderr logger at the given verbosity (0 = errors .. 4 = trace).
/// Returns `0`, or `-1` if a logger was already installed.
#[export_name = "nativelib_init_logging"]
pub extern "C" fn nativelib_init_logging(verbosity: c_int) -> c_int {
    match logging::init(logging::level_from_verbosity(verbosity)) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[cfg(all(test, feature = "c-harness"))]
mod harness_tests {
    use std::ffi::{c_char, c_int, CStr};

    extern "C" {
        fn harness_concat(
            dest: *mut c_char,
            str1: *const c_char,
            str2: *const c_char,
            dest_size: c_int,
        ) -> c_int;
        fn harness_concat_demo(dest: *mut c_char, dest_size: c_int) -> c_int;
        #[cfg(feature = "print")]
        fn harness_print(message: *const c_char);
    }

    #[test]
    fn demo_from_c() {
        let mut buf = [0 as c_char; 256];
        let len = unsafe { harness_concat_demo(buf.as_mut_ptr(), buf.len() as c_int) };

        assert_eq!(len, 15);
        let out = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(out.to_bytes(), b"Java 22 FFM API");
    }

    #[test]
    fn demo_from_c_too_small() {
        let mut buf = [7 as c_char; 15];
        let len = unsafe { harness_concat_demo(buf.as_mut_ptr(), buf.len() as c_int) };

        assert_eq!(len, -1);
        assert!(buf.iter().all(|&c| c == 7));
    }

    #[test]
    fn foo_bar_from_c() {
        let mut buf = [0 as c_char; 7];
        let len = unsafe {
            harness_concat(buf.as_mut_ptr(), c"foo".as_ptr(), c"bar".as_ptr(), 7)
        };

        assert_eq!(len, 6);
        let out = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(out.to_bytes(), b"foobar");
    }

    #[cfg(feature = "print")]
    #[test]
    fn print_from_c_side() {
        unsafe { harness_print(c"hello".as_ptr()) };
    }
}
