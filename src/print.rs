use std::io::{self, Write};

use tracing::trace;

pub const MESSAGE_PREFIX: &str = "Message from C: ";

/// Writes one `Message from C: <message>` line to `out`.
///
/// The line is assembled first and handed over in a single `write_all` so
/// that concurrent printers can't interleave halves of it.
pub fn write_message<W: Write>(out: &mut W, message: &[u8]) -> io::Result<()> {
    let mut line = Vec::with_capacity(MESSAGE_PREFIX.len() + message.len() + 1);
    line.extend_from_slice(MESSAGE_PREFIX.as_bytes());
    line.extend_from_slice(message);
    line.push(b'\n');

    out.write_all(&line)
}

/// Prints to stdout. Failures of stdout itself are not reported.
pub fn print_message(message: &[u8]) {
    trace!(len = message.len(), "printing message");

    let mut stdout = io::stdout().lock();
    let _ = write_message(&mut stdout, message).and_then(|_| stdout.flush());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello() {
        let mut out = Vec::new();
        write_message(&mut out, b"hello").unwrap();
        assert_eq!(out, b"Message from C: hello\n");
    }

    #[test]
    fn empty_message_still_gets_prefix() {
        let mut out = Vec::new();
        write_message(&mut out, b"").unwrap();
        assert_eq!(out, b"Message from C: \n");
    }

    #[test]
    fn bytes_are_passed_through_verbatim() {
        // Not valid UTF-8, which is fine: it is forwarded as-is.
        let mut out = Vec::new();
        write_message(&mut out, &[0xFF, b'%', b's']).unwrap();
        assert_eq!(out, b"Message from C: \xFF%s\n");
    }

    #[test]
    fn consecutive_messages_are_separate_lines() {
        let mut out = Vec::new();
        write_message(&mut out, b"one").unwrap();
        write_message(&mut out, b"two").unwrap();
        assert_eq!(out, b"Message from C: one\nMessage from C: two\n");
    }
}
