//! Integer reporter: prints a negative literal reinterpreted as `u64`

use crate::file_writer::{Result, RunnerError};
use std::io::{self, Write};

/// Literal whose unsigned reinterpretation gets printed
pub const WRAPPED_LITERAL: i64 = -5;

/// Reinterpret `value` as an unsigned 64-bit integer (two's complement, mod 2^64)
pub fn wrap_to_unsigned(value: i64) -> u64 {
    value as u64
}

/// 2^64 - 5
pub fn wrapped_value() -> u64 {
    wrap_to_unsigned(WRAPPED_LITERAL)
}

/// Write the wrapped value in decimal followed by a newline
pub fn write_wrapped_value<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", wrapped_value())
}

/// Print the wrapped value on stdout
///
/// A closed or full stdout is returned as [`RunnerError::Report`].
pub fn report_wrapped_value() -> Result<()> {
    tracing::debug!(literal = WRAPPED_LITERAL, "reporting wrapped value");

    let mut stdout = io::stdout().lock();
    write_wrapped_value(&mut stdout)
        .and_then(|()| stdout.flush())
        .map_err(|source| RunnerError::Report { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_wrapped_value_exact() {
        assert_eq!(wrapped_value(), 18_446_744_073_709_551_611);
        assert_eq!(wrapped_value(), u64::MAX - 4);
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap_to_unsigned(0), 0);
        assert_eq!(wrap_to_unsigned(-1), u64::MAX);
        assert_eq!(wrap_to_unsigned(i64::MIN), 1u64 << 63);
        assert_eq!(wrap_to_unsigned(i64::MAX), i64::MAX as u64);
    }

    #[test]
    fn test_write_wrapped_value_line() {
        let mut out = Vec::new();
        write_wrapped_value(&mut out).unwrap();
        assert_eq!(out, b"18446744073709551611\n");
    }

    #[test]
    fn test_write_wrapped_value_surfaces_io_error() {
        let err = write_wrapped_value(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_report_error_message() {
        let err = RunnerError::Report {
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        };
        assert_eq!(err.to_string(), "failed to print wrapped value to stdout");
    }
}
