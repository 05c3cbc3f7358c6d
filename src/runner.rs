//! Runner: file-write step, then integer-report step

use crate::file_writer::{self, Result};
use crate::reporter;

/// Run both steps in order; the reporter is skipped if the write fails
pub fn run() -> Result<()> {
    let span = tracing::debug_span!("run");
    let _enter = span.enter();

    file_writer::write_fixed_file()?;
    reporter::report_wrapped_value()
}
