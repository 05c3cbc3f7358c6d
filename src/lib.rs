//! wrapwrite - writes a fixed string to a fixed file, then prints the
//! unsigned wraparound of a negative literal
//!
//! The binary runs [`runner::run`]; the components are exposed for tests.

pub mod cli;
pub mod file_writer;
pub mod reporter;
pub mod runner;
