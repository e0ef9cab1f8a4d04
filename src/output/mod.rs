//! Output formatting for progress lines and the final report

mod formatter;

pub use formatter::{format_millis, OutputFormatter, PlainFormatter};
