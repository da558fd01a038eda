//! Report data structures for commands.
//!
//! Commands collect data into a report, then render it to an [`Output`].

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{Failure, GenerateReport, GenerationResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
