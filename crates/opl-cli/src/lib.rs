//! Library surface of the CLI, exposed for integration tests.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;

pub use cli::{Cli, ReportFormat};
pub use pipeline::{PipelineOutput, Report, run};
pub use summary::print_report;
