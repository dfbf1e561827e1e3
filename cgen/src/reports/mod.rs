//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod inspect;
mod name;
mod output;
mod post_process;

pub use inspect::{ApiInfo, FileInfo, InspectReport, ModelInfo, OperationInfo, PropertyInfo};
pub use name::NameReport;
pub use output::{Output, Report, TerminalOutput};
pub use post_process::PostProcessReport;
