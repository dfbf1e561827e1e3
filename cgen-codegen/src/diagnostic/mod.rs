//! Diagnostics emitted while resolving names and post-processing files.
//!
//! Every corrective rename and every failed post-processing step is recorded
//! as a [`Diagnostic`] in a shared [`Diagnostics`] collector. Callers (and
//! tests) inspect the collector instead of scraping log output; each entry is
//! also mirrored to `tracing` when it is pushed.

mod collector;
mod types;

pub use collector::Diagnostics;
pub use types::{Diagnostic, Rename, Severity};
