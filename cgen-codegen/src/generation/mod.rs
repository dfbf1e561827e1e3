//! Generation-time plumbing shared by language generators.
//!
//! - [`ImportCollector`] - Model include tracking and deduplication
//! - [`PostProcess`] - The post-generation hook contract
//! - [`CommandRunner`] - Process spawning behind a seam tests can replace

mod imports;
mod post_process;

pub use imports::ImportCollector;
pub use post_process::{
    CommandRunner, PostProcess, PostProcessCommand, PostProcessOutcome, SystemRunner,
};
