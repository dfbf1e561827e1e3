//! Core operations.
//!
//! This module contains the business logic for cgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod inspect;
pub mod name;
pub mod post_process;

pub use inspect::inspect;
pub use name::name;
pub use post_process::post_process;
