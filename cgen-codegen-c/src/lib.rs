//! C client generator for cgen.
//!
//! Turns an API description into the names, types and template contexts of
//! a C client, and runs an optional external formatter over the output.
//!
//! - [`CNaming`] - Identifier, file name and include resolution
//! - [`CTypes`] - Schema to C type resolution and default initializers
//! - [`adapt_property`] - Property descriptors with C enum handling
//! - [`Client`] - Every model, API and output file of a client, resolved
//! - [`Generator`] - Renders and writes a whole client
//! - [`CPostProcessor`] - The `C_POST_PROCESS_FILE` hook

mod adapter;
mod client;
mod context;
mod generator;
mod layout;
mod naming;
mod post_process;
mod resolver;
mod type_mapper;
mod types;

pub use adapter::adapt_property;
pub use cgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use client::{Client, DEFAULT_GROUP, PlannedFile};
pub use context::{ApiContext, ModelContext, OperationContext, ParamContext};
pub use generator::Generator;
pub use layout::{
    API_FOLDER, DOC_FOLDER, MODEL_FOLDER, SUPPORTING_FILES, TEST_FOLDER, TemplateFile, api_files,
    model_files, supporting_files,
};
pub use naming::C_NAMING;
pub use post_process::{CPostProcessor, POST_PROCESS_ENV};
pub use resolver::CNaming;
pub use type_mapper::{C_PRIMITIVES, CTypeMapper, DEFAULT_TYPE_MAP};
pub use types::CTypes;
