//! API description model for the cgen C client generator.
//!
//! This crate holds the subset of an OpenAPI 3 document the generator walks:
//! operations grouped by path, their parameters and responses, and the named
//! schemas under `components`. Documents are read from JSON with key order
//! preserved, so every traversal is deterministic.
//!
//! # Architecture
//!
//! ```text
//! openapi.json → cgen-ir (ApiSpec) → cgen-codegen (naming, types) → cgen-codegen-c
//! ```

mod operation;
mod schema;
mod spec;

pub use operation::{
    HttpMethod, MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody,
    Response,
};
pub use schema::{AdditionalProperties, COMPONENT_SCHEMA_PREFIX, Schema};
pub use spec::{ApiSpec, Components, Info};
