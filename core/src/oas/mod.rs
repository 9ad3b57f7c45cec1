#![deny(missing_docs)]

//! # API Description Module
//!
//! - **models**: The immutable input model generation consumes.
//! - **shims**: Loose serde structures mirroring the document.
//! - **document**: Lowering from document text to the model.
//! - **ref_utils**: Local `#/components/...` pointer handling.

pub mod document;
pub mod models;
pub mod ref_utils;
pub mod shims;

pub use document::{derive_operation_id, load_api_document, parse_api_document};
pub use models::{
    ApiInfo, ApiModel, BodyFormat, Content, HttpMethod, Operation, ParamLocation, Parameter,
    PathItem, Representation, ResponseDef, SchemaFormat, SchemaKind, SchemaNode,
};
