#![deny(missing_docs)]

//! # Code Generation
//!
//! The engine that decides what gets generated and under which names.
//!
//! - **resolver**: schema -> type reference.
//! - **naming**: wire names -> identifiers.
//! - **emitter**: object schemas -> data types.
//! - **binder**: operations -> method descriptions.
//! - **assembler**: the whole document -> `ClientModel`.
//! - **models**: the target-independent output tree.

pub mod assembler;
pub mod binder;
pub mod emitter;
pub mod models;
pub mod naming;
pub mod resolver;

pub use assembler::{assemble, collect_tags, count_types, DEFAULT_TAG};
pub use binder::{GroupScope, OperationBinder};
pub use emitter::ClassEmitter;
pub use models::{
    Accessor, AccessorKind, BodyArgument, ClientFacade, ClientModel, ErrorType, GeneratedField,
    GeneratedType, GroupHandle, OperationBinding, OperationGroup, PathArgument, PathSegment,
    Primitive, QueryArgument, TypeCategory, TypeRef,
};
pub use naming::{IdentifierNamer, NameTable};
pub use resolver::resolve_type;
