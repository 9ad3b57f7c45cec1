#![deny(missing_docs)]

//! # Strategies
//!
//! This module defines the architecture for pluggable output syntax.
//!
//! - **traits**: Defines `SyntaxStrategy` for implementing new targets.
//! - **java**: The Java client implementation.

pub mod java;
pub mod traits;

// Re-export for easier access downstream
pub use java::JavaStrategy;
pub use traits::SyntaxStrategy;
