#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for interpreting local `$ref` pointers of the form `#/components/<kind>/<name>`.
//! External documents are never fetched.

use crate::error::ResolutionError;

/// A decoded local component pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRef<'a> {
    /// The components section, e.g. `schemas` or `responses`.
    pub kind: &'a str,
    /// The component name (final segment).
    pub name: &'a str,
}

/// Splits a pointer into its component section and name.
///
/// Anything other than exactly four `/`-separated segments starting with `#` and
/// `components` is rejected.
pub fn parse_component_ref(pointer: &str) -> Result<ComponentRef<'_>, ResolutionError> {
    let segments: Vec<&str> = pointer.split('/').collect();
    match segments.as_slice() {
        ["#", "components", kind, name] if !kind.is_empty() && !name.is_empty() => {
            Ok(ComponentRef {
                kind: *kind,
                name: *name,
            })
        }
        _ => Err(ResolutionError::new(pointer)),
    }
}

/// Returns the component name a pointer targets.
pub fn component_name(pointer: &str) -> Result<&str, ResolutionError> {
    parse_component_ref(pointer).map(|r| r.name)
}
