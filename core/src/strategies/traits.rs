#![deny(missing_docs)]

//! # Syntax Strategy Trait
//!
//! Defines the interface required to render the generated client tree in a specific
//! target language.

use crate::codegen::models::{ClientModel, GeneratedType, OperationGroup};
use crate::error::AppResult;
use crate::sink::{ArtifactKey, ArtifactSet};

/// A strategy trait for decoupling target syntax from generation.
///
/// Implementors supply the naming data the engine consults (reserved words and type
/// suffixes) and turn each part of a `ClientModel` into source text. They never decide
/// names or types themselves.
pub trait SyntaxStrategy {
    // --- Naming ---

    /// Words that cannot be used as identifiers in the target language.
    fn reserved_words(&self) -> &'static [&'static str];

    /// Appended to the api name to form the root client name.
    fn client_suffix(&self) -> &'static str {
        "Client"
    }

    /// Appended to the api name to form the error type name.
    fn error_suffix(&self) -> &'static str {
        "Error"
    }

    /// Appended to a tag to form its group type name.
    fn group_suffix(&self) -> &'static str {
        "Tag"
    }

    // --- Rendering ---

    /// Extension of the generated source files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the root client.
    fn render_client(&self, model: &ClientModel) -> String;

    /// Renders the shared error type.
    fn render_error(&self, model: &ClientModel) -> String;

    /// Renders one named schema type.
    fn render_schema(&self, model: &ClientModel, ty: &GeneratedType) -> String;

    /// Renders one named response type.
    fn render_response(&self, model: &ClientModel, ty: &GeneratedType) -> String;

    /// Renders one operation group.
    fn render_group(&self, model: &ClientModel, group: &OperationGroup) -> String;

    /// Renders the whole model: client, error, schemas, responses, then groups.
    fn render(&self, model: &ClientModel) -> AppResult<ArtifactSet> {
        let mut artifacts = ArtifactSet::new(self.file_extension());
        artifacts.insert(
            ArtifactKey::new(&model.namespace, &model.client.name),
            self.render_client(model),
        )?;
        artifacts.insert(
            ArtifactKey::new(&model.namespace, &model.error.name),
            self.render_error(model),
        )?;

        let schemas_ns = model.schemas_namespace();
        for ty in &model.schemas {
            artifacts.insert(
                ArtifactKey::new(&schemas_ns, &ty.name),
                self.render_schema(model, ty),
            )?;
        }

        let responses_ns = model.responses_namespace();
        for ty in &model.responses {
            artifacts.insert(
                ArtifactKey::new(&responses_ns, &ty.name),
                self.render_response(model, ty),
            )?;
        }

        let groups_ns = model.groups_namespace();
        for group in &model.groups {
            artifacts.insert(
                ArtifactKey::new(&groups_ns, &group.type_name),
                self.render_group(model, group),
            )?;
        }

        Ok(artifacts)
    }
}
