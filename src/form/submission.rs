//! The submission path: resolves every declared output against posted data
//! and assembles the persisted payload document.

use crate::ast::Expression;
use crate::data::FormData;
use crate::document::PayloadDocument;
use crate::recipe::Recipe;
use crate::resolver;
use ahash::AHashMap;

/// The result of resolving one form submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The document handed to the persistence layer.
    pub document: PayloadDocument,
    /// Resolved value per output key, kept so a caller can re-render the
    /// form pre-filled after a rejected submission.
    pub answers: AHashMap<String, Option<String>>,
}

/// Resolves every output declared by the recipe, in declaration order, and
/// stamps the document with its origin, target group and fresh identifier.
///
/// Every declared key is populated, including those whose expression resolved
/// to nothing. No required-field validation happens here; that is enforced by
/// the rendered form itself.
pub fn resolve_submission(recipe: &Recipe, data: &FormData) -> Submission {
    let mut document = PayloadDocument::new(recipe);
    let mut answers = AHashMap::new();

    for (key, expression) in &recipe.outputs {
        let value = resolver::resolve(&Expression::parse(expression), data);
        answers.insert(key.clone(), value.clone());
        document.set_output(key.clone(), value);
    }

    document.file_location = recipe.source_path.display().to_string();
    document.group_name = data.get("group_id").map(str::to_string);

    Submission { document, answers }
}
