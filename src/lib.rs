//! # Katachi - Recipe-Driven Form Rendering and Answer Resolution
//!
//! **Katachi** turns declarative configuration "recipes" into HTML input
//! forms, and turns the submitted answers back into persisted configuration
//! documents. A recipe is a property list describing a set of configurable
//! outputs, their types, defaults, and conditional dependencies; the engine
//! walks its layout tree to emit one control per field, and evaluates a small
//! per-field expression language to compute each output's stored value.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Parse a recipe property list into the canonical
//!     [`Recipe`](recipe::Recipe) model via [`RecipeLoader`](recipe::RecipeLoader).
//!     The group/field layout is decided once at load time.
//! 2.  **Render**: Use a [`FormRenderer`](form::FormRenderer) to emit the form
//!     markup for the layout tree, followed by the fixed group selector.
//! 3.  **Resolve**: On submission, [`resolve_submission`](form::resolve_submission)
//!     evaluates every declared output expression against the posted data and
//!     assembles a stamped [`PayloadDocument`](document::PayloadDocument).
//! 4.  **Persist**: Hand the document to a [`DocumentStore`](document::DocumentStore),
//!     or serialize it as an XML property list with `to_xml`.
//!
//! Expressions are parsed once into a tagged [`Expression`](ast::Expression)
//! tree and evaluated recursively; malformed expressions resolve to nothing
//! rather than erroring, so quirky recipes degrade instead of failing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use katachi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the recipe property list.
//!     let loader = RecipeLoader::new("recipes");
//!     let recipe = loader.load("screensaver.plist")?;
//!
//!     // 2. Render the form (GET path).
//!     let groups = vec!["engineering".to_string(), "design".to_string()];
//!     let html = FormRenderer::new(&recipe, &groups).render();
//!     println!("{html}");
//!
//!     // 3. Resolve a submission (POST path).
//!     let data: FormData = [("flag", "1"), ("group_id", "engineering")]
//!         .into_iter()
//!         .collect();
//!     let submission = resolve_submission(&recipe, &data);
//!     println!("{}", submission.document.to_xml()?);
//!
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod data;
pub mod document;
pub mod error;
pub mod form;
pub mod prelude;
pub mod recipe;
pub mod resolver;
