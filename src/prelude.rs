//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the katachi
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.

// Expression parsing and resolution
pub use crate::ast::{Expression, Value};
pub use crate::resolver::{resolve, resolve_str};

// Recipe model and loading
pub use crate::recipe::{
    ChoiceOption, FieldDescriptor, FieldKind, LayoutNode, Recipe, RecipeLoader,
};

// Form rendering and submission
pub use crate::form::{FormRenderer, SavedValues, Submission, resolve_submission};

// Documents and persistence
pub use crate::document::{DocumentStore, MemoryStore, PayloadDocument};

// Runtime data
pub use crate::data::{FormData, GroupConfig};

// Error types
pub use crate::error::{DocumentError, RecipeError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
