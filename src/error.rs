use thiserror::Error;

/// Errors that can occur while loading and converting a recipe property list.
///
/// Everything past the load boundary is tolerant by design: malformed layout
/// nodes and expressions degrade to absent output instead of erroring.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Failed to read or parse recipe '{path}': {source}")]
    Plist {
        path: String,
        #[source]
        source: plist::Error,
    },

    #[error("Recipe '{path}' is not a property-list dictionary")]
    NotADictionary { path: String },

    #[error("Recipe '{path}' is missing required entry '{key}'")]
    MissingEntry { path: String, key: &'static str },
}

/// Errors that can occur while serializing a resolved payload document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to serialize payload document: {0}")]
    Serialize(#[from] plist::Error),

    #[error("Serialized payload document was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
