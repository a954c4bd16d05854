//! The resolved configuration document and its persistence seam.

use crate::error::DocumentError;
use crate::recipe::Recipe;
use plist::{Dictionary, Value as PlistValue};
use std::fmt;
use uuid::Uuid;

/// One resolved configuration, materialized from a single form submission.
///
/// Documents are built once, stamped, and then treated as immutable: every
/// submission becomes a new document with its own identifier, never an update
/// of an existing one.
#[derive(Debug, Clone)]
pub struct PayloadDocument {
    pub display_name: String,
    pub version: String,
    /// Path of the recipe this document was resolved from.
    pub file_location: String,
    /// The target group selected in the form.
    pub group_name: Option<String>,
    /// Upper-case UUID string, generated at construction.
    pub uuid: String,
    outputs: Vec<(String, Option<String>)>,
}

impl PayloadDocument {
    /// Creates an empty document carrying the recipe's identity.
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            display_name: recipe.display_name.clone(),
            version: recipe.version.clone(),
            file_location: String::new(),
            group_name: None,
            uuid: Uuid::new_v4().to_string().to_uppercase(),
            outputs: Vec::new(),
        }
    }

    /// Attaches one resolved output. `None` means the output resolved to
    /// nothing; it is kept so the document still covers every declared key,
    /// but it is omitted when serializing.
    pub fn set_output(&mut self, key: String, value: Option<String>) {
        self.outputs.push((key, value));
    }

    /// Looks up a resolved output value.
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// All resolved outputs, in declaration order.
    pub fn outputs(&self) -> &[(String, Option<String>)] {
        &self.outputs
    }

    /// Serializes the document as an XML property list, wrapping the full
    /// attribute set under a `payloadContent` key. Outputs that resolved to
    /// nothing are omitted from the payload.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        let mut content = Dictionary::new();
        content.insert(
            "display_name".to_string(),
            PlistValue::from(self.display_name.clone()),
        );
        content.insert(
            "version".to_string(),
            PlistValue::from(self.version.clone()),
        );
        content.insert(
            "file_location".to_string(),
            PlistValue::from(self.file_location.clone()),
        );
        if let Some(group) = &self.group_name {
            content.insert("group_name".to_string(), PlistValue::from(group.clone()));
        }
        content.insert("uuid".to_string(), PlistValue::from(self.uuid.clone()));
        for (key, value) in &self.outputs {
            if let Some(value) = value {
                content.insert(key.clone(), PlistValue::from(value.clone()));
            }
        }

        let mut root = Dictionary::new();
        root.insert(
            "payloadContent".to_string(),
            PlistValue::Dictionary(content),
        );

        let mut buffer = Vec::new();
        PlistValue::Dictionary(root).to_writer_xml(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl fmt::Display for PayloadDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document {} for group {}",
            self.display_name,
            self.group_name.as_deref().unwrap_or("<none>")
        )
    }
}

/// The persistence seam: a collaborator that assigns durable identity to
/// finalized documents. The engine defines nothing about the storage format
/// beyond the document's attribute set.
pub trait DocumentStore {
    fn save(&mut self, document: PayloadDocument) -> Result<(), DocumentError>;
}

/// A simple in-memory store, useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<PayloadDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[PayloadDocument] {
        &self.documents
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, document: PayloadDocument) -> Result<(), DocumentError> {
        self.documents.push(document);
        Ok(())
    }
}
