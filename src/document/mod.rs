//! Markdown documents with a YAML front matter block
//!
//! This module handles:
//! - The typed [`Metadata`] record stored between the `---` delimiters
//! - Splitting file contents into metadata and body ([`splitter`])
//! - Appending redirect entries ([`augment`])
//! - Rendering a document back to its on-disk form

pub mod augment;
pub mod splitter;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

pub use augment::{append_redirect, redirect_entry};
pub use splitter::{DELIMITER, split};

/// Front matter fields recognized by the documentation site.
///
/// Keys not listed here are kept in `extra` and written back after the known
/// fields, so a rewrite never drops metadata it does not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,

    #[serde(
        rename = "isCorsResource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_cors_resource: Option<bool>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub subtitle: String,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub permalink: String,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub roles: String,

    #[serde(rename = "isPublic", default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(
        rename = "redirect_from",
        default,
        deserialize_with = "scalar_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub redirect_from: Vec<String>,

    #[serde(
        rename = "redirectFromIds",
        default,
        deserialize_with = "scalar_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub redirect_from_ids: Vec<String>,

    #[serde(
        rename = "allowedRoles",
        default,
        deserialize_with = "scalar_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_roles: Vec<String>,

    #[serde(
        rename = "freeTrialUrl",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub free_trial_url: String,

    #[serde(
        rename = "helpKeys",
        default,
        deserialize_with = "scalar_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub help_keys: Vec<String>,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub next: String,

    #[serde(
        rename = "prev",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub previous: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// One Markdown file split into its metadata record and body text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
    /// Whether a closed `---` block was found at the top of the file
    pub front_matter: bool,
}

impl Document {
    /// A document without a front matter block; the whole content is body.
    pub fn plain(body: String) -> Self {
        Self {
            metadata: Metadata::default(),
            body,
            front_matter: false,
        }
    }

    /// Render the document as delimiter, YAML metadata, delimiter, body.
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(&self.metadata)?;
        let mut out = String::with_capacity(yaml.len() + self.body.len() + 8);
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&yaml);
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        Ok(out)
    }
}

/// Stringify a YAML scalar (string, number or bool). Null becomes empty.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| serde::de::Error::custom("expected a scalar value"))
}

fn scalar_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item)
                    .ok_or_else(|| serde::de::Error::custom("expected a list of scalars"))
            })
            .collect(),
        other => scalar_to_string(&other)
            .map(|s| vec![s])
            .ok_or_else(|| serde::de::Error::custom("expected a list of scalars")),
    }
}
