//! Declarative call schemas in the function-calling format
//!
//! A schema serializes as
//! `{"type": "function", "name", "description", "parameters": {"type": "object",
//! "properties": {...}, "required": [...], "additionalProperties": false}}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON type of a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
}

/// Schema for one named parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub description: String,
}

/// Object schema describing a tool's parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Always "object"
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: false,
        }
    }
}

/// Call schema advertised to the conversational engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSchema {
    /// Always "function"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

impl CallSchema {
    /// Start a function schema with no parameters
    pub fn function(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: "function".to_string(),
            name: name.into(),
            description: description.into(),
            parameters: ParameterSchema::default(),
        }
    }

    /// Add a required parameter
    pub fn param(mut self, name: &str, kind: ParamType, description: &str) -> Self {
        self = self.optional_param(name, kind, description);
        if !self.parameters.required.iter().any(|r| r == name) {
            self.parameters.required.push(name.to_string());
        }
        self
    }

    /// Add a parameter the caller may omit
    pub fn optional_param(mut self, name: &str, kind: ParamType, description: &str) -> Self {
        self.parameters.properties.insert(
            name.to_string(),
            PropertySchema {
                kind,
                description: description.to_string(),
            },
        );
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.parameters.required.iter().any(|r| r == name)
    }
}
