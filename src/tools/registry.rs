//! Registry binding call schemas to async handlers

use super::result::ToolResult;
use super::schema::CallSchema;
use crate::error::{MissionError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executable side of a registered tool
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with the decoded argument object
    async fn invoke(&self, args: Value) -> Result<ToolResult>;
}

/// Schema and handler registered under one name
#[derive(Clone)]
pub struct ToolEntry {
    pub schema: CallSchema,
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Tool name to entry mapping, populated at startup.
///
/// Names are case-sensitive; registering a name twice replaces the earlier
/// entry.
#[derive(Default)]
pub struct ToolRegistry {
    entries: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, returning the entry it replaced
    pub fn register(
        &mut self,
        name: impl Into<String>,
        schema: CallSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Option<ToolEntry> {
        let name = name.into();
        debug!("Registering tool: {}", name);

        let previous = self
            .entries
            .insert(name.clone(), ToolEntry { schema, handler });
        if previous.is_some() {
            warn!("Tool {} re-registered, replacing previous handler", name);
        }
        previous
    }

    /// Look up a tool by exact name
    pub fn lookup(&self, name: &str) -> Result<&ToolEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| MissionError::UnknownTool(name.to_string()))
    }

    /// Look up and run a tool
    pub async fn invoke(&self, name: &str, args: Value) -> Result<ToolResult> {
        let entry = match self.lookup(name) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Unknown tool: {}", name);
                return Err(e);
            }
        };

        debug!("Executing tool: {}", name);
        entry.handler.invoke(args).await
    }

    /// Every registered schema, ordered by tool name
    pub fn schemas(&self) -> Vec<CallSchema> {
        let mut schemas: Vec<_> = self.entries.values().map(|e| e.schema.clone()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode a tool's argument payload into its parameter struct.
///
/// A missing payload (`null`) is treated as an empty object.
pub(crate) fn decode_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| MissionError::invalid_arguments(tool, e))
}
