use futures::future::BoxFuture;
use rmcp::model::Tool;
use schemars::JsonSchema;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::CatalogStore;
use crate::error::ToolError;

pub mod args;
pub mod get_service_by_id;
pub mod get_services_by_owner;
pub mod list_services;
mod logged;

pub use logged::logged;

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Serialized JSON text returned to the caller.
pub type HandlerFuture = BoxFuture<'static, Result<String, ToolError>>;

pub type Handler =
    Arc<dyn Fn(Option<JsonObject>, Arc<CatalogStore>, CallId) -> HandlerFuture + Send + Sync>;

/// Correlates every log line of one invocation. Servers pass the protocol request id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallId(String);

impl CallId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CallId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CallId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn to_object(v: serde_json::Value) -> JsonObject {
    match v {
        serde_json::Value::Object(m) => m,
        _ => serde_json::Map::new(),
    }
}

/// JSON schema of `T` as an MCP input schema object.
pub fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    Arc::new(to_object(serde_json::to_value(schema).unwrap_or_default()))
}

pub struct ToolEntry {
    pub name: &'static str,
    pub tool: Tool,
    pub handler: Handler,
}

pub fn all_entries() -> Vec<ToolEntry> {
    vec![
        list_services::tool(),
        get_service_by_id::tool(),
        get_services_by_owner::tool(),
    ]
}

/// Every tool, each wrapped with invocation logging.
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            entries: all_entries().into_iter().map(logged).collect(),
        }
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub async fn dispatch(
        &self,
        name: &str,
        args: Option<JsonObject>,
        store: Arc<CatalogStore>,
        call_id: CallId,
    ) -> Result<String, ToolError> {
        match self.entries.iter().find(|e| e.name == name) {
            Some(entry) => (entry.handler)(args, store, call_id).await,
            None => {
                tracing::warn!(tool = name, %call_id, "call for unknown tool rejected");
                Err(ToolError::UnknownTool(name.to_string()))
            }
        }
    }
}
