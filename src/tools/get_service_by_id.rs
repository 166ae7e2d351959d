use crate::catalog::CatalogStore;
use crate::error::ToolError;
use crate::tools::{JsonObject, ToolEntry, args, input_schema};
use rmcp::model::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Returned instead of an error when no record has the requested id.
pub const NOT_FOUND: &str = r#"{"error": "Service not found"}"#;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Look up a service by id")]
pub struct GetServiceByIdRequest {
    #[schemars(description = "ID of the service")]
    pub id: f64,
}

pub fn tool() -> ToolEntry {
    let tool = Tool {
        name: "get_service_by_id".into(),
        title: Some("Get Service By Id".into()),
        description: Some("[Catalog] Retrieve a specific service by its ID".into()),
        input_schema: input_schema::<GetServiceByIdRequest>(),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    };
    ToolEntry {
        name: "get_service_by_id",
        tool,
        handler: Arc::new(|request, store, _call| Box::pin(handle(request, store))),
    }
}

pub async fn handle(request: Option<JsonObject>, store: Arc<CatalogStore>) -> Result<String, ToolError> {
    let id = args::required_integer(request.as_ref(), "id")?;
    match store.get_by_id(id)? {
        Some(service) => Ok(serde_json::to_string(&service)?),
        None => Ok(NOT_FOUND.to_string()),
    }
}
