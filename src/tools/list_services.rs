use crate::catalog::CatalogStore;
use crate::error::ToolError;
use crate::tools::{JsonObject, ToolEntry, input_schema};
use rmcp::model::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "List every service in the catalog")]
pub struct ListServicesRequest {}

pub fn tool() -> ToolEntry {
    let tool = Tool {
        name: "list_services".into(),
        title: Some("List Services".into()),
        description: Some("[Catalog] Retrieve all services".into()),
        input_schema: input_schema::<ListServicesRequest>(),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    };
    ToolEntry {
        name: "list_services",
        tool,
        handler: Arc::new(|request, store, _call| Box::pin(handle(request, store))),
    }
}

pub async fn handle(_request: Option<JsonObject>, store: Arc<CatalogStore>) -> Result<String, ToolError> {
    let services = store.load_all()?;
    Ok(serde_json::to_string(&*services)?)
}
