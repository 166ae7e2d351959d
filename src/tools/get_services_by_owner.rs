use crate::catalog::CatalogStore;
use crate::error::ToolError;
use crate::tools::{JsonObject, ToolEntry, args, input_schema};
use rmcp::model::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Filter services by owner")]
pub struct GetServicesByOwnerRequest {
    #[schemars(description = "Name of the owner, matched exactly")]
    pub owner: String,
}

pub fn tool() -> ToolEntry {
    let tool = Tool {
        name: "get_services_by_owner".into(),
        title: Some("Get Services By Owner".into()),
        description: Some("[Catalog] Retrieve services owned by a specific person".into()),
        input_schema: input_schema::<GetServicesByOwnerRequest>(),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    };
    ToolEntry {
        name: "get_services_by_owner",
        tool,
        handler: Arc::new(|request, store, _call| Box::pin(handle(request, store))),
    }
}

pub async fn handle(request: Option<JsonObject>, store: Arc<CatalogStore>) -> Result<String, ToolError> {
    let owner = args::required_string(request.as_ref(), "owner")?;
    let services = store.get_by_owner(&owner)?;
    Ok(serde_json::to_string(&services)?)
}
