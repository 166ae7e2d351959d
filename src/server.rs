use rmcp::{
    ErrorData, ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::error::ToolError;
use crate::tools::{CallId, JsonObject, ToolRegistry};

pub const INSTRUCTIONS: &str = "Read-only catalog of internal services. Use list_services to browse, \
get_service_by_id for a single entry and get_services_by_owner to filter by owner.";

/// MCP handler over the shared catalog. Cheap to clone, one per session.
#[derive(Clone)]
pub struct CatalogServer {
    store: Arc<CatalogStore>,
    registry: Arc<ToolRegistry>,
}

impl CatalogServer {
    pub fn new(store: Arc<CatalogStore>, registry: Arc<ToolRegistry>) -> Self {
        Self { store, registry }
    }

    pub fn tool_list(&self, call_id: &CallId) -> ListToolsResult {
        tracing::info!(%call_id, method = "tools/list", "mcp request");
        let tools = self.registry.tools();
        tracing::info!(%call_id, method = "tools/list", count = tools.len(), "mcp request succeeded");
        ListToolsResult {
            tools,
            meta: None,
            next_cursor: None,
        }
    }

    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        call_id: CallId,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::info!(%call_id, method = "tools/call", tool = name, "mcp request");
        let result = self
            .registry
            .dispatch(name, arguments, self.store.clone(), call_id.clone())
            .await
            .map(|text| CallToolResult::success(vec![Content::text(text)]))
            .map_err(to_error_data);
        match &result {
            Ok(_) => tracing::info!(%call_id, method = "tools/call", tool = name, "mcp request succeeded"),
            Err(e) => tracing::warn!(
                %call_id,
                method = "tools/call",
                tool = name,
                code = ?e.code,
                error = %e.message,
                "mcp request failed"
            ),
        }
        result
    }
}

/// Protocol request id as a log correlation id.
pub fn call_id_of(id: &RequestId) -> CallId {
    match id {
        NumberOrString::Number(n) => CallId::from(n.to_string()),
        NumberOrString::String(s) => CallId::from(s.to_string()),
    }
}

/// Caller mistakes become `invalid_params`, everything else `internal_error`.
pub fn to_error_data(e: ToolError) -> ErrorData {
    if e.is_caller_error() {
        ErrorData::invalid_params(e.to_string(), None)
    } else {
        ErrorData::internal_error(e.to_string(), None)
    }
}

impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(self.tool_list(&call_id_of(&context.id)))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke(&request.name, request.arguments, call_id_of(&context.id))
            .await
    }
}
