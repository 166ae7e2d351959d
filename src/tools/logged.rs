use std::sync::Arc;
use std::time::Instant;

use crate::tools::ToolEntry;

/// Wraps a tool so every call logs its arguments, its outcome and how long it took.
/// The inner result is returned untouched.
pub fn logged(entry: ToolEntry) -> ToolEntry {
    let name = entry.name;
    let inner = entry.handler.clone();
    ToolEntry {
        handler: Arc::new(move |request, store, call_id| {
            let inner = inner.clone();
            Box::pin(async move {
                let started = Instant::now();
                let arguments = serde_json::to_string(&request).unwrap_or_default();
                tracing::info!(tool = name, %call_id, %arguments, "tool invoked");

                let result = inner(request, store, call_id.clone()).await;

                let elapsed = started.elapsed();
                match &result {
                    Ok(output) => {
                        tracing::info!(tool = name, %call_id, result = %output, ?elapsed, "tool succeeded");
                    }
                    Err(e) if e.is_caller_error() => {
                        tracing::warn!(tool = name, %call_id, error = %e, ?elapsed, "tool failed");
                    }
                    Err(e) => {
                        tracing::error!(tool = name, %call_id, error = %e, ?elapsed, "tool failed");
                    }
                }
                result
            })
        }),
        ..entry
    }
}
