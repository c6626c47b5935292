//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; the fault boundary and the store error
//! translation read it so log lines and error bodies share one id.

use tokio::task_local;

/// Value reported when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if called inside a request scope.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn outside_scope_is_unknown() {
        assert_eq!(current(), None);
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[tokio::test]
    async fn inner_scope_shadows_outer() {
        let result = with_trace_id("outer".to_string(), async {
            assert_eq!(trace_id(), "outer");
            let inner = with_trace_id("inner".to_string(), async { trace_id() }).await;
            assert_eq!(trace_id(), "outer");
            inner
        })
        .await;

        assert_eq!(result, "inner");
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }
}
