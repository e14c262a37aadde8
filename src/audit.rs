use serde_json::Value;

/// Records a state-changing store operation as a structured event on the
/// `audit` target.
pub fn log_audit(action: &str, resource: &str, metadata: Value) {
    tracing::info!(
        target: "audit",
        action,
        resource,
        metadata = %metadata,
        "audit"
    );
}
