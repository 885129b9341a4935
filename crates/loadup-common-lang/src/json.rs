use serde::Serialize;

/// Renders any serializable value as a compact JSON string, for log lines
/// and `Display`-style dumps.
///
/// Serialization failures (e.g. a map with non-string keys) are logged and
/// yield an empty string.
///
/// # Example
/// ```
/// use loadup_common_lang::{to_json_string, BaseResponse};
///
/// let json = to_json_string(&BaseResponse::success());
/// assert!(json.contains("\"SUCCESS\""));
/// ```
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "failed to render value as JSON");
            String::new()
        }
    }
}
