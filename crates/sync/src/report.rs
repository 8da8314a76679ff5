#![forbid(unsafe_code)]

use serde::Serialize;

/// Outcome of one completed run. A run is binary: either it converged fully
/// and this report is printed, or it failed and only an error shape is
/// emitted. There is no partial-success variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub ok: bool,
    pub files_seen: u64,
    pub upserts: u64,
    pub deletes: u64,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn failure_json(error: &dyn std::fmt::Display) -> String {
    let body = serde_json::json!({ "ok": false, "error": error.to_string() });
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
}
