use serde::{Deserialize, Serialize};

/// Machine-readable arguments attached to a validation finding.
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// One entry of an API problem response: where (`name`), what (`reason`) and
/// the arguments describing the failure (`details`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProblem {
    /// Path of the offending value.
    pub name: String,
    /// Machine-readable finding key.
    pub reason: String,
    /// Finding arguments.
    pub details: Arguments,
}
