//! Renderers turning validation findings into client-facing messages.

mod api_problem;
mod nested;

pub use api_problem::ApiProblemMessages;
pub use nested::{MessageNode, NestedMessages};
