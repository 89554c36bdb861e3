//! Text rendering of bridge replies for the transcript.

use crate::bridge::{Action, BridgeError, LlmResponse};

/// Shown when the bridge reports no actions.
pub const NO_ACTIONS: &str = "⚠️ No actions";

/// Renders one action as a method/endpoint line followed by its status.
pub fn render_action(action: &Action) -> String {
    format!(
        "→ {} {}\n   {}",
        action.method, action.endpoint, action.status
    )
}

/// Renders every action, one block per action, in the order received.
pub fn render_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(render_action)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a decoded reply: its actions if it has any, otherwise [`NO_ACTIONS`].
pub fn render_reply(response: &LlmResponse) -> String {
    response
        .actions
        .as_deref()
        .map_or_else(|| NO_ACTIONS.to_string(), render_actions)
}

/// Renders a failed request.
pub fn render_failure(err: &BridgeError) -> String {
    format!("⚠️ Request failed: {err}")
}
