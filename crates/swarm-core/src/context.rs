//! Worker prompt building from bus context

use tracing::debug;

use crate::types::Message;

/// Render messages as a transcript, one line-prefixed entry per message
pub fn format_context(context: &[Message]) -> String {
    let mut out = String::new();
    for msg in context {
        out.push_str(&format!(
            "[{}] {} -> {} ({}):\n{}\n\n",
            msg.timestamp.format("%H:%M:%S"),
            msg.from,
            msg.to,
            msg.kind,
            msg.content.trim_end()
        ));
    }
    out
}

/// Build the user prompt a worker sends to its model
pub fn build_worker_prompt(instruction: &str, context: &[Message]) -> String {
    let mut prompt = String::new();

    if !context.is_empty() {
        prompt.push_str("# CONTEXT\n\n");
        prompt.push_str(&format_context(context));
    }

    prompt.push_str("# TASK\n\n");
    prompt.push_str(instruction.trim());
    prompt.push('\n');

    debug!(
        "Built worker prompt ({} chars, {} context messages)",
        prompt.len(),
        context.len()
    );

    prompt
}
