//! Tool host trait.

use crate::{Message, ToolCall, ToolError, ToolSpec};
use serde_json::Value;
use std::future::Future;

/// Trait for tool execution hosts.
///
/// Implementations publish tool specifications and execute tool calls.
/// This is the boundary between the model loop and the tools' own state.
pub trait ToolHost: Send {
    /// Get available tool specifications.
    fn specs(&self) -> &[ToolSpec];

    /// Execute a tool call.
    ///
    /// `history` is the conversation so far; hosts are free to ignore it.
    fn execute(
        &mut self,
        call: &ToolCall,
        history: Option<&[Message]>,
    ) -> impl Future<Output = Result<Value, ToolError>> + Send;

    /// Text announced to the user before the call runs.
    ///
    /// An empty string means the call is not announced.
    fn start_message(&self, call: &ToolCall) -> String {
        format!("Calling tool '{}'", call.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo {
        specs: Vec<ToolSpec>,
    }

    impl ToolHost for Echo {
        fn specs(&self) -> &[ToolSpec] {
            &self.specs
        }

        async fn execute(
            &mut self,
            call: &ToolCall,
            _history: Option<&[Message]>,
        ) -> Result<Value, ToolError> {
            if call.name != "echo" {
                return Err(ToolError::NotFound(call.name.clone()));
            }
            Ok(call.input.clone())
        }
    }

    fn echo() -> Echo {
        Echo {
            specs: vec![ToolSpec::new("echo", "Echo the input", json!({ "type": "object" }))],
        }
    }

    #[test]
    fn default_start_message_names_the_tool() {
        let host = echo();
        let call = ToolCall::new("1", "echo", json!({}));
        assert_eq!(host.start_message(&call), "Calling tool 'echo'");
    }

    #[tokio::test]
    async fn execute_dispatches_by_name() {
        let mut host = echo();
        let history = [Message::user("say hi")];

        let call = ToolCall::new("1", "echo", json!({ "text": "hi" }));
        let output = host.execute(&call, Some(&history)).await.unwrap();
        assert_eq!(output, json!({ "text": "hi" }));

        let missing = ToolCall::new("2", "shout", json!({}));
        let err = host.execute(&missing, None).await.unwrap_err();
        assert_eq!(err, ToolError::NotFound("shout".into()));
    }
}
