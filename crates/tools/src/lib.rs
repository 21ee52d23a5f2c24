//! Tool contract shared between an agent loop and the tools it drives.
//!
//! A dispatcher registers tools through their [`ToolSpec`], forwards each
//! model-issued [`ToolCall`] to a [`ToolHost`], and reports any
//! [`ToolError`] back to the model. The conversation so far travels along
//! as a slice of [`Message`]s for hosts that want it.
//!
//! # Example
//!
//! ```ignore
//! use tools::{ToolCall, ToolHost};
//!
//! # async fn example(host: &mut impl ToolHost) -> Result<(), tools::ToolError> {
//! for spec in host.specs() {
//!     println!("{}: {}", spec.name, spec.description);
//! }
//!
//! let call = ToolCall::new("call_1", "complete", serde_json::json!({ "answer": "42" }));
//! let output = host.execute(&call, None).await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

mod errors;
mod host;
mod types;

pub use errors::ToolError;
pub use host::ToolHost;
pub use types::{Message, Role, ToolCall, ToolSpec};
