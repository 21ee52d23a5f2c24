//! Completion signals for agent tool loops.
//!
//! A signal is a tool the model calls to say "I'm done" or "your turn".
//! Firing one records an answer; the orchestration loop polls
//! [`Signal::should_stop`] (or [`SignalHost::should_stop`]) after each tool
//! call to decide whether to leave the loop or hand control to someone
//! else, and calls `reset` before the next task.
//!
//! # Signals
//!
//! | Kind | Tool name | Needs `answer` |
//! |---|---|---|
//! | [`SignalKind::Complete`] | `complete` | yes |
//! | [`SignalKind::ReturnControlToUser`] | `return_control_to_user` | no |
//! | [`SignalKind::CompleteReviewer`] | `complete_reviewer` | yes |
//! | [`SignalKind::ReturnControlToGeneralAgent`] | `return_control_to_general_agent` | no |
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use signals::{AgentRole, SignalHost};
//!
//! let mut host = SignalHost::for_role(AgentRole::General);
//! assert!(!host.should_stop());
//!
//! let output = host.invoke("complete", &json!({ "answer": "42" }), None)?;
//! assert_eq!(output.display, "Task completed");
//! assert!(host.should_stop());
//! assert_eq!(host.fired().and_then(|s| s.answer()), Some("42"));
//!
//! host.reset();
//! assert!(!host.should_stop());
//! # Ok::<(), signals::Error>(())
//! ```

mod config;
mod error;
mod host;
mod kind;
mod signal;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use host::SignalHost;
pub use kind::{AgentRole, SignalKind};
pub use signal::{Outcome, RefirePolicy, Signal, SignalOutput, SignalState};
