//! A single stateful completion signal.

use crate::{Error, Result, SignalKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tools::{Message, ToolSpec};

const TASK_COMPLETED: &str = "Task completed";
const REVIEWER_COMPLETED: &str = "Reviewer completed";
const HANDOVER_TO_GENERAL_AGENT: &str = "Reviewer completed - handover control to general agent";

/// What to do when a signal fires again before it is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefirePolicy {
    /// Replace the stored answer with the new one.
    #[default]
    Overwrite,
    /// Fail with [`Error::AlreadyFired`] and keep the stored answer.
    Reject,
}

/// Whether a signal has fired since its last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Pending,
    Fired,
}

/// What the loop should do after a signal call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub done: bool,
    pub answer: Option<String>,
}

/// Result of a successful signal invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalOutput {
    /// Text returned to the model as the tool result.
    pub display: String,
    /// Text for the user-facing log.
    pub log: String,
    pub outcome: Outcome,
}

impl SignalOutput {
    pub fn texts(&self) -> (&str, &str) {
        (&self.display, &self.log)
    }
}

/// A completion signal and the answer it recorded, if any.
///
/// An empty answer means the signal has not fired since construction or
/// the last [`reset`](Signal::reset).
#[derive(Debug, Clone)]
pub struct Signal {
    kind: SignalKind,
    answer: String,
    refire: RefirePolicy,
}

impl Signal {
    pub fn new(kind: SignalKind) -> Self {
        Self {
            kind,
            answer: String::new(),
            refire: RefirePolicy::default(),
        }
    }

    pub fn complete() -> Self {
        Self::new(SignalKind::Complete)
    }

    pub fn return_control_to_user() -> Self {
        Self::new(SignalKind::ReturnControlToUser)
    }

    pub fn complete_reviewer() -> Self {
        Self::new(SignalKind::CompleteReviewer)
    }

    pub fn return_control_to_general_agent() -> Self {
        Self::new(SignalKind::ReturnControlToGeneralAgent)
    }

    pub fn with_refire_policy(mut self, policy: RefirePolicy) -> Self {
        self.refire = policy;
        self
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn input_schema(&self) -> Value {
        self.kind.input_schema()
    }

    pub fn spec(&self) -> ToolSpec {
        self.kind.spec()
    }

    pub fn refire_policy(&self) -> RefirePolicy {
        self.refire
    }

    /// Fire the signal.
    ///
    /// Kinds that need an answer read it from the `answer` field of `input`;
    /// the others accept any input. `history` is accepted for interface
    /// parity with other tools and is not read. A failed call leaves the
    /// signal untouched.
    pub fn invoke(&mut self, input: &Value, _history: Option<&[Message]>) -> Result<SignalOutput> {
        if self.should_stop() && self.refire == RefirePolicy::Reject {
            return Err(Error::AlreadyFired {
                signal: self.name(),
            });
        }

        let (answer, display, log) = match self.kind {
            SignalKind::Complete => {
                let answer = required_answer(self.kind, input)?;
                (answer, TASK_COMPLETED, TASK_COMPLETED)
            }
            SignalKind::ReturnControlToUser => (TASK_COMPLETED, TASK_COMPLETED, TASK_COMPLETED),
            SignalKind::CompleteReviewer => {
                let answer = required_answer(self.kind, input)?;
                (answer, answer, REVIEWER_COMPLETED)
            }
            SignalKind::ReturnControlToGeneralAgent => (
                HANDOVER_TO_GENERAL_AGENT,
                HANDOVER_TO_GENERAL_AGENT,
                HANDOVER_TO_GENERAL_AGENT,
            ),
        };

        if self.should_stop() {
            tracing::warn!(
                signal = self.name(),
                previous = %self.answer,
                "signal fired again before reset, overwriting answer"
            );
        } else {
            tracing::debug!(signal = self.name(), "signal fired");
        }
        self.answer = answer.to_string();

        Ok(SignalOutput {
            display: display.to_string(),
            log: log.to_string(),
            outcome: Outcome {
                done: true,
                answer: Some(self.answer.clone()),
            },
        })
    }

    /// True once the signal has fired and until it is reset.
    pub fn should_stop(&self) -> bool {
        !self.answer.is_empty()
    }

    pub fn state(&self) -> SignalState {
        if self.should_stop() {
            SignalState::Fired
        } else {
            SignalState::Pending
        }
    }

    /// The recorded answer, if the signal has fired.
    pub fn answer(&self) -> Option<&str> {
        self.should_stop().then_some(self.answer.as_str())
    }

    /// Return to the pending state.
    pub fn reset(&mut self) {
        if self.should_stop() {
            tracing::debug!(signal = self.name(), "signal reset");
        }
        self.answer.clear();
    }

    /// Signals fire silently: there is no start announcement.
    pub fn start_message(&self, _input: &Value) -> String {
        String::new()
    }
}

fn required_answer(kind: SignalKind, input: &Value) -> Result<&str> {
    let invalid = |reason: &str| Error::InvalidInput {
        signal: kind.name(),
        reason: reason.to_string(),
    };

    match input.get("answer") {
        None | Some(Value::Null) => Err(invalid("missing required field `answer`")),
        Some(Value::String(answer)) if answer.is_empty() => Err(invalid("`answer` must not be empty")),
        Some(Value::String(answer)) => Ok(answer.as_str()),
        Some(_) => Err(invalid("`answer` must be a string")),
    }
}
