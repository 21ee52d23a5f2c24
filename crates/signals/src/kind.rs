//! The fixed set of signal kinds and the roles that use them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tools::ToolSpec;

const COMPLETE_DESCRIPTION: &str =
    "Call this tool when you are done with the task, and supply your answer or summary.";

const RETURN_CONTROL_TO_USER_DESCRIPTION: &str = "\
Return control back to the user. Use this tool when you are done with the task or after asking questions to user and waiting for their response. Use this tool when:
* You have completed your task or delivered the requested output
* You have asked a question or provided options and need the user to choose
* You are waiting for the user's response, input, or confirmation
* You want to pause to allow the user to review, reflect, or take the next action
This tool signals a handoff point, indicating that further action is expected from the user.";

const COMPLETE_REVIEWER_DESCRIPTION: &str = "Call this tool when you are done with the task, and supply your answer or summary. This tool is used by the reviewer agent to indicate that the task is complete.";

const RETURN_CONTROL_TO_GENERAL_AGENT_DESCRIPTION: &str = "\
Return control back to the general agent. Use this tool when you are done with the review and want to handover the control back to the general agent.
Before using this tool, you should have provided the general agent with details feedback that you have reviewed the general agent's output.
This tool signals a handoff point, indicating that further action is expected from the general agent.";

const ANSWER_DESCRIPTION: &str =
    "The answer to the question, or final summary of actions taken to accomplish the task.";

const REVIEWER_ANSWER_DESCRIPTION: &str = "The answer to the question, or final summary of actions taken to accomplish the task. This is the feedback from the reviewer agent to the general agent.";

/// One of the four completion signals.
///
/// Kinds differ only in data: name, description, schema, and whether the
/// caller must supply an `answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Complete,
    ReturnControlToUser,
    CompleteReviewer,
    ReturnControlToGeneralAgent,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Complete,
        SignalKind::ReturnControlToUser,
        SignalKind::CompleteReviewer,
        SignalKind::ReturnControlToGeneralAgent,
    ];

    /// Tool name as the model sees it.
    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Complete => "complete",
            SignalKind::ReturnControlToUser => "return_control_to_user",
            SignalKind::CompleteReviewer => "complete_reviewer",
            SignalKind::ReturnControlToGeneralAgent => "return_control_to_general_agent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SignalKind::Complete => COMPLETE_DESCRIPTION,
            SignalKind::ReturnControlToUser => RETURN_CONTROL_TO_USER_DESCRIPTION,
            SignalKind::CompleteReviewer => COMPLETE_REVIEWER_DESCRIPTION,
            SignalKind::ReturnControlToGeneralAgent => RETURN_CONTROL_TO_GENERAL_AGENT_DESCRIPTION,
        }
    }

    /// Whether firing needs a non-empty `answer` string.
    pub fn requires_answer(self) -> bool {
        matches!(self, SignalKind::Complete | SignalKind::CompleteReviewer)
    }

    /// JSON Schema for the tool input.
    pub fn input_schema(self) -> Value {
        let answer_description = match self {
            SignalKind::Complete => ANSWER_DESCRIPTION,
            SignalKind::CompleteReviewer => REVIEWER_ANSWER_DESCRIPTION,
            SignalKind::ReturnControlToUser | SignalKind::ReturnControlToGeneralAgent => {
                return json!({
                    "type": "object",
                    "properties": {},
                    "required": [],
                });
            }
        };

        json!({
            "type": "object",
            "properties": {
                "answer": {
                    "type": "string",
                    "description": answer_description,
                },
            },
            "required": ["answer"],
        })
    }

    /// Registration entry for a tool dispatcher.
    pub fn spec(self) -> ToolSpec {
        ToolSpec::new(self.name(), self.description(), self.input_schema())
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of agent a signal set is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Runs a task to the end and reports the answer.
    #[default]
    General,
    /// Works with a user in the loop and hands control back to them.
    Interactive,
    /// Reviews a general agent's work and returns feedback.
    Reviewer,
}

impl AgentRole {
    /// Signals registered for this role, in registration order.
    pub fn signal_kinds(self) -> &'static [SignalKind] {
        match self {
            AgentRole::General => &[SignalKind::Complete],
            AgentRole::Interactive => &[SignalKind::ReturnControlToUser],
            AgentRole::Reviewer => &[
                SignalKind::CompleteReviewer,
                SignalKind::ReturnControlToGeneralAgent,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = SignalKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), SignalKind::ALL.len());
    }

    #[test]
    fn serde_name_matches_tool_name() {
        for kind in SignalKind::ALL {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.name()));
        }
    }

    #[test]
    fn schema_requires_answer_only_when_needed() {
        for kind in SignalKind::ALL {
            let spec = kind.spec();
            let required = spec.required_fields();
            if kind.requires_answer() {
                assert_eq!(required, vec!["answer"], "{kind}");
                assert_eq!(spec.input_schema["properties"]["answer"]["type"], "string");
            } else {
                assert!(required.is_empty(), "{kind}");
            }
        }
    }

    #[test]
    fn reviewer_answer_is_described_as_feedback() {
        let schema = SignalKind::CompleteReviewer.input_schema();
        let description = schema["properties"]["answer"]["description"].as_str().unwrap();
        assert!(description.contains("feedback from the reviewer"));
    }

    #[test]
    fn role_signal_sets() {
        assert_eq!(AgentRole::General.signal_kinds(), &[SignalKind::Complete]);
        assert_eq!(
            AgentRole::Interactive.signal_kinds(),
            &[SignalKind::ReturnControlToUser]
        );
        assert_eq!(
            AgentRole::Reviewer.signal_kinds(),
            &[
                SignalKind::CompleteReviewer,
                SignalKind::ReturnControlToGeneralAgent
            ]
        );
    }
}
