//! Tool host exposing a set of signals to a dispatcher.

use crate::{AgentRole, Config, Error, RefirePolicy, Result, Signal, SignalKind, SignalOutput};
use serde_json::Value;
use tools::{Message, ToolCall, ToolError, ToolHost, ToolSpec};

/// The signals registered for one agent session.
///
/// Names are unique within a host. The loop polls [`should_stop`] after
/// every tool call and calls [`reset`] before the next task.
///
/// [`should_stop`]: SignalHost::should_stop
/// [`reset`]: SignalHost::reset
#[derive(Debug, Clone)]
pub struct SignalHost {
    signals: Vec<Signal>,
    specs: Vec<ToolSpec>,
}

impl SignalHost {
    /// Create a host with one signal per kind, in the given order.
    pub fn new(kinds: impl IntoIterator<Item = SignalKind>) -> Result<Self> {
        let mut signals: Vec<Signal> = Vec::new();
        for kind in kinds {
            if signals.iter().any(|s| s.kind() == kind) {
                return Err(Error::DuplicateSignal(kind.name().to_string()));
            }
            signals.push(Signal::new(kind));
        }
        Ok(Self::from_signals(signals))
    }

    /// Create a host with the default signals for a role.
    pub fn for_role(role: AgentRole) -> Self {
        Self::from_signals(role.signal_kinds().iter().copied().map(Signal::new).collect())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let host = Self::new(config.signal_kinds()?)?;
        Ok(host.with_refire_policy(config.on_refire))
    }

    fn from_signals(signals: Vec<Signal>) -> Self {
        let specs = signals.iter().map(Signal::spec).collect();
        Self { signals, specs }
    }

    /// Apply a refire policy to every signal.
    pub fn with_refire_policy(mut self, policy: RefirePolicy) -> Self {
        self.signals = self
            .signals
            .into_iter()
            .map(|s| s.with_refire_policy(policy))
            .collect();
        self
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Fire the named signal.
    pub fn invoke(
        &mut self,
        name: &str,
        input: &Value,
        history: Option<&[Message]>,
    ) -> Result<SignalOutput> {
        let signal = self
            .signals
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::UnknownSignal(name.to_string()))?;
        signal.invoke(input, history)
    }

    /// True if any registered signal has fired since the last reset.
    pub fn should_stop(&self) -> bool {
        self.signals.iter().any(Signal::should_stop)
    }

    /// The first fired signal, in registration order.
    pub fn fired(&self) -> Option<&Signal> {
        self.signals.iter().find(|s| s.should_stop())
    }

    /// Reset every signal back to pending.
    pub fn reset(&mut self) {
        for signal in &mut self.signals {
            signal.reset();
        }
    }
}

impl ToolHost for SignalHost {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(
        &mut self,
        call: &ToolCall,
        history: Option<&[Message]>,
    ) -> std::result::Result<Value, ToolError> {
        let output = self
            .invoke(&call.name, &call.input, history)
            .inspect_err(|e| {
                tracing::debug!(tool = %call.name, call_id = %call.id, error = %e, "signal call rejected");
            })?;

        serde_json::to_value(&output)
            .map_err(|e| ToolError::Execution(format!("serialize output: {e}")))
    }

    fn start_message(&self, _call: &ToolCall) -> String {
        String::new()
    }
}
