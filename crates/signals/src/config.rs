//! Signal configuration loaded from TOML.

use crate::{AgentRole, RefirePolicy, SignalKind};
use serde::Deserialize;
use std::path::Path;

/// Which signals an agent gets and how they behave.
///
/// ```toml
/// role = "reviewer"
/// signals = ["complete_reviewer"]
/// on_refire = "reject"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Role whose default signal set is used when `signals` is absent.
    #[serde(default)]
    pub role: AgentRole,

    /// Explicit signal list, overriding the role defaults.
    #[serde(default)]
    pub signals: Option<Vec<SignalKind>>,

    /// Behaviour when a signal fires again before it is reset.
    #[serde(default)]
    pub on_refire: RefirePolicy,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.signal_kinds()?;
        Ok(config)
    }

    /// Default configuration for a role.
    pub fn for_role(role: AgentRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// The signals to register, in order.
    pub fn signal_kinds(&self) -> Result<Vec<SignalKind>, ConfigError> {
        match &self.signals {
            Some(kinds) if kinds.is_empty() => Err(ConfigError::EmptySignalSet),
            Some(kinds) => Ok(kinds.clone()),
            None => Ok(self.role.signal_kinds().to_vec()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("signal list is empty: remove `signals` to use the role defaults")]
    EmptySignalSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_general_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.role, AgentRole::General);
        assert_eq!(config.on_refire, RefirePolicy::Overwrite);
        assert_eq!(config.signal_kinds().unwrap(), vec![SignalKind::Complete]);
    }

    #[test]
    fn role_selects_signal_set() {
        let config = Config::parse(r#"role = "reviewer""#).unwrap();
        assert_eq!(
            config.signal_kinds().unwrap(),
            vec![
                SignalKind::CompleteReviewer,
                SignalKind::ReturnControlToGeneralAgent
            ]
        );
    }

    #[test]
    fn explicit_signals_override_role() {
        let toml = r#"
role = "reviewer"
signals = ["complete_reviewer"]
on_refire = "reject"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.signal_kinds().unwrap(), vec![SignalKind::CompleteReviewer]);
        assert_eq!(config.on_refire, RefirePolicy::Reject);
    }

    #[test]
    fn empty_signal_list_is_rejected() {
        let err = Config::parse("signals = []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySignalSet));
    }

    #[test]
    fn unknown_signal_name_is_a_parse_error() {
        let err = Config::parse(r#"signals = ["finish"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse(r#"mode = "fast""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/signals.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn for_role_keeps_default_policy() {
        let config = Config::for_role(AgentRole::Interactive);
        assert_eq!(config.on_refire, RefirePolicy::Overwrite);
        assert_eq!(
            config.signal_kinds().unwrap(),
            vec![SignalKind::ReturnControlToUser]
        );
    }
}
