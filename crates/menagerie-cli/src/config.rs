//! Configuration for the menagerie binary.
//!
//! All configuration is loaded from environment variables. The feeding
//! category keys themselves are fixed in code and are not configurable.

use core::str::FromStr;

use crate::error::CliError;

/// Label given to the root group when `MENAGERIE_GROUP_NAME` is unset.
pub const DEFAULT_GROUP_NAME: &str = "menagerie";

/// Complete binary configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// What to print.
    pub report: ReportMode,
    /// Label of the root group.
    pub group_name: String,
}

/// The report the binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Shallow listing of the root group's children.
    #[default]
    Info,
    /// Recursive move, communicate, and eat narration.
    Traverse,
    /// Full-depth JSON snapshot.
    Json,
    /// Listing followed by narration.
    All,
}

impl FromStr for ReportMode {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "traverse" => Ok(Self::Traverse),
            "json" => Ok(Self::Json),
            "all" => Ok(Self::All),
            other => Err(CliError::Config(format!("unknown report mode: {other}"))),
        }
    }
}

impl ReportMode {
    /// Whether the shallow listing is printed.
    pub const fn includes_info(self) -> bool {
        matches!(self, Self::Info | Self::All)
    }

    /// Whether the behavior narration is printed.
    pub const fn includes_traversal(self) -> bool {
        matches!(self, Self::Traverse | Self::All)
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `MENAGERIE_REPORT` -- `info`, `traverse`, `json`, or `all` (default `info`)
    /// - `MENAGERIE_GROUP_NAME` -- label of the root group (default `menagerie`)
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let report: ReportMode = lookup("MENAGERIE_REPORT")
            .map(|value| value.parse::<ReportMode>())
            .transpose()?
            .unwrap_or_default();

        let group_name = lookup("MENAGERIE_GROUP_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_owned());

        Ok(Self { report, group_name })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, CliError> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        CliConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]);
        assert!(matches!(
            config,
            Ok(CliConfig { report: ReportMode::Info, ref group_name }) if group_name == DEFAULT_GROUP_NAME
        ));
    }

    #[test]
    fn report_mode_is_case_insensitive() {
        let config = load(&[("MENAGERIE_REPORT", "Traverse")]);
        assert!(matches!(config, Ok(CliConfig { report: ReportMode::Traverse, .. })));
    }

    #[test]
    fn unknown_report_mode_is_a_config_error() {
        let config = load(&[("MENAGERIE_REPORT", "yaml")]);
        assert!(matches!(config, Err(CliError::Config(_))));
    }

    #[test]
    fn blank_group_name_falls_back_to_default() {
        let config = load(&[("MENAGERIE_GROUP_NAME", "   ")]);
        assert!(matches!(config, Ok(CliConfig { ref group_name, .. }) if group_name == DEFAULT_GROUP_NAME));
    }

    #[test]
    fn all_mode_includes_both_reports() {
        assert!(ReportMode::All.includes_info());
        assert!(ReportMode::All.includes_traversal());
        assert!(!ReportMode::Json.includes_info());
        assert!(!ReportMode::Json.includes_traversal());
    }
}
