//! Tool location configuration.

/// Environment variable that overrides the tool executable.
pub const TOOL_ENV_VAR: &str = "SC";

/// Executable used when no override is set.
pub const DEFAULT_TOOL: &str = "./sc";

/// Where to find the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Path of the executable, used verbatim as `argv[0]`.
    pub executable: String,
}

impl ToolConfig {
    /// Resolves the executable from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the executable through an arbitrary variable lookup.
    ///
    /// A set-but-empty `SC` is still an override.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let executable = lookup(TOOL_ENV_VAR).unwrap_or_else(|| DEFAULT_TOOL.to_string());
        Self { executable }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self { executable: DEFAULT_TOOL.to_string() }
    }
}
