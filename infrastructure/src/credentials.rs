//! Credential resolution: environment variable first, configuration second.
//!
//! Credentials are resolved on every attempt so a key exported while the
//! process runs (or removed) takes effect on the next question.

/// Where one secret may come from.
#[derive(Clone, Default)]
pub struct Credential {
    env_var: String,
    configured: Option<String>,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("env_var", &self.env_var)
            .field("configured", &self.configured.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credential {
    pub fn new(env_var: impl Into<String>, configured: Option<String>) -> Self {
        Self {
            env_var: env_var.into(),
            configured,
        }
    }

    /// A fixed value with no environment lookup.
    pub fn fixed(value: impl Into<String>) -> Self {
        Self::new("", Some(value.into()))
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn resolve(&self) -> Option<String> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with a custom environment lookup. Blank values count as unset.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let from_env = if self.env_var.is_empty() {
            None
        } else {
            lookup(&self.env_var)
        };
        from_env
            .into_iter()
            .chain(self.configured.clone())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}
