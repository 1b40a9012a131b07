use std::collections::HashMap;

/// Source of environment-style configuration values.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Look `key` up as written, then upper-cased.
    ///
    /// A variable that is set but empty is returned as `Some("")`.
    fn lookup(&self, key: &str) -> Option<String> {
        self.var(key)
            .or_else(|| self.var(&key.to_ascii_uppercase()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
