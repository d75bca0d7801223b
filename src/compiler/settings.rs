use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn set(&mut self, setting: Setting, enabled: bool) {
        self.inner.insert(setting, enabled);
    }

    pub fn is_enabled(&self, setting: Setting) -> bool {
        self.inner.get(&setting).copied().unwrap_or(false)
    }

    pub fn as_vec(&self) -> Vec<(Setting, bool)> {
        let mut settings: Vec<_> = self.inner.iter().map(|(s, v)| (*s, *v)).collect();
        settings.sort_by_key(|(s, _)| s.to_string());
        settings
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        settings.disable(Setting::DumpTokens);
        settings.disable(Setting::DumpAst);
        settings.disable(Setting::DumpTypes);

        settings
    }
}

/// Switches for logging the intermediate results of a compilation.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Setting {
    DumpTokens,
    DumpAst,
    DumpTypes,
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Setting::DumpTokens => "dump-tokens",
            Setting::DumpAst => "dump-ast",
            Setting::DumpTypes => "dump-types",
        };

        fmt.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_disabled() {
        let settings = Settings::default();

        assert!(!settings.is_enabled(Setting::DumpTokens));
        assert!(!settings.is_enabled(Setting::DumpAst));
        assert!(!settings.is_enabled(Setting::DumpTypes));
        assert_eq!(settings.as_vec().len(), 3);
    }

    #[test]
    fn test_enable_disable() {
        let mut settings = Settings::new();
        assert!(!settings.is_enabled(Setting::DumpAst));

        settings.enable(Setting::DumpAst);
        assert!(settings.is_enabled(Setting::DumpAst));

        settings.disable(Setting::DumpAst);
        assert!(!settings.is_enabled(Setting::DumpAst));

        settings.set(Setting::DumpTypes, true);
        assert_eq!(
            settings.as_vec(),
            vec![(Setting::DumpAst, false), (Setting::DumpTypes, true)]
        );
    }
}
