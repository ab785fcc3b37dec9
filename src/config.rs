use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    /// Searched for cursor files; output paths are relative to it.
    pub search_root: PathBuf,
    /// Overrides the name taken from the scheme entry.
    pub theme_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from("."),
            theme_name: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_search_root("/themes/ocean")
            .with_theme_name("Ocean");

        assert_eq!(config.search_root, PathBuf::from("/themes/ocean"));
        assert_eq!(config.theme_name.as_deref(), Some("Ocean"));
        assert_eq!(Config::default().search_root, PathBuf::from("."));
    }
}
