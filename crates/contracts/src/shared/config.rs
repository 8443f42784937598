use serde::{Deserialize, Serialize};

/// Colour scheme of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Table rows per page
    pub page_size: usize,
    /// Max characters of a chart label before truncation
    pub label_max_len: usize,
    /// Latency of the simulated dataset load
    pub load_delay_ms: u32,
    /// Initial colour scheme
    pub theme: ThemeMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            label_max_len: 47,
            load_delay_ms: 500,
            theme: ThemeMode::Dark,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be greater than 0");
        }
        if self.label_max_len < 4 {
            anyhow::bail!(
                "label_max_len must be at least 4, got {}",
                self.label_max_len
            );
        }
        Ok(())
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[dashboard]
page_size = 20
label_max_len = 47
load_delay_ms = 500
theme = "dark"
"#;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    dashboard: DashboardConfig,
}

/// Load configuration from TOML text.
///
/// `None` uses the embedded default. Keys missing from `overrides` keep
/// their default values.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let text = match overrides {
        Some(text) => text,
        None => {
            log::info!("Using default embedded configuration");
            DEFAULT_CONFIG
        }
    };
    let file: ConfigFile = toml::from_str(text)?;
    file.dashboard.validate()?;
    Ok(file.dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[dashboard]\npage_size = 50\ntheme = \"light\"\n")).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.label_max_len, 47);
        assert_eq!(config.load_delay_ms, 500);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load_config(Some("[dashboard]\npage_size = 0\n")).is_err());
        assert!(load_config(Some("[dashboard]\nlabel_max_len = 2\n")).is_err());
        assert!(load_config(Some("not toml at all = = =")).is_err());
    }
}
