use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealweek_mealplan::ExportFormat;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON files merged into one catalog, in order
    pub sources: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default = "default_export_format")]
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            default_format: default_export_format(),
        }
    }
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_format() -> String {
    "txt".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Fixed seed for reproducible plans
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__EXPORT__DIRECTORY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default(
                "catalog.sources",
                vec!["meal_planner_recipes.json", "meal_planner_50_meals.json"],
            )?
            .set_default("export.directory", default_export_directory())?
            .set_default("export.default_format", default_export_format())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("catalog.sources"),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.sources.is_empty() {
            return Err("At least one catalog source must be configured".to_string());
        }
        if self.catalog.sources.iter().any(|s| s.trim().is_empty()) {
            return Err("Catalog source paths must not be blank".to_string());
        }
        if self.export.directory.trim().is_empty() {
            return Err("Export directory must not be blank".to_string());
        }
        ExportFormat::parse(&self.export.default_format).map_err(|e| e.to_string())?;
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be blank".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            catalog: CatalogConfig {
                sources: vec!["data/meal_planner_recipes.json".to_string()],
            },
            export: ExportConfig::default(),
            planner: PlannerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_no_sources() {
        let mut config = config();
        config.catalog.sources.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_export_directory() {
        let mut config = config();
        config.export.directory = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_export_format() {
        let mut config = config();
        config.export.default_format = "pdf".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.contains("pdf"), "{err}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("mealweek.toml");
        std::fs::write(
            &path,
            r#"
[catalog]
sources = ["one.json", "two.json"]

[export]
directory = "out"
default_format = "html"

[planner]
seed = 42
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.catalog.sources, vec!["one.json", "two.json"]);
        assert_eq!(config.export.directory, "out");
        assert_eq!(config.export.default_format, "html");
        assert_eq!(config.planner.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_defaults_without_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let missing = dir.child("missing.toml");

        let config = Config::load(Some(missing.to_string_lossy().into_owned())).unwrap();

        assert_eq!(
            config.catalog.sources,
            vec!["meal_planner_recipes.json", "meal_planner_50_meals.json"]
        );
        assert_eq!(config.observability.log_level, "warn");
        assert!(!config.observability.json);
    }
}
