//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["umweltzone.toml", ".umweltzone.toml"];
const ENV_PREFIX: &str = "UMWELTZONE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `UMWELTZONE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./umweltzone.toml` or `./.umweltzone.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/umweltzone/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/umweltzone/config.toml if set,
    /// otherwise falls back to ~/.config/umweltzone/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("umweltzone").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for debugging)
    pub fn describe_config_sources() -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] Variables: {}*", ENV_PREFIX));

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.cache.circuits, 6);
        assert!(config.content.locale.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("umweltzone"));
    }

    #[test]
    fn test_project_file_and_env_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "umweltzone.toml",
                r#"
[content]
locale = "de_DE"

[cache]
circuits = 4
"#,
            )?;
            jail.set_env("UMWELTZONE_CACHE__RESOURCE_IDS", "9");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.content.locale.as_deref(), Some("de_DE"));
            assert_eq!(config.cache.circuits, 4);
            assert_eq!(config.cache.resource_ids, 9);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("umweltzone.toml", "[cache]\ncircuits = 4\n")?;
            jail.create_file("custom.toml", "[cache]\ncircuits = 8\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.cache.circuits, 8);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[content]\nfolder = \"json\"\n")?;
            jail.set_env("UMWELTZONE_CONTENT__FOLDER", "data");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.content.folder, "data");
            Ok(())
        });
    }

    #[test]
    fn test_env_date_format_applies_to_locale() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "umweltzone.toml",
                "[content.date_formats]\nde_DE = \"dd.MM.yyyy\"\n",
            )?;
            jail.set_env("UMWELTZONE_CONTENT__LOCALE", "de_DE");
            jail.set_env("UMWELTZONE_CONTENT__DATE_FORMATS__DE_DE", "MM/dd/yyyy");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            let content = config.to_content_config(None).unwrap();
            assert_eq!(content.date_pattern().pattern(), "MM/dd/yyyy");
            Ok(())
        });
    }

    #[test]
    fn test_describe_mentions_defaults() {
        assert!(ConfigLoader::describe_config_sources().contains("built-in defaults"));
    }
}
