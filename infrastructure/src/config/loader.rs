//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SUPPORTBOT_HTTP__TIMEOUT_SECONDS=10`.
pub const ENV_PREFIX: &str = "SUPPORTBOT_";

const PROJECT_FILES: [&str; 2] = ["supportbot.toml", ".supportbot.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SUPPORTBOT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./supportbot.toml` or `./.supportbot.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/supportbot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }
        if let Some(path) = config_path {
            files.push(path.to_path_buf());
        }

        Self::figment(&files)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults with `files` merged on top, later files winning.
    fn figment(files: &[PathBuf]) -> Figment {
        files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("supportbot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}* (use __ between section and key)", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./supportbot.toml or ./.supportbot.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.providers.order.len(), 4);
        assert!(config.search.enabled);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("supportbot"));
    }

    #[test]
    fn test_toml_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[providers.gemini]
model = "gemini-1.5-flash"

[http]
timeout_seconds = 5
"#,
        )
        .unwrap();

        let config: FileConfig = ConfigLoader::figment(&[path]).extract().unwrap();
        assert_eq!(config.providers.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.providers.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.search.results, 5);
    }

    #[test]
    fn test_later_files_win() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&global, "[history]\ndefault_user = \"global\"\n[http]\ntimeout_seconds = 9\n")
            .unwrap();
        fs::write(&explicit, "[history]\ndefault_user = \"explicit\"\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(&[global, explicit])
            .extract()
            .unwrap();
        assert_eq!(config.history.default_user, "explicit");
        assert_eq!(config.http.timeout_seconds, 9);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[http]\ntimeout_seconds = \"soon\"\n").unwrap();

        assert!(ConfigLoader::figment(&[path]).extract::<FileConfig>().is_err());
    }
}
