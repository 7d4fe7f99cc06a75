use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read API key file at {key_path}: {source}")]
    ApiKeyReadError {
        key_path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Settings for the external lesson generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,
    /// Program and arguments of the generator command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.9,
            max_tokens: 1500,
            api_key: None,
            api_key_file: None,
            command: Vec::new(),
        }
    }
}

impl GenerationConfig {
    /// Resolves the credential: the `env_var` environment variable, then
    /// `api_key`, then the contents of `api_key_file`. Blank values count as
    /// absent.
    pub fn resolve_api_key(&self, env_var: &str) -> Result<Option<String>, ConfigError> {
        let from_env = std::env::var(env_var).ok();
        self.resolve_api_key_with(from_env)
    }

    fn resolve_api_key_with(&self, from_env: Option<String>) -> Result<Option<String>, ConfigError> {
        let non_blank = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        if let Some(key) = from_env.as_deref().and_then(non_blank) {
            return Ok(Some(key));
        }
        if let Some(key) = self.api_key.as_deref().and_then(non_blank) {
            return Ok(Some(key));
        }
        if let Some(key_path) = &self.api_key_file {
            let content = std::fs::read_to_string(key_path).map_err(|source| {
                ConfigError::ApiKeyReadError {
                    key_path: key_path.clone(),
                    source,
                }
            })?;
            return Ok(non_blank(&content));
        }
        Ok(None)
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the key file path
        if let Some(key_path) = config.generation.api_key_file.take() {
            config.generation.api_key_file = Some(Self::expand_path(&key_path).unwrap_or(key_path));
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/lesson-render");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/lesson-render/config.toml"));
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.generation.model, "llama-3.1-8b-instant");
        assert_eq!(config.generation.max_tokens, 1500);
    }

    #[test]
    fn test_partial_generation_section() {
        let config: Config = toml::from_str(
            r#"
[generation]
model = "bigger-model"
command = ["llm", "--stdin"]
"#,
        )
        .unwrap();

        assert_eq!(config.generation.model, "bigger-model");
        assert_eq!(config.generation.temperature, 0.9);
        assert_eq!(config.generation.command, vec!["llm", "--stdin"]);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_key_file_with_env_var_in_toml() {
        unsafe {
            env::set_var("LESSON_KEYS_ROOT", "/custom/keys");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "[generation]\napi_key_file = \"$LESSON_KEYS_ROOT/groq.key\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.generation.api_key_file,
            Some(PathBuf::from("/custom/keys/groq.key"))
        );

        unsafe {
            env::remove_var("LESSON_KEYS_ROOT");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[generation\nmodel = 1").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            generation: GenerationConfig {
                model: "test-model".to_string(),
                command: vec!["gen".to_string()],
                ..GenerationConfig::default()
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.generation, test_config.generation);
    }

    #[test]
    fn test_env_key_wins() {
        let generation = GenerationConfig {
            api_key: Some("from-config".to_string()),
            ..GenerationConfig::default()
        };
        let key = generation
            .resolve_api_key_with(Some("from-env".to_string()))
            .unwrap();
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_env_key_falls_through_to_config() {
        let generation = GenerationConfig {
            api_key: Some(" from-config ".to_string()),
            ..GenerationConfig::default()
        };
        let key = generation
            .resolve_api_key_with(Some("   ".to_string()))
            .unwrap();
        assert_eq!(key.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_key_file_is_read_and_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let key_file = temp_dir.path().join("api.key");
        std::fs::write(&key_file, "file-key\n").unwrap();

        let generation = GenerationConfig {
            api_key_file: Some(key_file),
            ..GenerationConfig::default()
        };
        let key = generation.resolve_api_key_with(None).unwrap();
        assert_eq!(key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_missing_key_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let generation = GenerationConfig {
            api_key_file: Some(temp_dir.path().join("missing.key")),
            ..GenerationConfig::default()
        };
        let err = generation.resolve_api_key_with(None).unwrap_err();
        assert!(matches!(err, ConfigError::ApiKeyReadError { .. }));
    }

    #[test]
    fn test_reads_the_named_env_var() {
        let generation = GenerationConfig {
            api_key: Some("from-config".to_string()),
            ..GenerationConfig::default()
        };
        let key = generation
            .resolve_api_key("LESSON_CONFIG_TEST_UNSET_KEY_VAR")
            .unwrap();
        assert_eq!(key.as_deref(), Some("from-config"));

        let path = std::env::var("PATH").unwrap();
        let key = generation.resolve_api_key("PATH").unwrap();
        assert_eq!(key.as_deref(), Some(path.trim()));
    }

    #[test]
    fn test_no_key_anywhere() {
        let key = GenerationConfig::default()
            .resolve_api_key_with(None)
            .unwrap();
        assert!(key.is_none());
    }
}
