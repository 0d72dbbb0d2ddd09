//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.calcstate.toml` in the working directory
//! 4. `~/.config/calcstate/config.toml` (global defaults)
//! 5. Built-in defaults
//!
//! Nothing here changes arithmetic or the state file format. The demo always
//! uses [`STATE_FILENAME`](crate::constants::STATE_FILENAME); `[state] file`
//! only sets the default for `eval --save` and the `state` subcommands.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub demo: DemoConfig,
    pub output: OutputConfig,
    pub state: StateConfig,
}

/// Demo run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Wait for Enter after the demo when attached to a terminal.
    pub pause: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { pause: true }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// State file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    pub file: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(crate::constants::STATE_FILENAME),
        }
    }
}

/// One config file as written on disk.
///
/// Every field is optional so a layer only overrides the keys it actually
/// sets, even when the value it sets equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    demo: DemoLayer,
    output: OutputLayer,
    state: StateLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct DemoLayer {
    pause: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct OutputLayer {
    color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct StateLayer {
    file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config under the user's config directory, then
    /// `work_dir`'s local config, then applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_from(global_path.as_deref(), work_dir, env)
    }

    /// Load configuration from an explicit global config path.
    ///
    /// Missing files are skipped; a file that exists but cannot be read or
    /// parsed is an error.
    pub fn load_from(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a single config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layer = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(layer)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a layer into this config. Every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(pause) = layer.demo.pause {
            self.demo.pause = pause;
        }
        if let Some(color) = layer.output.color {
            self.output.color = color;
        }
        if let Some(file) = layer.state.file {
            self.state.file = file;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(pause) = env.flag(crate::constants::ENV_PAUSE) {
            self.demo.pause = pause;
        }
        if let Some(color) = env.flag(crate::constants::ENV_COLOR) {
            self.output.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.demo.pause);
        assert!(config.output.color);
        assert_eq!(config.state.file, PathBuf::from("calculatorState.txt"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[demo]
pause = false

[output]
color = false

[state]
file = "saved/last.txt"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.demo.pause);
        assert!(!config.output.color);
        assert_eq!(config.state.file, PathBuf::from("saved/last.txt"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(config.demo.pause);
        assert!(!config.output.color);
    }

    #[test]
    fn partial_layer_leaves_unset_keys_alone() {
        let layer: ConfigLayer = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert_eq!(layer.demo.pause, None);
        assert_eq!(layer.output.color, Some(false));
        assert_eq!(layer.state.file, None);
    }

    #[test]
    fn merge_applies_every_set_key() {
        let mut base = Config::default();
        let layer: ConfigLayer = toml::from_str(
            "[demo]\npause = false\n[output]\ncolor = false\n[state]\nfile = \"other.txt\"\n",
        )
        .unwrap();

        base.merge(layer);

        assert!(!base.demo.pause);
        assert!(!base.output.color);
        assert_eq!(base.state.file, PathBuf::from("other.txt"));
    }

    #[test]
    fn merge_keeps_base_when_layer_is_empty() {
        let mut base = Config::default();
        base.demo.pause = false;
        base.state.file = PathBuf::from("mine.txt");

        base.merge(ConfigLayer::default());

        assert!(!base.demo.pause);
        assert_eq!(base.state.file, PathBuf::from("mine.txt"));
    }

    #[test]
    fn merge_can_restore_default_values() {
        let mut base = Config::default();
        base.demo.pause = false;
        base.state.file = PathBuf::from("global.txt");

        let layer: ConfigLayer =
            toml::from_str("[demo]\npause = true\n[state]\nfile = \"calculatorState.txt\"\n")
                .unwrap();
        base.merge(layer);

        assert!(base.demo.pause);
        assert_eq!(base.state.file, PathBuf::from("calculatorState.txt"));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_file(&dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".calcstate.toml"),
            "[state]\nfile = \"local.txt\"\n\n[demo]\npause = false\n",
        )
        .unwrap();

        let config = Config::load_from(None, Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.state.file, PathBuf::from("local.txt"));
        assert!(!config.demo.pause);
    }

    #[test]
    fn global_applies_without_local() {
        let global_dir = tempfile::tempdir().unwrap();
        let global = global_dir.path().join("config.toml");
        std::fs::write(&global, "[output]\ncolor = false\n").unwrap();
        let work_dir = tempfile::tempdir().unwrap();

        let config = Config::load_from(Some(&global), Some(work_dir.path()), &no_env()).unwrap();
        assert!(!config.output.color);
        assert!(config.demo.pause);
    }

    #[test]
    fn local_overrides_global_even_with_default_values() {
        let global_dir = tempfile::tempdir().unwrap();
        let global = global_dir.path().join("config.toml");
        std::fs::write(&global, "[demo]\npause = false\n\n[state]\nfile = \"global.txt\"\n")
            .unwrap();

        let work_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            work_dir.path().join(".calcstate.toml"),
            "[demo]\npause = true\n\n[state]\nfile = \"calculatorState.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&global), Some(work_dir.path()), &no_env()).unwrap();
        assert!(config.demo.pause);
        assert_eq!(config.state.file, PathBuf::from("calculatorState.txt"));
    }

    #[test]
    fn missing_global_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("absent.toml");

        let config = Config::load_from(Some(&global), None, &no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".calcstate.toml"), "[demo]\npause = false\n").unwrap();

        let env = Env::mock([("CALCSTATE_PAUSE", "true"), ("CALCSTATE_COLOR", "off")]);
        let config = Config::load_from(None, Some(dir.path()), &env).unwrap();
        assert!(config.demo.pause);
        assert!(!config.output.color);
    }

    #[test]
    fn invalid_env_value_is_ignored() {
        let mut config = Config::default();
        config.apply_env_vars(&Env::mock([("CALCSTATE_PAUSE", "sometimes")]));
        assert!(config.demo.pause);
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_str().unwrap().contains("calcstate"));
        }
    }
}
