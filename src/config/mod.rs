//! Configuration management for `civic_reports`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`CIVIC_*`)
//! 3. Project config (`.civic/config.yaml`, found by walking up from CWD)
//! 4. User config (`~/.config/civic/config.yaml`)
//! 5. Defaults
//!
//! Nested YAML keys are flattened with dots (`explore: {limit: 3}` becomes
//! `explore.limit`). Keys compare case-insensitively with `_` and `-` treated
//! as the same character.

use crate::error::{CivicError, Result};
use crate::session::DEFAULT_REDIRECT_DELAY;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Name of the per-project configuration directory.
const PROJECT_DIR_NAME: &str = ".civic";
/// Config file name inside project and user directories.
const CONFIG_FILENAME: &str = "config.yaml";
/// Base URL used for share links when none is configured.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://cityreport.local";
/// Display name used when no actor can be resolved.
pub const DEFAULT_ACTOR: &str = "Guest";

/// A flat key/value configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub values: HashMap<String, String>,
}

impl ConfigLayer {
    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(normalize_key(key), value.clone());
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from a YAML file path. Missing files return empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "Loading config file");
        let contents = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
        Ok(layer_from_yaml_value(&value))
    }

    /// Build a layer from `CIVIC_*` environment variables.
    ///
    /// `CIVIC_EXPLORE_LIMIT` sets both `explore-limit` and `explore.limit`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut layer = Self::default();
        for (key, value) in vars {
            let Some(stripped) = key.strip_prefix("CIVIC_") else {
                continue;
            };
            // Process-level switches, not config keys.
            if matches!(stripped, "DIR" | "LOG_FORMAT") {
                continue;
            }
            for variant in env_key_variants(stripped) {
                layer.set(&variant, value.clone());
            }
        }
        layer
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_key(key), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }
}

/// CLI overrides for config loading.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub actor: Option<String>,
    pub no_color: Option<bool>,
    pub no_wait: Option<bool>,
    pub quiet: Option<bool>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer::default();

        if let Some(actor) = &self.actor {
            layer.set("actor", actor.clone());
        }
        if let Some(true) = self.no_color {
            layer.set("no-color", "true");
        }
        if let Some(true) = self.no_wait {
            layer.set("redirect-delay-ms", "0");
        }

        layer
    }
}

/// Resolved settings used by the page commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub actor: String,
    pub redirect_delay: Duration,
    pub use_color: bool,
    pub quiet: bool,
    pub explore_limit: Option<usize>,
    pub share_base_url: String,
}

impl Settings {
    /// Resolve settings from a merged layer.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a numeric or boolean value does not parse.
    pub fn from_layer(layer: &ConfigLayer, quiet: bool) -> Result<Self> {
        let redirect_delay = match layer.get("redirect-delay-ms") {
            Some(raw) => Duration::from_millis(parse_number(raw, "redirect-delay-ms")?),
            None => DEFAULT_REDIRECT_DELAY,
        };
        let explore_limit = layer
            .get("explore.limit")
            .map(|raw| parse_number(raw, "explore.limit"))
            .transpose()?
            .and_then(|limit| usize::try_from(limit).ok())
            .filter(|limit| *limit > 0);
        let no_color = match layer.get("no-color") {
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                CivicError::Config(format!("no-color: expected a boolean, got '{raw}'"))
            })?,
            None => false,
        };

        Ok(Self {
            actor: resolve_actor(layer),
            redirect_delay,
            use_color: should_use_color(no_color),
            quiet,
            explore_limit,
            share_base_url: layer
                .get("share.base-url")
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_SHARE_BASE_URL)
                .to_string(),
        })
    }
}

/// Discover the active `.civic` directory.
///
/// Honors `CIVIC_DIR` when set, otherwise walks up from `start` (or CWD).
/// Returns `None` when no project directory exists; that is not an error.
#[must_use]
pub fn discover_project_dir(start: Option<&Path>) -> Option<PathBuf> {
    if let Ok(value) = env::var("CIVIC_DIR") {
        let path = PathBuf::from(value.trim());
        if !value.trim().is_empty() && path.is_dir() {
            return Some(path);
        }
    }

    let mut current = match start {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().ok()?,
    };

    loop {
        let candidate = current.join(PROJECT_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load user config (`~/.config/civic/config.yaml`).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<ConfigLayer> {
    let Ok(home) = env::var("HOME") else {
        return Ok(ConfigLayer::default());
    };
    let path = Path::new(&home)
        .join(".config")
        .join("civic")
        .join(CONFIG_FILENAME);
    ConfigLayer::from_yaml(&path)
}

/// Load project config from a `.civic` directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_dir: &Path) -> Result<ConfigLayer> {
    ConfigLayer::from_yaml(&project_dir.join(CONFIG_FILENAME))
}

/// Default config layer (lowest precedence).
#[must_use]
pub fn default_config_layer() -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    layer.set(
        "redirect-delay-ms",
        DEFAULT_REDIRECT_DELAY.as_millis().to_string(),
    );
    layer.set("share.base-url", DEFAULT_SHARE_BASE_URL);
    layer
}

/// Load configuration with full precedence order.
///
/// # Errors
///
/// Returns an error if any config file cannot be read or parsed.
pub fn load_config(project_dir: Option<&Path>, cli: &CliOverrides) -> Result<ConfigLayer> {
    let defaults = default_config_layer();
    let user = load_user_config()?;
    let project = match project_dir {
        Some(dir) => load_project_config(dir)?,
        None => ConfigLayer::default(),
    };
    let env_layer = ConfigLayer::from_env();
    let cli_layer = cli.as_layer();

    Ok(ConfigLayer::merge_layers(&[
        defaults, user, project, env_layer, cli_layer,
    ]))
}

/// Discover, load and resolve settings for a command run.
///
/// # Errors
///
/// Returns an error if config files are unreadable or values are invalid.
pub fn load_settings(cli: &CliOverrides) -> Result<Settings> {
    let project_dir = discover_project_dir(None);
    let layer = load_config(project_dir.as_deref(), cli)?;
    Settings::from_layer(&layer, cli.quiet.unwrap_or(false))
}

/// Resolve actor with fallback to USER and a safe default.
#[must_use]
pub fn resolve_actor(layer: &ConfigLayer) -> String {
    layer
        .get("actor")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| env::var("USER").ok().map(|value| value.trim().to_string()))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ACTOR.to_string())
}

/// Color is on only for a terminal, without `NO_COLOR`, and not disabled.
#[must_use]
pub fn should_use_color(no_color: bool) -> bool {
    !no_color && env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

/// `SHARE_BASE_URL` yields `share-base-url`, `share.base.url` and `share.base-url`.
fn env_key_variants(raw: &str) -> Vec<String> {
    let lower = raw.to_lowercase();
    let mut variants = vec![lower.replace('_', "-"), lower.replace('_', ".")];
    if let Some((section, rest)) = lower.split_once('_') {
        let sectioned = format!("{section}.{}", rest.replace('_', "-"));
        if !variants.contains(&sectioned) {
            variants.push(sectioned);
        }
    }
    variants
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn parse_number(raw: &str, key: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        CivicError::Config(format!(
            "{key}: expected a non-negative integer, got '{raw}'"
        ))
    })
}

fn layer_from_yaml_value(value: &serde_yaml::Value) -> ConfigLayer {
    let mut flat = HashMap::new();
    flatten_yaml(value, "", &mut flat);

    let mut layer = ConfigLayer::default();
    for (key, value) in flat {
        layer.set(&key, value);
    }
    layer
}

fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let next_prefix = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(value, &next_prefix, out);
            }
        }
        serde_yaml::Value::Sequence(values) => {
            let joined = values
                .iter()
                .filter_map(yaml_scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix.to_string(), joined);
        }
        _ => {
            if let Some(value) = yaml_scalar_to_string(value) {
                out.insert(prefix.to_string(), value);
            }
        }
    }
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Bool(v) => Some(v.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
        serde_yaml::Value::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(contents: &str) -> TempDir {
        let temp = TempDir::new().expect("tempdir");
        let project = temp.path().join(PROJECT_DIR_NAME);
        fs::create_dir_all(&project).expect("create .civic");
        fs::write(project.join(CONFIG_FILENAME), contents).expect("write config");
        temp
    }

    #[test]
    fn yaml_nested_keys_are_flattened() {
        let temp = write_project_config("actor: Sarah Johnson\nexplore:\n  limit: 3\n");
        let layer = load_project_config(&temp.path().join(PROJECT_DIR_NAME)).expect("load");
        assert_eq!(layer.get("actor"), Some("Sarah Johnson"));
        assert_eq!(layer.get("explore.limit"), Some("3"));
    }

    #[test]
    fn missing_file_is_empty_layer() {
        let temp = TempDir::new().expect("tempdir");
        let layer = ConfigLayer::from_yaml(&temp.path().join("nope.yaml")).expect("load");
        assert!(layer.values.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let temp = write_project_config("actor: [unclosed\n");
        let err = load_project_config(&temp.path().join(PROJECT_DIR_NAME)).unwrap_err();
        assert!(matches!(err, CivicError::Yaml(_)));
    }

    #[test]
    fn discover_walks_up_to_project_dir() {
        let temp = write_project_config("actor: x\n");
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("nested");
        // CIVIC_DIR may be set in the environment; only assert on the walk.
        if std::env::var_os("CIVIC_DIR").is_none() {
            let found = discover_project_dir(Some(&nested)).expect("found");
            assert_eq!(found, temp.path().join(PROJECT_DIR_NAME));
        }
    }

    #[test]
    fn cli_layer_wins_over_project() {
        let mut project = ConfigLayer::default();
        project.set("actor", "Project Person");
        project.set("redirect_delay_ms", "900");

        let cli = CliOverrides {
            actor: Some("Cli Person".to_string()),
            no_wait: Some(true),
            ..CliOverrides::default()
        };

        let merged =
            ConfigLayer::merge_layers(&[default_config_layer(), project, cli.as_layer()]);
        let settings = Settings::from_layer(&merged, false).expect("settings");
        assert_eq!(settings.actor, "Cli Person");
        assert_eq!(settings.redirect_delay, Duration::ZERO);
    }

    #[test]
    fn project_delay_overrides_default() {
        let mut project = ConfigLayer::default();
        project.set("redirect-delay-ms", "250");
        let merged = ConfigLayer::merge_layers(&[default_config_layer(), project]);
        let settings = Settings::from_layer(&merged, false).expect("settings");
        assert_eq!(settings.redirect_delay, Duration::from_millis(250));
        assert_eq!(settings.share_base_url, DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn invalid_numbers_are_config_errors() {
        let mut layer = default_config_layer();
        layer.set("redirect-delay-ms", "soon");
        let err = Settings::from_layer(&layer, false).unwrap_err();
        assert!(matches!(err, CivicError::Config(msg) if msg.contains("redirect-delay-ms")));

        let mut layer = default_config_layer();
        layer.set("no-color", "sometimes");
        assert!(matches!(
            Settings::from_layer(&layer, false),
            Err(CivicError::Config(_))
        ));
    }

    #[test]
    fn zero_explore_limit_means_unlimited() {
        let mut layer = default_config_layer();
        layer.set("explore.limit", "0");
        let settings = Settings::from_layer(&layer, false).expect("settings");
        assert_eq!(settings.explore_limit, None);
    }

    #[test]
    fn env_vars_map_to_dash_and_dot_keys() {
        let layer = ConfigLayer::from_vars(vec![
            ("CIVIC_EXPLORE_LIMIT".to_string(), "2".to_string()),
            ("CIVIC_ACTOR".to_string(), "Env Person".to_string()),
            ("CIVIC_DIR".to_string(), "/tmp".to_string()),
            ("OTHER".to_string(), "ignored".to_string()),
        ]);
        assert_eq!(layer.get("explore.limit"), Some("2"));
        assert_eq!(layer.get("explore-limit"), Some("2"));
        assert_eq!(layer.get("actor"), Some("Env Person"));
        assert_eq!(layer.get("dir"), None);
        assert_eq!(layer.values.len(), 3);
    }

    #[test]
    fn env_var_reaches_nested_dashed_key() {
        let layer = ConfigLayer::from_vars(vec![(
            "CIVIC_SHARE_BASE_URL".to_string(),
            "https://example.org".to_string(),
        )]);
        let settings = Settings::from_layer(&layer, false).expect("settings");
        assert_eq!(settings.share_base_url, "https://example.org");
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
