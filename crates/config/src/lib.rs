//! Layered configuration for brewkit.
//!
//! Values are merged in order, later layers winning:
//!
//! 1. built-in defaults,
//! 2. a configuration file (`brewkit.toml`, `brewkit.yaml` or `brewkit.json`),
//!    either given explicitly or found in the platform configuration directory,
//! 3. environment variables prefixed with `BREWKIT_`, using `__` to reach
//!    nested keys (`BREWKIT_PRIMING__TARGET_CO2=2.6`).

pub mod error;

use std::path::{Path, PathBuf};

use brewkit_recipe::models::SugarType;
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "BREWKIT_";
const FILE_STEM: &str = "brewkit";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credited on exported recipes that have no author.
    pub brewer: String,
    pub export: ExportConfig,
    pub priming: PrimingConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            brewer: "BrewMaster AI".to_string(),
            export: ExportConfig::default(),
            priming: PrimingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Added to the batch size to estimate BeerXML's `BOIL_SIZE`.
    pub boil_allowance_liters: f64,
}
impl Default for ExportConfig {
    fn default() -> Self {
        Self { boil_allowance_liters: 5.0 }
    }
}

/// Fallbacks for priming calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimingConfig {
    pub target_co2: f64,
    pub volume_liters: f64,
    pub temperature_celsius: f64,
    pub sugar: SugarType,
}
impl Default for PrimingConfig {
    fn default() -> Self {
        Self {
            target_co2: 2.4,
            volume_liters: 20.0,
            temperature_celsius: 20.0,
            sugar: SugarType::TableSugar,
        }
    }
}

/// Picks the provider matching the file extension, TOML by default.
fn file_provider(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase).as_deref() {
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

impl Config {
    /// First `brewkit.{toml,yaml,yml,json}` in the platform configuration directory.
    pub fn discover() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", FILE_STEM)?;
        EXTENSIONS
            .iter()
            .map(|ext| dirs.config_dir().join(format!("{FILE_STEM}.{ext}")))
            .find(|path| path.is_file())
    }

    /// Defaults, then `file` (if any), then the environment.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            figment = file_provider(figment, file);
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = match figment.extract() {
            Ok(config) => config,
            Err(err) => exn::bail!(ErrorKind::Invalid(err.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, or from a discovered file when `None`.
    ///
    /// An explicit path must exist; a missing discovered file is not an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                let metadata = std::fs::metadata(path).or_raise(|| ErrorKind::Load(path.display().to_string()))?;
                if !metadata.is_file() {
                    exn::bail!(ErrorKind::Load(path.display().to_string()));
                }
                Some(path.to_path_buf())
            },
            None => Self::discover(),
        };
        tracing::debug!(file = ?file, "loading configuration");
        Self::from_figment(Self::figment(file.as_deref()))
    }

    fn validate(&self) -> Result<()> {
        let invalid = |key: &str, value: f64, expected: &str| {
            ErrorKind::Invalid(format!("{key} must be {expected}, found {value}"))
        };
        let export = &self.export;
        if !export.boil_allowance_liters.is_finite() || export.boil_allowance_liters < 0.0 {
            exn::bail!(invalid("export.boil_allowance_liters", export.boil_allowance_liters, "zero or more"));
        }
        let priming = &self.priming;
        if !priming.target_co2.is_finite() || priming.target_co2 < 0.0 {
            exn::bail!(invalid("priming.target_co2", priming.target_co2, "zero or more"));
        }
        if !priming.volume_liters.is_finite() || priming.volume_liters <= 0.0 {
            exn::bail!(invalid("priming.volume_liters", priming.volume_liters, "greater than zero"));
        }
        if !priming.temperature_celsius.is_finite() {
            exn::bail!(invalid("priming.temperature_celsius", priming.temperature_celsius, "a number"));
        }
        Ok(())
    }
}
