pub mod toml_config;

use crate::core::distance::MEAN_EARTH_RADIUS_KM;
use crate::core::report::OutputFormat;
use crate::core::{ConfigProvider, GeoPoint};
use crate::domain::model::DUBLIN_OFFICE;
use crate::utils::error::{InviteError, Result};
use crate::utils::validation::{validate_non_negative, validate_path, validate_positive, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
pub const DEFAULT_WITHIN_KM: f64 = 100.0;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "geo-invite")]
#[command(about = "List customers within a great-circle distance of an origin, sorted by user id")]
pub struct CliConfig {
    /// Path to customer data, one JSON object per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Origin as "lat,long", e.g. 53.3381985,-6.2592576
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["latitude", "longitude"])]
    pub origin: Option<String>,

    /// Origin latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "longitude")]
    pub latitude: Option<f64>,

    /// Origin longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "latitude")]
    pub longitude: Option<f64>,

    /// Radius, in kilometers, to search for customers around the origin
    #[arg(long)]
    pub within: Option<f64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge flags over the optional TOML file over built-in defaults.
    pub fn resolve(&self) -> Result<InviteSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Reading config file {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut settings = InviteSettings::from_toml(&file_config)?;

        if let Some(file) = &self.file {
            settings.input_file = file.clone();
        }
        match (&self.origin, self.latitude, self.longitude) {
            (Some(origin), _, _) => settings.origin = origin.parse()?,
            (None, Some(lat), Some(long)) => settings.origin = GeoPoint::new(lat, long)?,
            (None, None, None) => {}
            _ => {
                return Err(InviteError::ConfigError {
                    message: "--latitude and --longitude must be given together".to_string(),
                })
            }
        }
        if let Some(within) = self.within {
            settings.within_km = within;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        Ok(settings)
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteSettings {
    pub input_file: PathBuf,
    pub origin: GeoPoint,
    pub within_km: f64,
    pub earth_radius_km: f64,
    pub format: OutputFormat,
}

impl InviteSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = &config.input.file {
            settings.input_file = PathBuf::from(file);
        }
        if let Some(origin) = &config.search.origin {
            settings.origin = origin.parse()?;
        }
        if let Some(within) = config.search.within_km {
            settings.within_km = within;
        }
        if let Some(radius) = config.search.earth_radius_km {
            settings.earth_radius_km = radius;
        }
        if let Some(format) = &config.output.format {
            settings.format = format.parse()?;
        }

        Ok(settings)
    }
}

impl Default for InviteSettings {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_CUSTOMERS_FILE),
            origin: DUBLIN_OFFICE,
            within_km: DEFAULT_WITHIN_KM,
            earth_radius_km: MEAN_EARTH_RADIUS_KM,
            format: OutputFormat::default(),
        }
    }
}

impl ConfigProvider for InviteSettings {
    fn input_file(&self) -> &Path {
        &self.input_file
    }

    fn origin(&self) -> &GeoPoint {
        &self.origin
    }

    fn within_km(&self) -> f64 {
        self.within_km
    }

    fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }
}

impl Validate for InviteSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input.file", &self.input_file.to_string_lossy())?;
        validate_non_negative("search.within_km", self.within_km)?;
        validate_positive("search.earth_radius_km", self.earth_radius_km)?;
        Ok(())
    }
}
