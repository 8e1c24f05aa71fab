pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, InviteSettings};
pub use crate::core::distance::{distance, distance_with_radius, MEAN_EARTH_RADIUS_KM};
pub use crate::core::invite::InviteEngine;
pub use crate::core::report::OutputFormat;
pub use crate::core::selector::{select, select_with_distance};
pub use crate::domain::model::{Customer, Event, GeoPoint, Invitee, Located};
pub use crate::utils::error::{InviteError, Result};
