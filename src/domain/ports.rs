use crate::domain::model::GeoPoint;
use crate::utils::error::Result;
use std::path::Path;

/// Where input documents come from.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &Path;
    fn origin(&self) -> &GeoPoint;
    fn within_km(&self) -> f64;
    fn earth_radius_km(&self) -> f64;
}
