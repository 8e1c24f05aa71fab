use crate::utils::error::{InviteError, Result};
use crate::utils::validation::validate_range;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in decimal degrees.
///
/// Fields are private so every value has gone through [`GeoPoint::new`]:
/// both coordinates are finite, latitude is within [-90, 90] and longitude
/// within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    long: f64,
}

/// Default origin: the Dublin office.
pub const DUBLIN_OFFICE: GeoPoint = GeoPoint {
    lat: 53.3381985,
    long: -6.2592576,
};

impl GeoPoint {
    pub fn new(lat: f64, long: f64) -> Result<Self> {
        validate_range("latitude", lat, -90.0, 90.0)?;
        validate_range("longitude", long, -180.0, 180.0)?;
        Ok(Self { lat, long })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn long(&self) -> f64 {
        self.long
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.long)
    }
}

impl FromStr for GeoPoint {
    type Err = InviteError;

    /// Parses `"lat,long"`, e.g. `53.3381985,-6.2592576`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [lat, long] = parts.as_slice() else {
            return Err(InviteError::parse(
                "origin",
                format!(
                    "expected a pair of comma-separated numbers, got '{}'",
                    s.trim()
                ),
            ));
        };

        let lat = parse_coordinate("latitude", lat)?;
        let long = parse_coordinate("longitude", long)?;
        GeoPoint::new(lat, long)
    }
}

pub(crate) fn parse_coordinate(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| InviteError::parse(field, format!("'{}' is not a number: {}", raw, e)))
}

/// Anything the selector can place on the globe and order by id.
pub trait Located {
    fn id(&self) -> i64;
    fn location(&self) -> &GeoPoint;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub user_id: i64,
    pub name: Option<String>,
    pub location: GeoPoint,
}

impl Customer {
    pub fn new(user_id: i64, name: Option<String>, location: GeoPoint) -> Self {
        Self {
            user_id,
            name,
            location,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl Located for Customer {
    fn id(&self) -> i64 {
        self.user_id
    }

    fn location(&self) -> &GeoPoint {
        &self.location
    }
}

/// A selected entity together with its distance from the origin.
#[derive(Debug, PartialEq)]
pub struct Invitee<'a, T> {
    pub entity: &'a T,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub occasion: String,
    pub invited_count: u32,
    pub date: NaiveDate,
    pub cancelled: bool,
}

impl Event {
    /// The calendar date is resolved here, once; an impossible date is an error.
    pub fn new(
        occasion: impl Into<String>,
        invited_count: u32,
        year: i32,
        month: u32,
        day: u32,
        cancelled: bool,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            InviteError::validation(
                "date",
                format!("{:04}-{:02}-{:02}", year, month, day),
                "not a valid calendar date",
            )
        })?;

        Ok(Self {
            occasion: occasion.into(),
            invited_count,
            date,
            cancelled,
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} invites) {}",
            self.date.format("%b %d %Y"),
            self.occasion,
            self.invited_count,
            if self.cancelled { "[CANCELLED]" } else { "" }
        )
    }
}
