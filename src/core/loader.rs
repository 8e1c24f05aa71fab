use crate::domain::model::{parse_coordinate, Customer, Event, GeoPoint};
use crate::domain::ports::Storage;
use crate::utils::error::{InviteError, Result};
use serde::Deserialize;
use std::path::Path;

/// Coordinates arrive either as JSON numbers or as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn to_degrees(&self, field: &str) -> Result<f64> {
        match self {
            RawCoordinate::Number(value) => Ok(*value),
            RawCoordinate::Text(raw) => parse_coordinate(field, raw),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    user_id: i64,
    #[serde(default)]
    name: Option<String>,
    latitude: RawCoordinate,
    longitude: RawCoordinate,
}

impl CustomerRecord {
    fn into_customer(self) -> Result<Customer> {
        let lat = self.latitude.to_degrees("latitude")?;
        let long = self.longitude.to_degrees("longitude")?;
        let location = GeoPoint::new(lat, long)?;
        Ok(Customer::new(self.user_id, self.name, location))
    }
}

/// Parses one JSON customer object per line; blank lines are ignored.
pub fn parse_customers(content: &str) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let location = format!("line {}", line_no);
        let record: CustomerRecord = serde_json::from_str(line)
            .map_err(|e| InviteError::parse(location.clone(), e.to_string()))?;

        let customer = record.into_customer().map_err(|e| match e {
            InviteError::ParseError { message, .. } => InviteError::parse(location.clone(), message),
            InviteError::ValidationError { field, value, reason } => InviteError::ValidationError {
                field: format!("{} ({})", field, location),
                value,
                reason,
            },
            other => other,
        })?;

        customers.push(customer);
    }

    tracing::debug!("Parsed {} customer records", customers.len());
    Ok(customers)
}

pub fn load_customers<S: Storage>(storage: &S, path: &Path) -> Result<Vec<Customer>> {
    tracing::debug!("Loading customers from {}", path.display());
    let content = storage.read_to_string(path)?;
    parse_customers(&content)
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    occasion: String,
    invited_count: u32,
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    cancelled: bool,
}

#[derive(Debug, Deserialize)]
struct EventsDocument {
    events: Vec<EventRecord>,
}

pub fn parse_events(content: &str) -> Result<Vec<Event>> {
    let document: EventsDocument = serde_json::from_str(content)
        .map_err(|e| InviteError::parse("events document", e.to_string()))?;

    document
        .events
        .into_iter()
        .map(|e| Event::new(e.occasion, e.invited_count, e.year, e.month, e.day, e.cancelled))
        .collect()
}

pub fn load_events<S: Storage>(storage: &S, path: &Path) -> Result<Vec<Event>> {
    tracing::debug!("Loading events from {}", path.display());
    let content = storage.read_to_string(path)?;
    parse_events(&content)
}
