use crate::domain::model::{Customer, GeoPoint, Invitee};
use crate::utils::error::{InviteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = InviteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(InviteError::ConfigError {
                message: format!("Unsupported output format '{}'. Valid formats: text, csv, json", other),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InviteeRow<'a> {
    user_id: i64,
    name: &'a str,
    distance_km: f64,
}

impl<'a> From<&Invitee<'a, Customer>> for InviteeRow<'a> {
    fn from(invitee: &Invitee<'a, Customer>) -> Self {
        Self {
            user_id: invitee.entity.user_id,
            name: invitee.entity.display_name(),
            distance_km: (invitee.distance_km * 1000.0).round() / 1000.0,
        }
    }
}

pub fn render(
    invitees: &[Invitee<'_, Customer>],
    origin: &GeoPoint,
    within: f64,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(invitees, origin, within)),
        OutputFormat::Csv => render_csv(invitees),
        OutputFormat::Json => render_json(invitees),
    }
}

pub fn render_text(invitees: &[Invitee<'_, Customer>], origin: &GeoPoint, within: f64) -> String {
    if invitees.is_empty() {
        return format!("No users are within {} km of {}", within, origin);
    }

    let mut lines = vec![format!(
        "The following users are within {} km of {}:",
        within, origin
    )];
    lines.extend(
        invitees
            .iter()
            .map(|i| match &i.entity.name {
                Some(name) => format!("{} {}", i.entity.user_id, name),
                None => i.entity.user_id.to_string(),
            }),
    );
    lines.join("\n")
}

pub fn render_csv(invitees: &[Invitee<'_, Customer>]) -> Result<String> {
    // headers written by hand so an empty selection still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["user_id", "name", "distance_km"])?;
    for invitee in invitees {
        writer.serialize(InviteeRow::from(invitee))?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| InviteError::CsvError(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&buffer).trim_end().to_string())
}

pub fn render_json(invitees: &[Invitee<'_, Customer>]) -> Result<String> {
    let rows: Vec<InviteeRow<'_>> = invitees.iter().map(InviteeRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new(
                4,
                Some("Ian Kehoe".to_string()),
                GeoPoint::new(53.2451022, -6.238335).unwrap(),
            ),
            Customer::new(5, None, GeoPoint::new(53.1302756, -6.2397222).unwrap()),
        ]
    }

    fn dublin() -> GeoPoint {
        GeoPoint::new(53.3381985, -6.2592576).unwrap()
    }

    #[test]
    fn test_text_report() {
        let customers = customers();
        let invitees = vec![
            Invitee { entity: &customers[0], distance_km: 10.567 },
            Invitee { entity: &customers[1], distance_km: 23.287 },
        ];
        let text = render_text(&invitees, &dublin(), 100.0);
        assert_eq!(
            text,
            "The following users are within 100 km of (53.338198, -6.259258):\n4 Ian Kehoe\n5"
        );
    }

    #[test]
    fn test_text_report_without_matches() {
        let text = render_text(&[], &dublin(), 12.5);
        assert_eq!(text, "No users are within 12.5 km of (53.338198, -6.259258)");
    }

    #[test]
    fn test_csv_report() {
        let customers = customers();
        let invitees = vec![Invitee { entity: &customers[0], distance_km: 10.56712 }];
        let csv = render_csv(&invitees).unwrap();
        assert_eq!(csv, "user_id,name,distance_km\n4,Ian Kehoe,10.567");
    }

    #[test]
    fn test_csv_report_empty_has_header() {
        assert_eq!(render_csv(&[]).unwrap(), "user_id,name,distance_km");
    }

    #[test]
    fn test_json_report() {
        let customers = customers();
        let invitees = vec![Invitee { entity: &customers[1], distance_km: 23.2874 }];
        let json = render_json(&invitees).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["user_id"], 5);
        assert_eq!(parsed[0]["name"], "");
        assert_eq!(parsed[0]["distance_km"], 23.287);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
