//! Workout reports and their renderings.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Summary of a completed workout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Render the fixed single-line summary, every number to 3 decimals
    pub fn get_message(&self) -> String {
        format!(
            "Tipo de entrenamiento: {}; Duración: {:.3} h; Distancia: {:.3} km; \
             Vel. promedio: {:.3} km/h; Calorías quemadas: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// How reports are written to standard output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One summary line per report
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Header row plus one row per report
    Csv,
}

/// A row in the CSV output
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    training_type: &'a str,
    duration_h: String,
    distance_km: String,
    speed_kmh: String,
    calories: String,
}

impl<'a> From<&'a InfoMessage> for CsvRow<'a> {
    fn from(info: &'a InfoMessage) -> Self {
        CsvRow {
            training_type: &info.training_type,
            duration_h: format!("{:.3}", info.duration),
            distance_km: format!("{:.3}", info.distance),
            speed_kmh: format!("{:.3}", info.speed),
            calories: format!("{:.3}", info.calories),
        }
    }
}

/// Render reports in the requested format
///
/// Text and JSON output end every report with a newline; CSV output is
/// empty (not even a header) when there are no reports.
pub fn render_reports(reports: &[InfoMessage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| format!("{}\n", r.get_message()))
            .collect()),
        OutputFormat::Json => {
            let mut out = String::new();
            for report in reports {
                out.push_str(&serde_json::to_string(report)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Csv => render_csv(reports),
    }
}

fn render_csv(reports: &[InfoMessage]) -> Result<String> {
    if reports.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in reports {
        writer.serialize(CsvRow::from(report))?;
    }
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim_report() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_template() {
        assert_eq!(
            swim_report().get_message(),
            "Tipo de entrenamiento: Swimming; Duración: 1.000 h; Distancia: 0.994 km; \
             Vel. promedio: 1.000 km/h; Calorías quemadas: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_regardless_of_magnitude() {
        let info = InfoMessage {
            training_type: "Running".into(),
            duration: 0.0004,
            distance: 123456.78951,
            speed: 0.1,
            calories: 1e7,
        };
        let msg = info.get_message();
        assert!(msg.contains("Duración: 0.000 h"));
        assert!(msg.contains("Distancia: 123456.790 km"));
        assert!(msg.contains("Vel. promedio: 0.100 km/h"));
        assert!(msg.contains("Calorías quemadas: 10000000.000."));
    }

    #[test]
    fn test_display_matches_message() {
        let info = swim_report();
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_text_render_one_line_per_report() {
        let out = render_reports(&[swim_report(), swim_report()], OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with(".\n"));
    }

    #[test]
    fn test_json_render() {
        let out = render_reports(&[swim_report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["calories"], 336.0);
    }

    #[test]
    fn test_csv_render() {
        let out = render_reports(&[swim_report()], OutputFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("training_type,duration_h,distance_km,speed_kmh,calories")
        );
        assert_eq!(lines.next(), Some("Swimming,1.000,0.994,1.000,336.000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_render_empty() {
        assert_eq!(render_reports(&[], OutputFormat::Csv).unwrap(), "");
    }

    #[test]
    fn test_output_format_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"csv\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Csv);
    }
}
