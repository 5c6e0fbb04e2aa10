//! Rendering of [`AnalysisReport`]s for the console.

use std::fmt::Write as _;

use poi_map_analytics_models::AnalysisReport;
use poi_map_poi_models::MissingSide;
use strum_macros::{Display, EnumString};

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Text formatting failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report.
    Json,
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] if formatting or JSON serialization fails.
pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)?),
        OutputFormat::Json => Ok(render_json(report)?),
    }
}

/// Renders `report` as four numbered sections.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render_text(report: &AnalysisReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_text(&mut out, report)?;
    Ok(out)
}

fn write_text(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "=== Map Data Analysis Results ===")?;
    writeln!(out)?;

    writeln!(out, "1. Count of Valid Points per Type:")?;
    for (category, count) in &report.type_count {
        writeln!(out, "{category}: {count}")?;
    }
    writeln!(out)?;

    writeln!(out, "2. Average Rating per Type:")?;
    for (category, avg) in &report.avg_rating {
        writeln!(out, "{category}: {avg:.2}")?;
    }
    writeln!(out)?;

    writeln!(out, "3. Location with Highest Number of Reviews:")?;
    match report
        .most_reviewed
        .as_ref()
        .and_then(|r| r.metadata.as_ref().map(|m| (r, m)))
    {
        Some((record, metadata)) => writeln!(
            out,
            "ID: {}, Type: {}, Reviews: {}",
            record.id, metadata.category, metadata.reviews
        )?,
        None => writeln!(out, "No complete records found.")?,
    }
    writeln!(out)?;

    writeln!(out, "4. Locations with Incomplete Data:")?;
    if report.incomplete.is_empty() {
        writeln!(out, "No incomplete data found.")?;
    }
    for record in &report.incomplete {
        write!(out, "ID: {}", record.id)?;
        for side in record.missing() {
            match side {
                MissingSide::Location => write!(out, " (missing location data)")?,
                MissingSide::Metadata => write!(out, " (missing metadata)")?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Renders `report` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use poi_map_poi_models::{Location, Metadata, MergedRecord};

    use super::*;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            type_count: BTreeMap::from([("cafe".to_string(), 1), ("park".to_string(), 2)]),
            avg_rating: BTreeMap::from([
                ("cafe".to_string(), 3.0),
                ("park".to_string(), 4.0 / 3.0),
            ]),
            most_reviewed: Some(MergedRecord::new(
                "p1",
                Some(Location::new("p1", 1.0, 2.0)),
                Some(Metadata::new("p1", "park", 4.5, 120)),
            )),
            incomplete: vec![
                MergedRecord::new("x", None, Some(Metadata::new("x", "zoo", 1.0, 1))),
                MergedRecord::new("y", Some(Location::new("y", 0.0, 0.0)), None),
            ],
        }
    }

    #[test]
    fn renders_all_sections() {
        let text = render_text(&sample()).unwrap();
        let expected = "\
=== Map Data Analysis Results ===

1. Count of Valid Points per Type:
cafe: 1
park: 2

2. Average Rating per Type:
cafe: 3.00
park: 1.33

3. Location with Highest Number of Reviews:
ID: p1, Type: park, Reviews: 120

4. Locations with Incomplete Data:
ID: x (missing location data)
ID: y (missing metadata)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_empty_report() {
        let text = render_text(&AnalysisReport::default()).unwrap();
        assert!(text.contains("No complete records found."));
        assert!(text.contains("No incomplete data found."));
    }

    #[test]
    fn render_dispatches_to_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(text, render_text(&sample()).unwrap());
    }

    #[test]
    fn renders_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["typeCount"]["park"], 2);
        assert_eq!(value["mostReviewed"]["id"], "p1");
        assert_eq!(value["mostReviewed"]["metadata"]["type"], "park");
        assert_eq!(value["incomplete"][1]["metadata"], serde_json::Value::Null);
    }

    #[test]
    fn parses_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
