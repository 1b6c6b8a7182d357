//! Rendering of check results for humans (text) and pipelines (JSON)

use crate::check::{CheckOutcome, CheckReport, CheckSpec};
use crate::error::{Result, SmokeError};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Stable JSON shape for both outcomes
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    outcome: CheckOutcome,
    region: &'a str,
    min_resources: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a CheckReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(
    spec: &CheckSpec,
    result: &Result<CheckReport>,
    format: OutputFormat,
    detailed: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(spec, result),
        OutputFormat::Text => Ok(render_text(spec, result, detailed)),
    }
}

fn render_json(spec: &CheckSpec, result: &Result<CheckReport>) -> Result<String> {
    let doc = JsonReport {
        outcome: CheckOutcome::of(result),
        region: spec.region.as_str(),
        min_resources: spec.min_resources,
        name_filter: spec.name_filter.as_deref(),
        report: result.as_ref().ok(),
        error: result.as_ref().err().map(error_chain),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn render_text(spec: &CheckSpec, result: &Result<CheckReport>, detailed: bool) -> String {
    match result {
        Ok(report) => {
            let mut out = format!(
                "{} {} REST API(s) found in {} ({} total)",
                style("PASS").green().bold(),
                report.matched(),
                report.region,
                report.total
            );
            if detailed && !report.resources.is_empty() {
                out.push('\n');
                out.push_str(&resource_table(report).to_string());
            }
            out
        }
        Err(err) if err.is_assertion_failure() => {
            format!("{} {}", style("FAIL").red().bold(), err)
        }
        Err(err) => format!(
            "{} could not check REST APIs in {}: {}",
            style("ERROR").red().bold(),
            spec.region,
            error_chain(err)
        ),
    }
}

fn resource_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Created", "Tags"]);
    for api in &report.resources {
        let created = api
            .created_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let tags = api
            .tags
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&api.id),
            Cell::new(&api.name),
            Cell::new(created),
            Cell::new(tags),
        ]);
    }
    table
}

/// Error message followed by each `source()` in the chain
fn error_chain(err: &SmokeError) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiResource, Region};
    use chrono::Utc;

    fn passed_report() -> CheckReport {
        CheckReport {
            provider: "mock".to_string(),
            region: "us-east-1".to_string(),
            min_resources: 1,
            name_filter: None,
            total: 1,
            resources: vec![ApiResource::new("abc123", "bookings-api").with_tag("Env", "prod")],
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_text_pass() {
        console::set_colors_enabled(false);
        let spec = CheckSpec::new(Region::default());
        let out = render(&spec, &Ok(passed_report()), OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("PASS"));
        assert!(out.contains("us-east-1"));
        assert!(!out.contains("abc123"));
    }

    #[test]
    fn test_text_pass_detailed_lists_apis() {
        console::set_colors_enabled(false);
        let spec = CheckSpec::new(Region::default());
        let out = render(&spec, &Ok(passed_report()), OutputFormat::Text, true).unwrap();
        assert!(out.contains("abc123"));
        assert!(out.contains("Env=prod"));
    }

    #[test]
    fn test_text_fail_and_error_differ() {
        console::set_colors_enabled(false);
        let spec = CheckSpec::new(Region::default());

        let missing: Result<CheckReport> = Err(SmokeError::NoResources {
            region: "us-east-1".to_string(),
            expected: 1,
            found: 0,
            filter: None,
        });
        let out = render(&spec, &missing, OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("FAIL"));
        assert!(out.contains("not found"));

        let cause = std::io::Error::new(std::io::ErrorKind::Other, "AccessDeniedException");
        let denied: Result<CheckReport> =
            Err(SmokeError::query("mock", "us-east-1", "request rejected", cause));
        let out = render(&spec, &denied, OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("ERROR"));
        assert!(out.contains("AccessDeniedException"));
    }

    #[test]
    fn test_json_shape() {
        let spec = CheckSpec::new(Region::default());
        let out = render(&spec, &Ok(passed_report()), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["outcome"], "passed");
        assert_eq!(value["region"], "us-east-1");
        assert_eq!(value["report"]["resources"][0]["id"], "abc123");
        assert!(value.get("error").is_none());

        let missing: Result<CheckReport> = Err(SmokeError::NoResources {
            region: "us-east-1".to_string(),
            expected: 1,
            found: 0,
            filter: None,
        });
        let out = render(&spec, &missing, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["outcome"], "failed");
        assert!(value["error"].as_str().unwrap().contains("not found"));
        assert!(value.get("report").is_none());
    }
}
