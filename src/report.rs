//! Terminal rendering of trace results.

use chrono::Utc;
use chrono_tz::Tz;
use std::io::{self, Write};

use crate::tracer::PhoneInfo;

const RULE_WIDTH: usize = 60;

/// Write the formatted result block for `info`.
pub fn display_results<W: Write>(out: &mut W, info: &PhoneInfo, target: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let loc = &info.location;

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "\u{1F4F1} PHONE TRACER RESULTS - ENHANCED LOCATION DATA")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Target Number: {}", target)?;
    writeln!(out, "International Format: {}", info.international_format)?;
    writeln!(out, "National Format: {}", info.national_format)?;
    writeln!(out, "Country Code: +{}", info.country_code)?;
    writeln!(out, "Country: {}", info.country_name)?;
    writeln!(out, "National Number: {}", info.national_number)?;
    writeln!(out, "Number Type: {}", info.number_type)?;
    writeln!(out)?;
    writeln!(out, "\u{1F4CD} LOCATION INFORMATION:")?;
    writeln!(out, "  \u{2022} Full Location: {}", loc.full_location)?;
    writeln!(out, "  \u{2022} Country: {}", loc.country)?;
    writeln!(out, "  \u{2022} State/Province: {}", loc.state)?;
    writeln!(out, "  \u{2022} City/Area: {}", loc.city)?;
    writeln!(out, "\u{1F4E1} Carrier: {}", info.carrier)?;
    writeln!(out, "\u{1F550} Timezone(s): {}", info.timezone.join(", "))?;
    for line in local_times(&info.timezone) {
        writeln!(out, "     {}", line)?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Pretty JSON for `--json` mode.
pub fn display_json<W: Write>(out: &mut W, info: &PhoneInfo) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, info)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// `{"error": "..."}` for a trace that failed in `--json` mode.
pub fn display_json_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    let body = serde_json::json!({ "error": message });
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)
}

/// "Europe/London  14:05 (BST)" for every zone chrono-tz recognises.
fn local_times(zones: &[String]) -> Vec<String> {
    let now = Utc::now();
    zones
        .iter()
        .filter_map(|name| {
            let tz: Tz = name.parse().ok()?;
            let local = now.with_timezone(&tz);
            Some(format!("{:<24} {} ({})", name, local.format("%H:%M"), local.format("%Z")))
        })
        .collect()
}
