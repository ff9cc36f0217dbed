use crate::models::{Dataset, FilterSelection, SummaryStats};
use crate::processors::FilteredSeries;
use crate::utils::constants::{MAX_SELECTED_CITIES, SIDEBAR_DESCRIPTION, SIDEBAR_SOURCE};
use crate::writers::TableWriter;
use std::path::Path;

pub const PAGE_TITLE: &str = "🌦️ Temperatures Dashboard";
pub const TABLE_EXPANDER: &str = "Check the complete dataset:";
pub const SUMMARY_HEADER: &str = "Basic Information";
pub const COMPARISON_HEADER: &str = "Comparing the Temperatures of the Cities";

/// Everything one render pass shows
pub struct PageContent<'a> {
    pub dataset: &'a Dataset,
    /// `Err` carries the message shown in place of the summary
    pub summary: Result<&'a SummaryStats, String>,
    pub selection: &'a FilterSelection,
    pub series: &'a FilteredSeries,
    pub chart: Option<&'a Path>,
    pub table_expanded: bool,
    pub notice: Option<&'a str>,
}

pub const INVERTED_RANGE_NOTE: &str = "Start date is after end date: no readings in range";

fn heading(out: &mut String, title: &str, underline: char) {
    out.push_str(&format!(
        "{}\n{}\n",
        title,
        underline.to_string().repeat(title.chars().count())
    ));
}

/// Lay out the page: sidebar, title, dataset table, summary, comparison
pub fn compose(content: &PageContent<'_>) -> String {
    let mut out = String::new();

    write_sidebar(&mut out);
    out.push('\n');
    heading(&mut out, PAGE_TITLE, '=');
    out.push('\n');
    write_table(&mut out, content);
    out.push('\n');
    write_summary(&mut out, content);
    out.push('\n');
    write_comparison(&mut out, content);

    if let Some(notice) = content.notice {
        out.push_str(&format!("\n⚠️  {}\n", notice));
    }

    out
}

fn write_sidebar(out: &mut String) {
    out.push_str(&format!("│ {}\n", SIDEBAR_DESCRIPTION));
    out.push_str(&format!("│ {}\n", SIDEBAR_SOURCE));
}

fn write_table(out: &mut String, content: &PageContent<'_>) {
    if content.table_expanded {
        out.push_str(&format!("[-] {}\n", TABLE_EXPANDER));
        out.push_str(&TableWriter::new().render(content.dataset));
        out.push('\n');
    } else {
        out.push_str(&format!("[+] {} (type 'table' to expand)\n", TABLE_EXPANDER));
    }
}

fn write_summary(out: &mut String, content: &PageContent<'_>) {
    heading(out, SUMMARY_HEADER, '-');

    let stats = match &content.summary {
        Ok(stats) => *stats,
        Err(message) => {
            out.push_str(message);
            out.push('\n');
            return;
        }
    };

    out.push_str("Cities:\n");
    for city in &stats.unique_cities {
        out.push_str(&format!("  - {}\n", city));
    }
    out.push('\n');

    out.push_str(&format!("☃️  Min Temperature: {:.1}°C\n", stats.min_temp.value));
    out.push_str(&format!("    {} on {}\n", stats.min_temp.city, stats.min_temp.date));
    out.push_str(&format!("🏜️  Max Temperature: {:.1}°C\n", stats.max_temp.value));
    out.push_str(&format!("    {} on {}\n", stats.max_temp.city, stats.max_temp.date));
}

fn write_comparison(out: &mut String, content: &PageContent<'_>) {
    heading(out, COMPARISON_HEADER, '-');

    let selection = content.selection;
    let cities = if selection.is_empty() {
        "none".to_string()
    } else {
        selection.cities().join(", ")
    };
    out.push_str(&format!(
        "Selected cities ({}/{}): {}\n",
        selection.cities().len(),
        MAX_SELECTED_CITIES,
        cities
    ));
    out.push_str(&format!("Start date: {}\n", selection.start_date));
    out.push_str(&format!("End date:   {}\n", selection.end_date));

    if !selection.has_valid_range() {
        out.push_str(INVERTED_RANGE_NOTE);
        out.push('\n');
    }

    if content.series.is_empty() {
        return;
    }

    out.push('\n');
    for city_series in content.series.iter() {
        out.push_str(&format!(
            "  {}: {} daily readings\n",
            city_series.city,
            city_series.points.len()
        ));
    }
    if let Some(path) = content.chart {
        out.push_str(&format!("Chart written to {}\n", path.display()));
    }
}
