//! Output formatters for navigator views.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use modelcat_core::{
    Affordance, AssistantAction, ForestStats, ModelDetail, ModelRow, SelectionView, VisibleRow,
};
use serde::Serialize;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

const LISTING_HEADERS: [&str; 8] = [
    "Name",
    "Type",
    "Database",
    "Version",
    "Last Modified",
    "Modified By",
    "Status",
    "Action",
];

/// Trait for formatting output.
pub trait Formatter {
    /// Format the visible navigator rows.
    fn format_tree(&self, rows: &[VisibleRow]) -> String;

    /// Format a model listing.
    fn format_listing(&self, rows: &[ModelRow]) -> String;

    /// Format the properties panel of one model.
    fn format_detail(&self, detail: &ModelDetail) -> String;

    /// Format forest statistics.
    fn format_stats(&self, stats: &ForestStats) -> String;

    /// Format parsed assistant actions.
    fn format_actions(&self, actions: &[AssistantAction]) -> String;

    /// Format whatever the selection currently shows.
    fn format_view(&self, view: &SelectionView) -> String {
        match view {
            SelectionView::Empty => self.format_listing(&[]),
            SelectionView::Detail(detail) => self.format_detail(detail),
            SelectionView::Listing { rows } => self.format_listing(rows),
        }
    }
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_tree(&self, rows: &[VisibleRow]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Node", "Type", "Id"]);

        for row in rows {
            let label = format!(
                "{}{} {}",
                "  ".repeat(row.depth),
                affordance_marker(row.affordance),
                row.name
            );
            table.add_row(vec![
                Cell::new(label),
                Cell::new(row.kind),
                Cell::new(&row.id),
            ]);
        }

        table.to_string()
    }

    fn format_listing(&self, rows: &[ModelRow]) -> String {
        if rows.is_empty() {
            return "No models".to_string();
        }

        let mut table = Table::new();
        table.set_header(LISTING_HEADERS.to_vec());
        for row in rows {
            table.add_row(listing_cells(row));
        }

        format!("{}\n{} model(s)", table, rows.len())
    }

    fn format_detail(&self, detail: &ModelDetail) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Section", "Property", "Value"]);

        let mut last_section = "";
        for prop in detail.properties() {
            // Print each section name once, on its first row.
            let section = if prop.section == last_section {
                ""
            } else {
                prop.section
            };
            last_section = prop.section;
            table.add_row(vec![section, prop.label, prop.value.as_str()]);
        }

        table.to_string()
    }

    fn format_stats(&self, stats: &ForestStats) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Value"]);
        for (name, value) in stats_pairs(stats) {
            table.add_row(vec![name.to_string(), value.to_string()]);
        }
        table.to_string()
    }

    fn format_actions(&self, actions: &[AssistantAction]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["#", "Kind", "Table", "Summary"]);
        for (position, action) in actions.iter().enumerate() {
            table.add_row(vec![
                (position + 1).to_string(),
                action.kind().to_string(),
                action.table_id().unwrap_or("-").to_string(),
                action.summary(),
            ]);
        }
        format!("{}\n{} action(s)", table, actions.len())
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_tree(&self, rows: &[VisibleRow]) -> String {
        to_json(rows, "[]")
    }

    fn format_listing(&self, rows: &[ModelRow]) -> String {
        to_json(rows, "[]")
    }

    fn format_detail(&self, detail: &ModelDetail) -> String {
        to_json(detail, "{}")
    }

    fn format_stats(&self, stats: &ForestStats) -> String {
        to_json(stats, "{}")
    }

    fn format_actions(&self, actions: &[AssistantAction]) -> String {
        to_json(actions, "[]")
    }

    fn format_view(&self, view: &SelectionView) -> String {
        to_json(view, "{}")
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_tree(&self, rows: &[VisibleRow]) -> String {
        let mut output = String::from("id,name,type,depth,affordance\n");
        for row in rows {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                quoted(&row.id),
                quoted(&row.name),
                row.kind,
                row.depth,
                affordance_name(row.affordance)
            ));
        }
        output
    }

    fn format_listing(&self, rows: &[ModelRow]) -> String {
        let mut output = String::from(
            "id,name,type,database,version,last_modified,modified_by,status,checked_out_by,action\n",
        );
        for row in rows {
            let cells = [
                quoted(&row.id),
                quoted(&row.name),
                display_or_empty(row.model_type),
                row.database.as_deref().map(quoted).unwrap_or_default(),
                row.version.as_deref().map(quoted).unwrap_or_default(),
                row.last_modified.map(|t| t.to_rfc3339()).unwrap_or_default(),
                row.last_modified_by.as_deref().map(quoted).unwrap_or_default(),
                display_or_empty(row.status),
                row.checked_out_by.as_deref().map(quoted).unwrap_or_default(),
                row.action.to_string(),
            ];
            output.push_str(&cells.join(","));
            output.push('\n');
        }
        output
    }

    fn format_detail(&self, detail: &ModelDetail) -> String {
        let mut output = String::from("section,property,value\n");
        for prop in detail.properties() {
            output.push_str(&format!(
                "{},{},{}\n",
                prop.section,
                prop.label,
                quoted(&prop.value)
            ));
        }
        output
    }

    fn format_stats(&self, stats: &ForestStats) -> String {
        let mut output = String::from("metric,value\n");
        for (name, value) in stats_pairs(stats) {
            output.push_str(&format!("{},{}\n", name, value));
        }
        output
    }

    fn format_actions(&self, actions: &[AssistantAction]) -> String {
        let mut output = String::from("kind,table,summary\n");
        for action in actions {
            output.push_str(&format!(
                "{},{},{}\n",
                action.kind(),
                action.table_id().map(quoted).unwrap_or_default(),
                quoted(&action.summary())
            ));
        }
        output
    }
}

fn listing_cells(row: &ModelRow) -> Vec<String> {
    let status = match (&row.status, &row.checked_out_by) {
        (Some(status), Some(owner)) => format!("{} ({})", status, owner),
        (Some(status), None) => status.to_string(),
        (None, _) => "-".to_string(),
    };
    vec![
        row.name.clone(),
        display_or_dash(row.model_type),
        row.database.clone().unwrap_or_else(|| "-".to_string()),
        row.version.clone().unwrap_or_else(|| "-".to_string()),
        row.last_modified
            .as_ref()
            .map(format_stamp)
            .unwrap_or_else(|| "-".to_string()),
        row.last_modified_by.clone().unwrap_or_else(|| "-".to_string()),
        status,
        row.action.to_string(),
    ]
}

fn stats_pairs(stats: &ForestStats) -> [(&'static str, usize); 6] {
    [
        ("repositories", stats.repositories),
        ("catalogs", stats.catalogs),
        ("libraries", stats.libraries),
        ("models", stats.models),
        ("total_nodes", stats.total_nodes),
        ("max_depth", stats.max_depth),
    ]
}

fn affordance_marker(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::Leaf => "·",
        Affordance::Collapsed => "▸",
        Affordance::Expanded => "▾",
    }
}

fn affordance_name(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::Leaf => "leaf",
        Affordance::Collapsed => "collapsed",
        Affordance::Expanded => "expanded",
    }
}

fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y-%m-%d %H:%M").to_string()
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn display_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_csv(s))
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}
