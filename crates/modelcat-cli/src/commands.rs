//! Subcommand execution against a navigator session.

use crate::config::Command;
use crate::formatter::Formatter;
use anyhow::{Context, Result};
use modelcat_core::{parse_actions, NavigatorSession};

/// Run one subcommand and return its rendered output.
pub fn execute(
    session: &mut NavigatorSession,
    command: &Command,
    formatter: &dyn Formatter,
) -> Result<String> {
    match command {
        Command::Tree {
            expand,
            collapse,
            all,
        } => {
            if *all {
                session.expand_all();
            }
            for id in expand {
                warn_if_unknown(session, id);
                session.expansion_mut().expand(id);
            }
            for id in collapse {
                warn_if_unknown(session, id);
                session.expansion_mut().collapse(id);
            }
            Ok(formatter.format_tree(&session.visible_rows()))
        }

        Command::Models { id } => {
            session.select(Some(id.as_str()))?;
            Ok(formatter.format_listing(&session.listing()))
        }

        Command::Show { id } => {
            session.select(Some(id.as_str()))?;
            Ok(formatter.format_view(&session.view()))
        }

        Command::Stats => Ok(formatter.format_stats(&session.forest().stats())),

        Command::Actions { file } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let actions = parse_actions(&content)
                .with_context(|| format!("parsing actions in {}", file.display()))?;
            tracing::info!(count = actions.len(), "Parsed assistant actions");
            Ok(formatter.format_actions(&actions))
        }

        Command::Export => Ok(session.forest().to_json_pretty()?),
    }
}

fn warn_if_unknown(session: &NavigatorSession, id: &str) {
    if !session.forest().contains(id) {
        tracing::warn!(id, "No node with this id in the catalog");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{CsvFormatter, JsonFormatter, TableFormatter};
    use modelcat_core::{sample_forest, Error};
    use std::io::Write;

    fn session() -> NavigatorSession {
        NavigatorSession::new(sample_forest().unwrap())
    }

    #[test]
    fn test_tree_expand_and_collapse() {
        let mut session = session();
        let command = Command::Tree {
            expand: vec!["lib-2".into()],
            collapse: vec!["lib-1".into()],
            all: false,
        };
        let output = execute(&mut session, &command, &CsvFormatter).unwrap();

        assert!(output.contains("\"model-3\",\"Order Processing\",model,3,leaf"));
        assert!(!output.contains("\"model-1\","));
    }

    #[test]
    fn test_tree_all() {
        let mut session = session();
        let command = Command::Tree {
            expand: Vec::new(),
            collapse: Vec::new(),
            all: true,
        };
        let output = execute(&mut session, &command, &CsvFormatter).unwrap();
        // header + 12 nodes
        assert_eq!(output.lines().count(), 13);
    }

    #[test]
    fn test_models_unknown_id() {
        let mut session = session();
        let command = Command::Models { id: "ghost".into() };
        let err = execute(&mut session, &command, &TableFormatter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NodeNotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_show_branch_and_model() {
        let mut session = session();
        let listing = execute(&mut session, &Command::Show { id: "cat-2".into() }, &JsonFormatter)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&listing).unwrap();
        assert_eq!(value["view"], "listing");
        assert_eq!(value["rows"][0]["id"], "model-5");

        let detail = execute(&mut session, &Command::Show { id: "model-5".into() }, &JsonFormatter)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&detail).unwrap();
        assert_eq!(value["view"], "detail");
        assert_eq!(value["metadata"]["checkedOutBy"], "Robert Taylor");
    }

    #[test]
    fn test_actions_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"type": "delete_table", "payload": {{"table_id": "tbl-legacy"}}}}]"#
        )
        .unwrap();

        let mut session = session();
        let command = Command::Actions {
            file: file.path().to_path_buf(),
        };
        let output = execute(&mut session, &command, &CsvFormatter).unwrap();
        assert_eq!(
            output,
            "kind,table,summary\ndelete_table,\"tbl-legacy\",\"Delete table tbl-legacy\"\n"
        );
    }

    #[test]
    fn test_export_reloads() {
        let mut session = session();
        let json = execute(&mut session, &Command::Export, &TableFormatter).unwrap();
        let reloaded = modelcat_core::Forest::from_json(&json).unwrap();
        assert_eq!(reloaded.roots(), session.forest().roots());
    }
}
