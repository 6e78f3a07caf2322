//! CLI handler for the reference tables.

use crate::catalog::{CatalogTable, Render, CATALOG};
use anyhow::{Context, Result};

use super::args::CatalogCliArgs;

pub fn handle_catalog_command(args: CatalogCliArgs) -> Result<()> {
    if args.json {
        let json = match args.table {
            Some(table) => table_json(table)?,
            None => serde_json::to_string_pretty(&CATALOG)?,
        };
        println!("{}", json);
        return Ok(());
    }

    let tables = match args.table {
        Some(table) => vec![table],
        None => CatalogTable::ALL.to_vec(),
    };

    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", table_text(*table));
    }

    Ok(())
}

fn table_json(table: CatalogTable) -> Result<String> {
    let json = match table {
        CatalogTable::Components => serde_json::to_string_pretty(CATALOG.components),
        CatalogTable::Speech => serde_json::to_string_pretty(CATALOG.speech_apis),
        CatalogTable::Ai => serde_json::to_string_pretty(CATALOG.ai_apis),
        CatalogTable::Workarounds => serde_json::to_string_pretty(CATALOG.workarounds),
        CatalogTable::Setup => serde_json::to_string_pretty(CATALOG.setup_steps),
        CatalogTable::Tips => serde_json::to_string_pretty(CATALOG.usage_tips),
    };
    json.context("Failed to serialize catalog table")
}

/// Heading, underline, then one block per record.
pub fn table_text(table: CatalogTable) -> String {
    let rows: Vec<String> = match table {
        CatalogTable::Components => rows(CATALOG.components),
        CatalogTable::Speech => rows(CATALOG.speech_apis),
        CatalogTable::Ai => rows(CATALOG.ai_apis),
        CatalogTable::Workarounds => rows(CATALOG.workarounds),
        CatalogTable::Setup => rows(CATALOG.setup_steps),
        CatalogTable::Tips => rows(CATALOG.usage_tips),
    };

    let title = table.title();
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.len()));
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn rows<R: Render>(table: &[R]) -> Vec<String> {
    table.iter().map(Render::terminal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_text_has_heading_and_rows() {
        let text = table_text(CatalogTable::Ai);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("AI APIs"));
        assert_eq!(lines.next(), Some("======="));
        assert!(text.contains("Anthropic Claude"));
        assert!(text.contains("Best for: Longer context, nuanced responses"));
    }

    #[test]
    fn test_table_json_is_array() {
        let json: serde_json::Value = serde_json::from_str(&table_json(CatalogTable::Tips).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), CatalogTable::Tips.len());
    }
}
