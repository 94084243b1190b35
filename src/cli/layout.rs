//! Layout dump command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{AlternativesSet, Layout};
use clap::Args;
use serde::Serialize;

/// Print the key layout and each key's alternatives
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutOutput {
    rows: Vec<RowOutput>,
}

#[derive(Debug, Serialize)]
struct RowOutput {
    control: bool,
    keys: Vec<KeyOutput>,
}

#[derive(Debug, Serialize)]
struct KeyOutput {
    label: String,
    id: String,
    special: bool,
    alternatives: Vec<String>,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let output = build_output(&Layout::arabic(), &AlternativesSet::arabic());

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for (index, row) in output.rows.iter().enumerate() {
            let labels: Vec<&str> = row.keys.iter().map(|k| k.label.as_str()).collect();
            let kind = if row.control { "control" } else { "letters" };
            println!("Row {} ({kind}): {}", index + 1, labels.join(" "));
        }

        let with_alternatives: Vec<&KeyOutput> = output
            .rows
            .iter()
            .flat_map(|r| r.keys.iter())
            .filter(|k| !k.alternatives.is_empty())
            .collect();
        if !with_alternatives.is_empty() {
            println!();
            println!("Long-press alternatives:");
            for key in with_alternatives {
                println!("  {}: {}", key.label, key.alternatives.join(" "));
            }
        }

        Ok(())
    }
}

fn build_output(layout: &Layout, alternatives: &AlternativesSet) -> LayoutOutput {
    let rows = layout
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowOutput {
            control: layout.is_control_row(index),
            keys: row
                .keys
                .iter()
                .map(|key| KeyOutput {
                    label: key.id.label(),
                    id: key.id.name(),
                    special: key.special,
                    alternatives: alternatives
                        .get(key.id)
                        .map(<[String]>::to_vec)
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    LayoutOutput { rows }
}
