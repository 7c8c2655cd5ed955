// Initial task lists read from JSONL, JSON or YAML files

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// One entry of an initial task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    pub description: String,
}

impl SeedTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Load seed records from a file, picking the format by extension
///
/// - `.jsonl`: one record per line
/// - `.json`: an array of records
/// - `.yml` / `.yaml`: a sequence of records
pub fn load_seed(path: &Path) -> Result<Vec<SeedTask>> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default();

    let seed = match extension {
        "jsonl" => read_jsonl(path)?,
        "json" => {
            let content = fs::read_to_string(path).context("Failed to read seed file")?;
            serde_json::from_str(&content).context("Failed to parse JSON seed file")?
        }
        "yml" | "yaml" => {
            let content = fs::read_to_string(path).context("Failed to read seed file")?;
            serde_yaml::from_str(&content).context("Failed to parse YAML seed file")?
        }
        other => {
            return Err(eyre!(
                "Unsupported seed file extension: {:?} (expected jsonl, json, yml or yaml)",
                other
            ));
        }
    };

    Ok(seed)
}

/// Read seed records from a JSONL file, in file order
///
/// Blank lines are ignored. Lines that fail to read or parse are skipped with
/// a warning so one bad entry does not discard the rest of the list.
pub fn read_jsonl(path: &Path) -> Result<Vec<SeedTask>> {
    let file = File::open(path).context("Failed to open JSONL seed file")?;
    let reader = BufReader::new(file);
    let mut seed = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SeedTask>(&line) {
            Ok(task) => seed.push(task),
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse JSON, skipping"
                );
            }
        }
    }

    info!(file = ?path, count = seed.len(), "Loaded seed tasks from JSONL");

    Ok(seed)
}
