//! Plain-text instance files.
//!
//! Line 1 holds the original sequence; every following line holds one
//! spectrum entry as `OLIGO COUNT`, where `COUNT` is a positive integer
//! or `inf` for an unbounded repeat budget.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use formic_core::{FormicError, Instance, UsageLimit};

pub fn load_instance(path: &Path) -> Result<Instance, FormicError> {
    let content = std::fs::read_to_string(path)?;
    let mut lines = content.lines();
    let original_sequence = lines
        .next()
        .ok_or_else(|| FormicError::ParseError("empty instance file".to_string()))?
        .trim()
        .to_string();

    let mut oligos = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let oligo = parts.next().unwrap_or_default();
        let count = parts.next().ok_or_else(|| {
            FormicError::ParseError(format!(
                "line {}: expected \"OLIGO COUNT\", got {:?}",
                offset + 2,
                line
            ))
        })?;
        let limit: UsageLimit = count.parse()?;
        oligos.push((oligo.to_string(), limit));
    }

    Ok(Instance::new(original_sequence, oligos))
}

pub fn write_instance(path: &Path, instance: &Instance) -> Result<(), FormicError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", instance.original_sequence)?;
    for (oligo, limit) in &instance.oligos {
        writeln!(writer, "{} {}", oligo, limit)?;
    }
    writer.flush()?;
    Ok(())
}
