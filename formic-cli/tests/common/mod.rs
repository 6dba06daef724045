#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::Path;

/// Writes an error-free instance file for `original`: the sequence on the
/// first line, then every fixed-length window with its multiplicity.
pub fn write_ideal_instance(path: &Path, original: &str, oligo_size: usize) {
    let mut entries: Vec<(String, u32)> = Vec::new();
    for i in 0..=original.len() - oligo_size {
        let window = &original[i..i + oligo_size];
        match entries.iter_mut().find(|(oligo, _)| oligo == window) {
            Some((_, count)) => *count += 1,
            None => entries.push((window.to_string(), 1)),
        }
    }

    let mut content = String::new();
    writeln!(content, "{}", original).unwrap();
    for (oligo, count) in entries {
        writeln!(content, "{} {}", oligo, count).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
