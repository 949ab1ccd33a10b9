use crate::models::{JournalEntry, Mood};
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::Path;

const HEADER: &str = "date,mood,note";

/// Splits one line into fields. Quoted fields may contain commas and `""`
/// escapes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }
    fields.push(current);

    fields
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_journal_csv(path: &Path, entries: &[JournalEntry]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "{}", HEADER)?;
    for entry in entries {
        // Newlines would break the line-based reader.
        let note = entry.note.replace(['\n', '\r'], " ");
        writeln!(
            file,
            "{},{},{}",
            entry.date.format("%Y-%m-%d"),
            entry.mood.as_str(),
            quote_field(&note)
        )?;
    }
    Ok(())
}

pub fn load_journal_csv(path: &Path) -> std::io::Result<Vec<JournalEntry>> {
    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() || line.trim() == HEADER {
            continue;
        }
        let fields = parse_csv_line(line);
        let [date, mood, rest @ ..] = fields.as_slice() else {
            continue;
        };
        let (Ok(date), Some(mood)) = (
            NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d"),
            Mood::parse(mood.trim()),
        ) else {
            crate::logger::warn(&format!("Skipping journal CSV line: {}", line));
            continue;
        };
        entries.push(JournalEntry {
            id: None,
            date,
            mood,
            note: rest.first().cloned().unwrap_or_default(),
        });
    }

    Ok(entries)
}
