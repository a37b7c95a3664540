use crate::models::user::{BloodGroup, UserRecord};
use crate::stores::account_store::{MAX_AGE, MIN_AGE};
use crate::utils::digest::is_valid_digest;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Column names of the backing file, in order
pub const COLUMNS: [&str; 5] = ["Name", "Age", "Blood Group", "Username", "Password"];

/// The full user table, held in memory between a load and a save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTable {
    records: Vec<UserRecord>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_username(&self, username: &str) -> bool {
        self.records.iter().any(|r| r.username == username)
    }

    /// Append a record. Uniqueness is the caller's concern.
    pub fn push(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    /// Read the table from `path`
    ///
    /// A missing file is an empty table. Anything unparsable is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read user table: {}", path.display()))?;

        Self::from_csv(&content)
            .context(format!("Malformed user table: {}", path.display()))
    }

    /// Overwrite `path` with the whole table, creating parent directories first
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        fs::write(path, self.to_csv())
            .context(format!("Failed to write user table: {}", path.display()))?;

        Ok(())
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(64 + self.records.len() * 128);

        write_row(&mut out, &COLUMNS);

        for record in &self.records {
            let age = record.age.to_string();
            write_row(
                &mut out,
                &[
                    record.name.as_str(),
                    age.as_str(),
                    record.blood_group.as_str(),
                    record.username.as_str(),
                    record.password_digest.as_str(),
                ],
            );
        }

        out
    }

    pub fn from_csv(content: &str) -> Result<Self> {
        // Spreadsheet tools prepend a byte-order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut rows = parse_rows(content)?.into_iter();

        let header = match rows.next() {
            Some(header) => header,
            None => return Ok(Self::new()),
        };

        let header_matches = header.len() == COLUMNS.len()
            && header
                .iter()
                .zip(COLUMNS.iter())
                .all(|(got, want)| got.trim() == *want);

        if !header_matches {
            bail!("Unexpected header: {}", header.join(","));
        }

        let mut table = Self::new();

        // Header is line 1
        for (idx, row) in rows.enumerate() {
            let record = parse_record(row).context(format!("Invalid row {}", idx + 2))?;
            table.push(record);
        }

        Ok(table)
    }
}

fn parse_record(row: Vec<String>) -> Result<UserRecord> {
    if row.len() != COLUMNS.len() {
        bail!("expected {} fields, got {}", COLUMNS.len(), row.len());
    }

    let mut fields = row.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let name = next();
    let age = next().trim().parse::<u8>().context("Invalid age")?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        bail!("Age {} outside {}-{}", age, MIN_AGE, MAX_AGE);
    }
    let blood_group = next()
        .parse::<BloodGroup>()
        .context("Invalid blood group")?;
    let username = next();
    let password_digest = next();

    if !is_valid_digest(&password_digest) {
        bail!("Password column is not a SHA-256 hex digest");
    }

    Ok(UserRecord::new(name, age, blood_group, username, password_digest))
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    let needs_quotes = field.contains([',', '"', '\n', '\r']);

    if needs_quotes {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Split delimited text into rows of fields, honoring double-quoted fields
/// with embedded delimiters, doubled quotes and line breaks. Blank lines are
/// dropped.
fn parse_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                field_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                field_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                finish_row(&mut rows, &mut row, &mut field, field_started);
                field_started = false;
            }
            _ => {
                field.push(ch);
                field_started = true;
            }
        }
    }

    if in_quotes {
        bail!("Unterminated quoted field");
    }

    finish_row(&mut rows, &mut row, &mut field, field_started);

    Ok(rows)
}

fn finish_row(
    rows: &mut Vec<Vec<String>>,
    row: &mut Vec<String>,
    field: &mut String,
    field_started: bool,
) {
    if !field_started && row.is_empty() {
        return;
    }
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
}
