use csv::{ReaderBuilder, Terminator};

#[cfg(test)]
mod tests;

pub type Row = Vec<String>;

const TRIMMED_CHARACTERS: &[char] = &['"', ' ', '\t', '\r', '\n'];

fn clean_field(field: &str) -> String {
    field.trim_matches(TRIMMED_CHARACTERS).to_owned()
}

/// Splits comma separated text into rows of fields.
///
/// Quoted fields may contain commas, line breaks and doubled quotes. Rows end
/// on `\n` or `\r\n` only; a lone `\r` stays inside its field. Blank lines
/// yield nothing and a last row without a line break is kept. Each field is
/// stripped of surrounding whitespace and quote characters once parsed.
///
/// Never fails: records the reader cannot decode are logged and dropped.
pub fn parse(text: &str) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => {
                let row: Row = record.iter().map(clean_field).collect();
                if row.iter().any(|field| !field.is_empty()) {
                    rows.push(row);
                }
            }
            Err(e) => log::debug!("Skipping unreadable CSV record: {}", e),
        }
    }
    rows
}
