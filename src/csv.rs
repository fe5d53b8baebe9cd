// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use serde::ser::{Serialize, SerializeMap, Serializer};

/* ---------------- Records ---------------- */

/// One CSV row keyed by header. Keys keep header order and are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Later duplicates overwrite the value but keep the first position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but a missing column reads as "".
    pub fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = RawRecord::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/* ---------------- Parsing ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: char,
    /// Headers always come from the first line. This only decides whether
    /// rows start at line 1 (`true`) or line 0 (`false`, header echoed as a row).
    pub skip_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { delimiter: ',', skip_header: false }
    }
}

impl ParseOptions {
    /// What the loader uses: comma separated, header consumed.
    pub fn resource() -> Self {
        Self { delimiter: ',', skip_header: true }
    }
}

/// Header-keyed CSV parser. Quote-aware field splitting, blank lines dropped,
/// never fails: unbalanced quotes just run to end of line.
pub fn parse_csv(text: &str, opts: &ParseOptions) -> Vec<RawRecord> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Vec::new();
    };

    // Header cells are split on the bare delimiter, no quote tracking.
    let headers: Vec<String> = first
        .split(opts.delimiter)
        .map(clean_field)
        .collect();

    let start = if opts.skip_header { 1 } else { 0 };

    lines[start..]
        .iter()
        .map(|line| {
            let values = split_fields(line, opts.delimiter);
            let mut rec = RawRecord::new();
            for (i, header) in headers.iter().enumerate() {
                let value = values.get(i).map(|v| clean_field(v)).unwrap_or_default();
                rec.insert(header.as_str(), value);
            }
            rec
        })
        .collect()
}

/// Split one line on `sep`, ignoring separators inside quotes.
/// Quote characters only toggle state; they never reach the output.
pub fn split_fields(line: &str, sep: char) -> Vec<String> {
    let mut values = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => values.push(take(&mut field)),
            _ => field.push(ch),
        }
    }

    values.push(field);
    values
}

/// Trim, drop one layer of wrapping quotes, trim again.
fn clean_field(raw: &str) -> String {
    let t = raw.trim();
    let t = if t.len() >= 2 && t.starts_with('"') && t.ends_with('"') {
        &t[1..t.len() - 1]
    } else {
        t
    };
    t.trim().to_string()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_quoted_delimiter() {
        assert_eq!(split_fields(r#""Data Entry, Clerk",85"#, ','), vec!["Data Entry, Clerk", "85"]);
    }

    #[test]
    fn split_drops_inner_quotes() {
        // Quotes are removed wherever they appear, not only at the edges.
        assert_eq!(split_fields(r#"a"b"c,d"#, ','), vec!["abc", "d"]);
    }

    #[test]
    fn unbalanced_quote_runs_to_end_of_line() {
        assert_eq!(split_fields(r#""open,still open,x"#, ','), vec!["open,still open,x"]);
    }

    #[test]
    fn clean_field_strips_one_layer() {
        assert_eq!(clean_field(r#"  "title"  "#), "title");
        assert_eq!(clean_field(r#"""x"""#), r#""x""#);
        assert_eq!(clean_field("plain"), "plain");
        assert_eq!(clean_field(r#"""#), r#"""#);
    }

    #[test]
    fn duplicate_header_keeps_first_slot() {
        let recs = parse_csv("a,b,a\n1,2,3\n", &ParseOptions::resource());
        assert_eq!(recs[0].len(), 2);
        assert_eq!(recs[0].keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(recs[0].get("a"), Some("3"));
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "say \"hi\"", "plain"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",\"say \"\"hi\"\"\",plain\n");
    }
}
