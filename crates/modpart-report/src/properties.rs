//! Line-preserving key/value (`.properties`) file editing.
//!
//! Loading keeps comments, blank lines, and key order intact; `set` replaces
//! a key's value in place (or appends a new entry at the end); storing writes
//! everything back. Only modified entries are reformatted, untouched lines
//! are written verbatim. Logical lines continued with a trailing backslash
//! are read as one entry.

use std::fmt;
use std::path::Path;

use crate::error::{ReportError, Result};

/// One logical line of a properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Comment (`#` or `!`) or blank line, kept verbatim.
    Verbatim(String),
    /// A key/value entry. `raw` holds the original text until the entry is
    /// modified.
    Entry {
        key: String,
        value: String,
        raw: Option<String>,
    },
}

/// An editable key/value configuration file.
#[derive(Debug, Clone, Default)]
pub struct PropertiesFile {
    lines: Vec<Line>,
}

impl PropertiesFile {
    /// An empty properties file.
    pub fn new() -> Self {
        PropertiesFile::default()
    }

    /// Parse properties text.
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut physical = text.lines();

        while let Some(line) = physical.next() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                lines.push(Line::Verbatim(line.to_string()));
                continue;
            }

            // Merge backslash-continued physical lines into one logical line.
            let mut raw = line.to_string();
            let mut logical = line.trim().to_string();
            while logical.ends_with('\\') {
                logical.pop();
                match physical.next() {
                    Some(next) => {
                        raw.push('\n');
                        raw.push_str(next);
                        logical.push_str(next.trim_start());
                    }
                    None => break,
                }
            }

            match split_entry(&logical) {
                Some((key, value)) => lines.push(Line::Entry {
                    key: key.to_string(),
                    value: value.to_string(),
                    raw: Some(raw),
                }),
                // Separator-less lines are preserved untouched.
                None => lines.push(Line::Verbatim(raw)),
            }
        }

        PropertiesFile { lines }
    }

    /// Load a properties file; an absent file yields an empty instance.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(PropertiesFile::new());
        }
        let text =
            std::fs::read_to_string(path).map_err(|source| ReportError::io(path, source))?;
        Ok(PropertiesFile::parse(&text))
    }

    /// The value of a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Set a key, replacing an existing entry in place or appending.
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Entry {
                key: k,
                value: v,
                raw,
            } = line
            {
                if k == key {
                    *v = value.to_string();
                    *raw = None;
                    return;
                }
            }
        }
        self.lines.push(Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
            raw: None,
        });
    }

    /// Write the file back to disk.
    pub fn store(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|source| ReportError::io(path, source))
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for PropertiesFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                Line::Verbatim(text) => writeln!(f, "{text}")?,
                Line::Entry {
                    raw: Some(text), ..
                } => writeln!(f, "{text}")?,
                Line::Entry {
                    key,
                    value,
                    raw: None,
                } => writeln!(f, "{key}={value}")?,
            }
        }
        Ok(())
    }
}

/// Split a logical line at the first `=` or `:` separator.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(['=', ':'])?;
    let key = line[..idx].trim();
    let value = line[idx + 1..].trim_start();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_get() {
        let props = PropertiesFile::parse("a=1\nb = two\nc: three\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("two"));
        assert_eq!(props.get("c"), Some("three"));
        assert_eq!(props.get("d"), None);
    }

    #[test]
    fn set_replaces_in_place_preserving_order_and_comments() {
        let text = "# header\nfirst=1\n\ndisabled.modules=old\nlast=9\n";
        let mut props = PropertiesFile::parse(text);
        props.set("disabled.modules", "a,b,c");

        let stored = props.to_string();
        assert_eq!(
            stored,
            "# header\nfirst=1\n\ndisabled.modules=a,b,c\nlast=9\n"
        );
    }

    #[test]
    fn set_appends_missing_key() {
        let mut props = PropertiesFile::parse("existing=1\n");
        props.set("added", "2");
        assert_eq!(props.to_string(), "existing=1\nadded=2\n");
    }

    #[test]
    fn untouched_entries_keep_original_formatting() {
        let text = "spaced   =   kept\n";
        let mut props = PropertiesFile::parse(text);
        props.set("unrelated", "x");
        assert!(props.to_string().starts_with("spaced   =   kept\n"));
    }

    #[test]
    fn continuation_lines_read_as_one_entry() {
        let props = PropertiesFile::parse("list=a,\\\n    b,\\\n    c\n");
        assert_eq!(props.get("list"), Some("a,b,c"));
    }

    #[test]
    fn bang_comments_preserved() {
        let props = PropertiesFile::parse("! note\nkey=v\n");
        assert_eq!(props.to_string(), "! note\nkey=v\n");
    }

    #[test]
    fn load_absent_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let props = PropertiesFile::load(&dir.path().join("missing.properties")).unwrap();
        assert_eq!(props.keys().count(), 0);
    }

    #[test]
    fn load_merge_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.properties");
        std::fs::write(&path, "# keep me\nother=stays\n").unwrap();

        let mut props = PropertiesFile::load(&path).unwrap();
        props.set("disabled.modules", "m1,m2");
        props.store(&path).unwrap();

        let reread = std::fs::read_to_string(&path).unwrap();
        assert_eq!(reread, "# keep me\nother=stays\ndisabled.modules=m1,m2\n");
    }
}
