// SPDX-License-Identifier: MPL-2.0
//! Reading and writing one language's override file.
//!
//! A resource file is a flat XML document whose root element contains zero or
//! more `<string key="FieldName" value="Localized text"/>` elements. Files are
//! hand-edited by translators, so the writer appends new elements without
//! reformatting or reordering anything that is already there.

use crate::error::{Error, Result};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io;
use std::path::Path;

/// Key/value overrides loaded from one resource file, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable {
    entries: Vec<(String, String)>,
}

impl ResourceTable {
    /// Returns a table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from already-parsed entries, preserving their order.
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Returns the value for `key`.
    ///
    /// Duplicate keys are tolerated; the last entry wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the table contains an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the entries in document order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the schema keys absent from this table, in schema order.
    pub fn missing_keys<'k>(&self, schema_keys: impl IntoIterator<Item = &'k str>) -> Vec<&'k str> {
        schema_keys
            .into_iter()
            .filter(|key| !self.contains_key(key))
            .collect()
    }
}

/// Loads the resource table from `path`.
///
/// An absent file is a normal outcome (`Ok(None)`): no localization file
/// exists for that language yet. Unparsable content is an error; callers on
/// the read path degrade it to defaults rather than surfacing it.
pub fn load(path: &Path) -> Result<Option<ResourceTable>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };
    parse_table(&bytes).map(Some)
}

/// Parses resource XML into a table.
///
/// Any root element name is accepted; only `string` elements with both a
/// `key` and a `value` attribute contribute entries.
fn parse_table(bytes: &[u8]) -> Result<ResourceTable> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"string" {
                    let mut key = None;
                    let mut value = None;
                    for attr in e.attributes() {
                        let attr = attr.map_err(|error| Error::Xml(error.to_string()))?;
                        let unescaped = attr
                            .unescape_value()
                            .map_err(|error| Error::Xml(error.to_string()))?;
                        match attr.key.as_ref() {
                            b"key" => key = Some(unescaped.into_owned()),
                            b"value" => value = Some(unescaped.into_owned()),
                            _ => {}
                        }
                    }
                    if let (Some(key), Some(value)) = (key, value) {
                        entries.push((key, value));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(error) => return Err(Error::Xml(error.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(ResourceTable::from_entries(entries))
}

/// Appends `entries` as new `<string/>` elements before the root close tag.
///
/// The file must already exist; every byte of the existing content is kept
/// as-is so hand-edited files produce minimal diffs. An empty `entries`
/// slice is a no-op that does not touch the file.
pub fn append_entries(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let insert_at = insertion_point(&content).ok_or_else(|| {
        Error::Xml(format!("no closing root tag in {}", path.display()))
    })?;

    let indent = entry_indent(&content);
    let mut block = String::new();
    for (key, value) in entries {
        block.push_str(&indent);
        block.push_str(&format!(
            "<string key=\"{}\" value=\"{}\"/>\n",
            escape(*key),
            escape(*value)
        ));
    }

    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..insert_at]);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&block);
    out.push_str(&content[insert_at..]);

    fs::write(path, out)?;
    Ok(())
}

/// Finds the byte offset where new entries should be spliced in: the start
/// of the line holding the root close tag, so the tag keeps its indentation.
fn insertion_point(content: &str) -> Option<usize> {
    let close_at = content.rfind("</")?;
    let line_start = content[..close_at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    if content[line_start..close_at].trim().is_empty() {
        Some(line_start)
    } else {
        Some(close_at)
    }
}

/// Picks the indentation for appended entries from the existing ones,
/// falling back to four spaces for a file that has none yet.
fn entry_indent(content: &str) -> String {
    for line in content.lines().rev() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("<string") {
            return line[..line.len() - trimmed.len()].to_string();
        }
    }
    "    ".to_string()
}
