//! Entry and VaultContents types stored inside a vault.
//!
//! An entry is a named credential record: `name` is always present, and
//! everything else is an open set of string fields (username, account,
//! password, website, phone, email, or anything else).  The flattened
//! map keeps fields that this build does not know about intact across a
//! decrypt/re-encrypt cycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single credential entry.
///
/// Serializes as one flat JSON object: `{"name": "...", "username":
/// "...", ...}`.  An object without a `name` key fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The name of the entry (e.g. "github").
    pub name: String,

    /// All other fields of the entry, keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    /// Create an entry with the given name and no other fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style helper: set a field and return the entry.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field value by name.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// The decrypted logical payload of a vault: an ordered list of entries.
///
/// Order reflects insertion/update history and carries no other
/// meaning.  Names are not enforced unique; `update` touches the first
/// match and `remove` drops every match — defined policy, not an
/// accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultContents {
    pub entries: Vec<Entry>,
}

impl VaultContents {
    /// An empty vault payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.  Duplicate names are allowed.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Merge `fields` into the first entry whose name matches.
    ///
    /// Returns `false` if no entry has that name.
    pub fn update<I>(&mut self, name: &str, fields: I) -> bool
    where
        I: IntoIterator<Item = (String, String)>,
    {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                for (key, value) in fields {
                    entry.fields.insert(key, value);
                }
                true
            }
            None => false,
        }
    }

    /// Remove every entry with the given name.
    ///
    /// Returns how many entries were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before - self.entries.len()
    }

    /// The first entry with the given name, if any.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries in the vault.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
