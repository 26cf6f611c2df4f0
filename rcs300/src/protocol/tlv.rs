// rcs300/src/protocol/tlv.rs

//! Single-byte tag, single-byte length TLV walk used by the reader's
//! communicate-through responses.

use std::collections::BTreeMap;
use std::str::FromStr;

use derive_more::Display;

use crate::{Error, Result};

/// One-byte TLV tag. Displays as two upper-case hex digits ("97").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02X}", _0)]
pub struct Tag(pub u8);

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidTag(s.to_string()));
        }
        u8::from_str_radix(s, 16)
            .map(Tag)
            .map_err(|_| Error::InvalidTag(s.to_string()))
    }
}

/// Tag → value mapping. Duplicate tags keep the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    entries: BTreeMap<Tag, Vec<u8>>,
}

impl TlvMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `data` from `start` until exhausted. A trailing entry whose
    /// length byte or value runs past the end is an error.
    pub fn parse(data: &[u8], start: usize) -> Result<Self> {
        let mut map = Self::new();
        let mut pos = start;

        while pos < data.len() {
            let tag = Tag(data[pos]);
            let len = match data.get(pos + 1) {
                Some(&len) => len as usize,
                None => return Err(Error::TruncatedTlv { offset: pos }),
            };
            let value = data
                .get(pos + 2..pos + 2 + len)
                .ok_or(Error::TruncatedTlv { offset: pos })?;
            map.entries.insert(tag, value.to_vec());
            pos += 2 + len;
        }

        Ok(map)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, tag: u8, value: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(Tag(tag), value)
    }

    /// Value stored under `tag`.
    pub fn get(&self, tag: u8) -> Option<&[u8]> {
        self.entries.get(&Tag(tag)).map(Vec::as_slice)
    }

    /// Look up by the hex rendering of the tag, e.g. `"97"`.
    pub fn get_hex(&self, tag: &str) -> Option<&[u8]> {
        let tag = tag.parse::<Tag>().ok()?;
        self.get(tag.0)
    }

    /// Remove and return the value under `tag`.
    pub fn remove(&mut self, tag: u8) -> Option<Vec<u8>> {
        self.entries.remove(&Tag(tag))
    }

    /// True if `tag` is present.
    pub fn contains(&self, tag: u8) -> bool {
        self.entries.contains_key(&Tag(tag))
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &[u8])> + '_ {
        self.entries.iter().map(|(t, v)| (*t, v.as_slice()))
    }
}
