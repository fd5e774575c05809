//! Multi-part message model.
//!
//! A message is an ordered, finite sequence of parts; each part is an
//! opaque `Bytes` payload. Conditions borrow messages immutably and
//! never retain or mutate part data; part clones are zero-copy views.

use bytes::Bytes;

/// The unit of work passed through a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    parts: Vec<Bytes>,
}

impl Message {
    /// Empty message (zero parts). Legal, but rejected by most
    /// admission conditions.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Build a message from parts, preserving order.
    pub fn from_parts(parts: Vec<Bytes>) -> Self {
        Self { parts }
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the message has zero parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append a part at the end.
    pub fn push_part(&mut self, part: Bytes) {
        self.parts.push(part);
    }

    /// Borrow a single part by index.
    pub fn part(&self, i: usize) -> Option<&Bytes> {
        self.parts.get(i)
    }

    /// Borrow all parts in order.
    pub fn parts(&self) -> &[Bytes] {
        &self.parts
    }

    /// Iterate parts in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.parts.iter()
    }
}

impl FromIterator<Bytes> for Message {
    fn from_iter<T: IntoIterator<Item = Bytes>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Bytes;
    type IntoIter = std::slice::Iter<'a, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
