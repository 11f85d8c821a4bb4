use std::ops::Deref;

use crate::{Tag, Value};

/// An NBT List. Carries the tag its elements are declared as, alongside the
/// elements themselves.
///
/// The declared tag is not enforced: a list parsed from `[1,a]` declares
/// [`Tag::Int`] but holds a string as its second element.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    tag: Tag,
    values: Vec<Value>,
}

impl List {
    /// Create a list declared as the tag of its first element, or
    /// [`Tag::End`] if it is empty.
    pub fn new(values: Vec<Value>) -> Self {
        let tag = values.first().map_or(Tag::End, Value::tag);
        Self { tag, values }
    }

    /// Create a list with an explicit declared tag. Binary NBT keeps the
    /// element tag even for empty lists, so a codec may need this.
    pub fn with_tag(tag: Tag, values: Vec<Value>) -> Self {
        Self { tag, values }
    }

    /// The declared element tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.values
    }
}

impl Default for List {
    fn default() -> Self {
        Self::with_tag(Tag::End, Vec::new())
    }
}

impl Deref for List {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
