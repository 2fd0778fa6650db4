//! Tag labels attached to an object.
//!
//! Tags are only ever used for membership tests, so they are kept in a small
//! inline vector and de-duplicated on insert. Order carries no meaning.

use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(SmallVec<[String; 4]>);

impl Tags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Tags::default();
        for tag in tags {
            out.insert(tag);
        }
        out
    }

    /// Add a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        before != self.0.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Inclusion policy: every tag in `required` is present.
    /// An empty `required` always matches.
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|t| self.contains(t.as_ref()))
    }

    /// Exclusion policy: none of the tags in `exempt` is present.
    pub fn contains_none<S: AsRef<str>>(&self, exempt: &[S]) -> bool {
        !exempt.iter().any(|t| self.contains(t.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
