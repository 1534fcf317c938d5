//! An insertion-ordered list of candidate responses that never holds duplicates.

/// Owned, duplicate-free response list. Uniqueness is checked by exact
/// string equality on insert; order of first insertion is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    items: Vec<String>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `response` unless an identical one is already present.
    /// Returns `true` if it was added.
    pub fn insert(&mut self, response: impl Into<String>) -> bool {
        let response = response.into();
        if self.contains(&response) {
            return false;
        }
        self.items.push(response);
        true
    }

    pub fn contains(&self, response: &str) -> bool {
        self.items.iter().any(|r| r == response)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ResponseSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for response in iter {
            self.insert(response);
        }
    }
}
