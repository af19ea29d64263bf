//! Field-scoped filter constraints.

/// Insertion-ordered mapping of field name to filter value.
///
/// Writing an existing field replaces its value in place (keeping its
/// original position); writing a new field appends it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Filters(Vec<(String, String)>);

impl Filters {
    /// Empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters holding exactly one entry.
    pub fn single(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self(vec![(field.into(), value.into())])
    }

    /// Value for `field`, if set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.as_str())
    }

    /// Value for `field` only when it is non-empty.
    pub fn active(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|value| !value.is_empty())
    }

    /// Set `field`, most recent write wins.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.0.push((field, value)),
        }
    }

    /// Remove `field`. Returns whether it was present.
    pub fn remove(&mut self, field: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|(key, _)| key != field);
        self.0.len() != before
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of entries, including empty values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First entry with a non-empty value, in insertion order.
    pub fn first_active(&self) -> Option<(&str, &str)> {
        self.iter().find(|(_, value)| !value.is_empty())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
