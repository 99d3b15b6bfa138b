//! HTTP-style name-value fields
use std::{borrow::Borrow, fmt::Display};

mod de;
mod ser;

/// Trait for names.
pub trait EqIcase<Rhs: ?Sized = Self> {
    /// Returns whether the values are equal without ASCII case-sensitivity.
    fn eq_ignore_ascii_case(&self, other: &Rhs) -> bool;
}

impl EqIcase for String {
    fn eq_ignore_ascii_case(&self, other: &Self) -> bool {
        str::eq_ignore_ascii_case(self, other)
    }
}

impl EqIcase for str {
    fn eq_ignore_ascii_case(&self, other: &Self) -> bool {
        str::eq_ignore_ascii_case(self, other)
    }
}

impl EqIcase for &str {
    fn eq_ignore_ascii_case(&self, other: &Self) -> bool {
        str::eq_ignore_ascii_case(self, other)
    }
}

/// Ordered list of HTTP-style name-value fields.
///
/// This is a multimap where keys are case-insensitive. Entries keep the
/// order they were added in and duplicate names are kept as distinct
/// entries.
///
/// Equality is order-sensitive and compares names and values exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldMap<N, V> {
    fields: Vec<(N, V)>,
}

/// Fields of a status line and header block.
pub type HeaderFields = FieldMap<String, String>;

impl<N: EqIcase, V> FieldMap<N, V> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.fields.clear()
    }

    /// Removes every field with the name and then appends the field.
    pub fn insert(&mut self, name: N, value: V) {
        self.remove(&name);
        self.fields.push((name, value));
    }

    pub fn append(&mut self, name: N, value: V) {
        self.fields.push((name, value))
    }

    /// Removes every field with the name.
    pub fn remove<Q>(&mut self, name: &Q)
    where
        Q: EqIcase + ?Sized,
        N: Borrow<Q>,
    {
        self.fields
            .retain(|(n, _v)| !n.borrow().eq_ignore_ascii_case(name));
    }

    /// Removes the last field with the name.
    ///
    /// Returns the removed pair if any.
    pub fn remove_last<Q>(&mut self, name: &Q) -> Option<(N, V)>
    where
        Q: EqIcase + ?Sized,
        N: Borrow<Q>,
    {
        let index = self
            .fields
            .iter()
            .rposition(|(n, _v)| n.borrow().eq_ignore_ascii_case(name))?;

        Some(self.fields.remove(index))
    }

    pub fn contains_name<Q>(&self, name: &Q) -> bool
    where
        Q: EqIcase + ?Sized,
        N: Borrow<Q>,
    {
        self.fields
            .iter()
            .any(|(n, _v)| n.borrow().eq_ignore_ascii_case(name))
    }

    /// Returns the value of the first field with the name.
    pub fn get<Q>(&self, name: &Q) -> Option<&V>
    where
        Q: EqIcase + ?Sized,
        N: Borrow<Q>,
    {
        self.fields
            .iter()
            .find(|(n, _v)| n.borrow().eq_ignore_ascii_case(name))
            .map(|(_n, v)| v)
    }

    pub fn get_all<'a, Q>(&'a self, name: &'a Q) -> impl Iterator<Item = &'a V> + 'a
    where
        Q: EqIcase + ?Sized,
        N: Borrow<Q>,
    {
        self.fields.iter().filter_map(move |(n, v)| {
            if n.borrow().eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    pub fn iter(&self) -> FieldMapIter<'_, N, V> {
        FieldMapIter::new(&self.fields)
    }

    pub fn as_slice(&self) -> &[(N, V)] {
        &self.fields
    }
}

impl<N: EqIcase, V> Default for FieldMap<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: EqIcase, V> IntoIterator for FieldMap<N, V> {
    type Item = (N, V);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, N: EqIcase, V> IntoIterator for &'a FieldMap<N, V> {
    type Item = (&'a N, &'a V);
    type IntoIter = FieldMapIter<'a, N, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: EqIcase, V> Extend<(N, V)> for FieldMap<N, V> {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        self.fields.extend(iter)
    }
}

impl<N: EqIcase, V> FromIterator<(N, V)> for FieldMap<N, V> {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            fields: Vec::from_iter(iter),
        }
    }
}

impl<N: EqIcase + Display, V: Display> Display for FieldMap<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.fields {
            write!(f, "{}: {}\r\n", name, value)?;
        }

        Ok(())
    }
}

pub struct FieldMapIter<'a, N, V> {
    fields: std::slice::Iter<'a, (N, V)>,
}

impl<'a, N, V> FieldMapIter<'a, N, V> {
    fn new(fields: &'a [(N, V)]) -> Self {
        Self {
            fields: fields.iter(),
        }
    }
}

impl<'a, N, V> Iterator for FieldMapIter<'a, N, V> {
    type Item = (&'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(|(n, v)| (n, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

impl<N, V> DoubleEndedIterator for FieldMapIter<'_, N, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.fields.next_back().map(|(n, v)| (n, v))
    }
}

impl<N, V> ExactSizeIterator for FieldMapIter<'_, N, V> {
    fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_create() {
        let mut f = FieldMap::from_iter([("n1", "v1")]);

        assert!(!f.is_empty());
        assert_eq!(f.len(), 1);
        assert!(f.contains_name("n1"));
        assert_eq!(f.get("n1"), Some(&"v1"));

        f.clear();

        assert!(f.is_empty());
        assert!(!f.contains_name("n1"));
        assert_eq!(f.get("n1"), None);
    }

    #[test]
    fn test_fields_keep_duplicates_in_order() {
        let mut f = HeaderFields::new();
        f.append("Set-Cookie".to_string(), "a=1".to_string());
        f.append("Host".to_string(), "example.com".to_string());
        f.append("set-cookie".to_string(), "b=2".to_string());

        assert_eq!(f.len(), 3);
        assert_eq!(f.get("SET-COOKIE").map(String::as_str), Some("a=1"));
        assert_eq!(
            f.get_all("Set-Cookie").collect::<Vec<_>>(),
            vec!["a=1", "b=2"]
        );
        assert_eq!(
            f.iter().map(|(n, _v)| n.as_str()).collect::<Vec<_>>(),
            vec!["Set-Cookie", "Host", "set-cookie"]
        );
    }

    #[test]
    fn test_fields_remove_last() {
        let mut f = FieldMap::from_iter([("n1", "a"), ("n2", "b"), ("N1", "c"), ("n3", "d")]);

        assert_eq!(f.remove_last("n1"), Some(("N1", "c")));
        assert_eq!(f.as_slice(), &[("n1", "a"), ("n2", "b"), ("n3", "d")]);

        assert_eq!(f.remove_last("n1"), Some(("n1", "a")));
        assert_eq!(f.remove_last("n1"), None);
        assert_eq!(f.as_slice(), &[("n2", "b"), ("n3", "d")]);
    }

    #[test]
    fn test_fields_insert_remove() {
        let mut f = FieldMap::new();

        f.append("n1", "v1-0");
        f.append("N1", "v1-1");
        f.append("n2", "v2-0");
        f.insert("n1", "v1-2");

        assert_eq!(f.as_slice(), &[("n2", "v2-0"), ("n1", "v1-2")]);

        f.remove("N2");

        assert_eq!(f.len(), 1);
        assert!(!f.contains_name("n2"));
    }

    #[test]
    fn test_fields_equality_is_order_sensitive() {
        let a = FieldMap::from_iter([("n1", "v1"), ("n2", "v2")]);
        let b = FieldMap::from_iter([("n2", "v2"), ("n1", "v1")]);

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_fields_iterator() {
        let f = FieldMap::from_iter([("n1", "v1"), ("n2", "v2-0"), ("n2", "v2-1")]);

        assert_eq!(
            f.iter().rev().collect::<Vec<_>>(),
            vec![(&"n2", &"v2-1"), (&"n2", &"v2-0"), (&"n1", &"v1")]
        );
        assert_eq!(
            f.into_iter().collect::<Vec<_>>(),
            vec![("n1", "v1"), ("n2", "v2-0"), ("n2", "v2-1")]
        );
    }

    #[test]
    fn test_fields_display() {
        let f = FieldMap::from_iter([("Content-Type", "text/html"), ("X-Foo", "bar")]);

        assert_eq!(f.to_string(), "Content-Type: text/html\r\nX-Foo: bar\r\n");
    }
}
