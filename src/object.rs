//! Ordered key → [`Node`] mapping.
//!
//! Backed by a plain `Vec<(String, Node)>` rather than a hash or btree map:
//! insertion order is preserved for free, key lookup is linear (objects in a
//! configuration document are small), and duplicate insertion overwrites
//! in place.

use crate::node::Node;

#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: Vec<(String, Node)>,
}

/// Order-independent: spec §3 only requires key uniqueness, not insertion
/// order, so two objects are equal when they hold the same set of
/// key→value pairs regardless of position.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.find_index(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.find_index(key).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or overwrite `key`, returning a reference to the inserted
    /// child.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Node {
        let key = key.into();
        let value = value.into();
        match self.find_index(&key) {
            Some(i) => {
                self.entries[i].1 = value;
                &mut self.entries[i].1
            }
            None => {
                self.entries.push((key, value));
                &mut self.entries.last_mut().unwrap().1
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.find_index(key).map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Node)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Node);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Node)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Node)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
