//! The three-way tagged tree element: object, array, or scalar.
//!
//! `Node` is the single type every other module builds on: a tagged union
//! with accessors, mutation, composition, and a serialization dispatch
//! point, over a container pair (`Object`/`Array`) plus one leaf (`Scalar`).

use std::collections::{BTreeMap, HashMap};
use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::array::Array;
use crate::error::Error;
use crate::object::Object;
use crate::scalar::{Scalar, ScalarKind};
use crate::serializer::{self, IndentStyle};

/// A node in a Luco document tree. Always exactly one of object / array /
/// scalar; the variant tag makes this unrepresentable to violate.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Object(Object),
    Array(Array),
    Scalar(Scalar),
}

/// Default construction yields an empty `Object`.
impl Default for Node {
    fn default() -> Self {
        Node::Object(Object::default())
    }
}

impl Node {
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::Scalar(s) => s.type_name(),
        }
    }

    // ---- kind queries ----

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }
    /// True for the scalar variant: a Node that holds a leaf value rather
    /// than a container.
    pub fn is_value(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    fn scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_string)
    }
    pub fn is_integer(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_integer)
    }
    pub fn is_double(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_double)
    }
    pub fn is_number(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_number)
    }
    pub fn is_boolean(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_boolean)
    }
    pub fn is_null(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_null)
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        self.scalar().map(Scalar::kind)
    }

    /// True when this is an object containing `key`. False (never an error)
    /// for non-object nodes.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Node::Object(o) => o.contains_key(key),
            _ => false,
        }
    }

    // ---- container casts ----

    pub fn try_as_object(&self) -> Result<&Object, Error> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(Error::wrong_type("object", other.type_name())),
        }
    }
    pub fn try_as_object_mut(&mut self) -> Result<&mut Object, Error> {
        let type_name = self.type_name();
        match self {
            Node::Object(o) => Ok(o),
            _ => Err(Error::wrong_type("object", type_name)),
        }
    }
    pub fn try_as_array(&self) -> Result<&Array, Error> {
        match self {
            Node::Array(a) => Ok(a),
            other => Err(Error::wrong_type("array", other.type_name())),
        }
    }
    pub fn try_as_array_mut(&mut self) -> Result<&mut Array, Error> {
        let type_name = self.type_name();
        match self {
            Node::Array(a) => Ok(a),
            _ => Err(Error::wrong_type("array", type_name)),
        }
    }
    pub fn try_as_value(&self) -> Result<&Scalar, Error> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(Error::wrong_type("scalar", other.type_name())),
        }
    }

    pub fn as_object(&self) -> &Object {
        self.try_as_object().expect("Node::as_object: wrong type")
    }
    pub fn as_array(&self) -> &Array {
        self.try_as_array().expect("Node::as_array: wrong type")
    }
    pub fn as_value(&self) -> &Scalar {
        self.try_as_value().expect("Node::as_value: wrong type")
    }

    // ---- scalar casts, forwarded through `as_value` ----

    pub fn try_as_str(&self) -> Result<&str, Error> {
        self.try_as_value()?.try_as_str()
    }
    pub fn try_as_i64(&self) -> Result<i64, Error> {
        self.try_as_value()?.try_as_i64()
    }
    pub fn try_as_f64(&self) -> Result<f64, Error> {
        self.try_as_value()?.try_as_f64()
    }
    pub fn try_as_number(&self) -> Result<f64, Error> {
        self.try_as_value()?.try_as_number()
    }
    pub fn try_as_bool(&self) -> Result<bool, Error> {
        self.try_as_value()?.try_as_bool()
    }

    pub fn as_str(&self) -> &str {
        self.try_as_str().expect("Node::as_str: wrong type")
    }
    pub fn as_i64(&self) -> i64 {
        self.try_as_i64().expect("Node::as_i64: wrong type")
    }
    pub fn as_f64(&self) -> f64 {
        self.try_as_f64().expect("Node::as_f64: wrong type")
    }
    pub fn as_number(&self) -> f64 {
        self.try_as_number().expect("Node::as_number: wrong type")
    }
    pub fn as_bool(&self) -> bool {
        self.try_as_bool().expect("Node::as_bool: wrong type")
    }

    // ---- access (`at`/`try_at`) ----

    pub fn try_at(&self, key: &str) -> Result<&Node, Error> {
        self.try_as_object()?
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }
    pub fn try_at_mut(&mut self, key: &str) -> Result<&mut Node, Error> {
        let obj = self.try_as_object_mut()?;
        obj.get_mut(key).ok_or_else(|| Error::key_not_found(key))
    }
    pub fn try_at_index(&self, index: usize) -> Result<&Node, Error> {
        let arr = self.try_as_array()?;
        let len = arr.len();
        arr.get(index)
            .ok_or_else(|| Error::wrong_index(index, len))
    }
    pub fn try_at_index_mut(&mut self, index: usize) -> Result<&mut Node, Error> {
        let arr = self.try_as_array_mut()?;
        let len = arr.len();
        arr.get_mut(index)
            .ok_or_else(|| Error::wrong_index(index, len))
    }

    pub fn at(&self, key: &str) -> &Node {
        self.try_at(key).expect("Node::at: key not found")
    }
    pub fn at_mut(&mut self, key: &str) -> &mut Node {
        self.try_at_mut(key).expect("Node::at_mut: key not found")
    }
    pub fn at_index(&self, index: usize) -> &Node {
        self.try_at_index(index).expect("Node::at_index: out of range")
    }
    pub fn at_index_mut(&mut self, index: usize) -> &mut Node {
        self.try_at_index_mut(index)
            .expect("Node::at_index_mut: out of range")
    }

    // ---- mutation ----

    /// Reshape this node to match `value`. Self-assignment
    /// (`n.set(n.clone())`) is a plain replace and therefore already a
    /// no-op.
    pub fn set(&mut self, value: impl Into<Node>) {
        *self = value.into();
    }

    /// Insert or overwrite `key`. Fails `WrongType` unless this node is an
    /// object.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Result<&mut Node, Error> {
        Ok(self.try_as_object_mut()?.insert(key, value))
    }

    /// Append `value`. Fails `WrongType` unless this node is an array.
    pub fn push_back(&mut self, value: impl Into<Node>) -> Result<&mut Node, Error> {
        Ok(self.try_as_array_mut()?.push_back(value))
    }

    /// `a + b`: same-kind objects merge (right overrides left), arrays
    /// concatenate, strings concatenate, numbers add (promoting to double
    /// if either side is a double). Any other pairing fails `WrongType`.
    pub fn try_add(self, other: Node) -> Result<Node, Error> {
        match (self, other) {
            (Node::Object(mut a), Node::Object(b)) => {
                for (k, v) in b {
                    a.insert(k, v);
                }
                Ok(Node::Object(a))
            }
            (Node::Array(mut a), Node::Array(b)) => {
                for v in b {
                    a.push_back(v);
                }
                Ok(Node::Array(a))
            }
            (Node::Scalar(Scalar::String(mut a)), Node::Scalar(Scalar::String(b))) => {
                a.push_str(&b);
                Ok(Node::Scalar(Scalar::String(a)))
            }
            (Node::Scalar(Scalar::Integer(a)), Node::Scalar(Scalar::Integer(b))) => {
                Ok(Node::Scalar(Scalar::Integer(a + b)))
            }
            (Node::Scalar(a @ Scalar::Integer(_)), Node::Scalar(b))
            | (Node::Scalar(a @ Scalar::Double(_)), Node::Scalar(b))
                if a.is_number() && b.is_number() =>
            {
                Ok(Node::Scalar(Scalar::Double(a.as_number() + b.as_number())))
            }
            (a, b) => Err(Error::wrong_type(a.type_name(), b.type_name())),
        }
    }
}

impl Add for Node {
    type Output = Node;
    fn add(self, rhs: Node) -> Node {
        self.try_add(rhs).expect("Node::add: mismatched or incompatible kinds")
    }
}

/// `node += [(key, value), ...]` appends entries when `node` is an object.
impl AddAssign<Vec<(String, Node)>> for Node {
    fn add_assign(&mut self, rhs: Vec<(String, Node)>) {
        match self {
            Node::Object(o) => {
                for (k, v) in rhs {
                    o.insert(k, v);
                }
            }
            other => panic!("Node::add_assign: expected object, got {}", other.type_name()),
        }
    }
}

/// `node += [value, ...]` appends entries when `node` is an array.
impl AddAssign<Vec<Node>> for Node {
    fn add_assign(&mut self, rhs: Vec<Node>) {
        match self {
            Node::Array(a) => {
                for v in rhs {
                    a.push_back(v);
                }
            }
            other => panic!("Node::add_assign: expected array, got {}", other.type_name()),
        }
    }
}

impl Index<&str> for Node {
    type Output = Node;
    fn index(&self, key: &str) -> &Node {
        self.at(key)
    }
}
impl IndexMut<&str> for Node {
    fn index_mut(&mut self, key: &str) -> &mut Node {
        self.at_mut(key)
    }
}
impl Index<usize> for Node {
    type Output = Node;
    fn index(&self, idx: usize) -> &Node {
        self.at_index(idx)
    }
}
impl IndexMut<usize> for Node {
    fn index_mut(&mut self, idx: usize) -> &mut Node {
        self.at_index_mut(idx)
    }
}

impl Node {
    pub fn to_luco_string(&self, style: &IndentStyle) -> String {
        serializer::luco::to_string(self, style)
    }
    pub fn to_json_string(&self, style: &IndentStyle) -> String {
        serializer::json::to_string(self, style)
    }

    /// Parse `source` into a document tree.
    pub fn parse(source: &str) -> Result<Node, Error> {
        crate::parser::driver::ParserDriver::new(source).parse()
    }

    /// Thin file-I/O collaborator: read a `Read` to a string and parse it.
    pub fn read_from<R: std::io::Read>(mut reader: R) -> Result<Node, Error> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Node::parse(&buf)
    }

    /// Write this tree's Luco serialization to `writer`. Serialization
    /// itself never fails; only the sink can (`FilesystemError`).
    pub fn write_to<W: std::io::Write>(&self, mut writer: W, style: &IndentStyle) -> Result<(), Error> {
        writer.write_all(self.to_luco_string(style).as_bytes())?;
        Ok(())
    }
}

impl std::str::FromStr for Node {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        Node::parse(s)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_luco_string(&IndentStyle::default()))
    }
}

// ---- foreign-container ingestion ----

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}
impl From<Object> for Node {
    fn from(o: Object) -> Self {
        Node::Object(o)
    }
}
impl From<Array> for Node {
    fn from(a: Array) -> Self {
        Node::Array(a)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::from(s))
    }
}
impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::from(s))
    }
}
impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::from(b))
    }
}
impl From<f64> for Node {
    fn from(d: f64) -> Self {
        Node::Scalar(Scalar::from(d))
    }
}
impl From<f32> for Node {
    fn from(d: f32) -> Self {
        Node::Scalar(Scalar::from(d))
    }
}
impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Scalar(Scalar::from(()))
    }
}

macro_rules! impl_node_from_integer {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Node {
                fn from(v: $t) -> Self {
                    Node::Scalar(Scalar::from(v))
                }
            }
        )+
    };
}
impl_node_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A Rust `Vec` is a sequence container: ingest element-wise.
impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A string-keyed map is a key-value container: ingest entry-wise.
impl<T: Into<Node>> From<HashMap<String, T>> for Node {
    fn from(map: HashMap<String, T>) -> Self {
        Node::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
impl<T: Into<Node>> From<BTreeMap<String, T>> for Node {
    fn from(map: BTreeMap<String, T>) -> Self {
        Node::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Object(o) => o.serialize(serializer),
            Node::Array(a) => a.serialize(serializer),
            Node::Scalar(s) => s.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_exclusivity() {
        let obj = Node::default();
        assert!(obj.is_object() && !obj.is_array() && !obj.is_value());
        let arr = Node::from(vec![1i64, 2]);
        assert!(arr.is_array() && !arr.is_object() && !arr.is_value());
        let val = Node::from("hi");
        assert!(val.is_value() && !val.is_object() && !val.is_array());
    }

    #[test]
    fn insert_then_get() {
        let mut n = Node::default();
        n.insert("a", 1i64).unwrap();
        assert!(n.contains("a"));
        assert_eq!(n.at("a"), &Node::from(1i64));
    }

    #[test]
    fn insert_on_non_object_is_wrong_type() {
        let mut n = Node::from("scalar");
        assert!(n.insert("a", 1i64).is_err());
    }

    #[test]
    fn self_set_is_idempotent() {
        let mut n = Node::from(vec![1i64, 2, 3]);
        let copy = n.clone();
        n.set(copy);
        assert_eq!(n, Node::from(vec![1i64, 2, 3]));
    }

    #[test]
    fn out_of_range_try_at_index_is_key_not_found_style_error() {
        let n = Node::from(Vec::<i64>::new());
        let err = n.try_at_index(4).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::WrongIndex);
    }

    #[test]
    fn type_misquery_never_mutates() {
        let n = Node::from("hi");
        assert!(n.try_as_i64().is_err());
        assert_eq!(n, Node::from("hi"));
    }

    #[test]
    fn add_merges_disjoint_objects_commutatively() {
        let a = Node::from(HashMap::from([("a".to_string(), 1i64)]));
        let b = Node::from(HashMap::from([("b".to_string(), 2i64)]));
        let ab = a.clone() + b.clone();
        let ba = b + a;
        assert_eq!(ab, ba);
    }

    #[test]
    fn add_concatenates_arrays_and_strings() {
        let a = Node::from(vec![1i64]);
        let b = Node::from(vec![2i64]);
        assert_eq!(a + b, Node::from(vec![1i64, 2]));

        let s1 = Node::from("foo");
        let s2 = Node::from("bar");
        assert_eq!(s1 + s2, Node::from("foobar"));
    }

    #[test]
    fn heterogeneous_array_preserves_kinds_in_order() {
        let arr = crate::luco_array![1.3223, 2, "string", true, ()];
        let items = arr.as_array();
        assert!(items.get(0).unwrap().is_double());
        assert!(items.get(1).unwrap().is_integer());
        assert!(items.get(2).unwrap().is_string());
        assert!(items.get(3).unwrap().is_boolean());
        assert!(items.get(4).unwrap().is_null());
    }

    #[test]
    fn indexed_child_insert_then_reassign() {
        let mut n = Node::default();
        n.insert("k", vec![1i64, 2, 3]).unwrap();
        assert_eq!(n.at("k").at_index(1).as_i64(), 2);
        n.at_mut("k").set(false);
        assert!(n.at("k").is_boolean());
    }
}
