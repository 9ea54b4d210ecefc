//! Luco: a human-friendly, JSON-like configuration language.
//!
//! Parses Luco text into an in-memory [`Node`] tree, lets programs inspect,
//! mutate, and construct that tree programmatically, and serializes it back
//! to Luco or JSON text.
//!
//! # Modules
//!
//! - `scalar`: leaf values (string/integer/double/boolean/null/empty)
//! - `type_inference`: classifies a raw lexeme into a `Scalar`
//! - `object` / `array`: ordered containers
//! - `node`: the three-way tagged tree element
//! - `parser`: recursive-descent parser driving the tree's construction
//! - `serializer`: dumps a tree back to Luco or JSON text
//! - `error`: the crate-wide error model

pub mod array;
pub mod error;
pub mod node;
pub mod object;
pub mod scalar;
pub mod serializer;
pub mod type_inference;

mod parser;

pub use array::Array;
pub use error::{Error, ErrorKind, ParseError, ParseErrorKind, Result};
pub use node::Node;
pub use object::Object;
pub use scalar::{Scalar, ScalarKind};
pub use serializer::IndentStyle;

/// A Luco document is just a root [`Node`] — always an Object
/// invariant 2).
pub type Document = Node;

/// Build a [`Node::Array`] from a heterogeneous list of values, the way
/// `serde_json::json!` builds a `Value` from a heterogeneous list.
///
/// ```
/// use luco::luco_array;
/// let arr = luco_array![1.3223, 2, "string", true, ()];
/// assert_eq!(arr.as_array().len(), 5);
/// ```
#[macro_export]
macro_rules! luco_array {
    [] => { $crate::Node::Array($crate::Array::new()) };
    [ $($val:expr),+ $(,)? ] => {{
        let mut arr = $crate::Array::new();
        $( arr.push_back($val); )+
        $crate::Node::Array(arr)
    }};
}

/// Build a [`Node::Object`] from `key => value` pairs.
///
/// ```
/// use luco::luco_object;
/// let obj = luco_object!{ "a" => 1, "b" => "two" };
/// assert_eq!(obj.at("a").as_i64(), 1);
/// ```
#[macro_export]
macro_rules! luco_object {
    {} => { $crate::Node::Object($crate::Object::new()) };
    { $($key:expr => $val:expr),+ $(,)? } => {{
        let mut obj = $crate::Object::new();
        $( obj.insert($key, $val); )+
        $crate::Node::Object(obj)
    }};
}
