//! Luco text serialization: `key = value` per line for objects, one value
//! per line inside `{ }` for arrays, nested objects indented.

use super::IndentStyle;
use crate::node::Node;
use crate::scalar::Scalar;

/// Serialize `node` (expected to be an object — the document root — though
/// any node serializes sensibly) to Luco text.
pub fn to_string(node: &Node, style: &IndentStyle) -> String {
    let mut out = String::new();
    match node {
        Node::Object(o) => {
            for (k, v) in o.iter() {
                write_member(k, v, style, 0, &mut out);
            }
        }
        _ => write_array_item(node, style, 0, &mut out),
    }
    out
}

fn write_member(key: &str, value: &Node, style: &IndentStyle, depth: usize, out: &mut String) {
    out.push_str(&style.unit(depth));
    write_key(key, out);
    match value {
        Node::Scalar(s) => {
            out.push_str(" = ");
            write_scalar(s, out);
            out.push('\n');
        }
        Node::Object(o) => {
            out.push_str(" {\n");
            for (k, v) in o.iter() {
                write_member(k, v, style, depth + 1, out);
            }
            out.push_str(&style.unit(depth));
            out.push_str("}\n");
        }
        Node::Array(a) => {
            out.push_str(" {\n");
            for item in a.iter() {
                write_array_item(item, style, depth + 1, out);
            }
            out.push_str(&style.unit(depth));
            out.push_str("}\n");
        }
    }
}

fn write_array_item(item: &Node, style: &IndentStyle, depth: usize, out: &mut String) {
    out.push_str(&style.unit(depth));
    match item {
        Node::Scalar(s) => {
            write_scalar(s, out);
            out.push('\n');
        }
        Node::Object(o) => {
            out.push_str("{\n");
            for (k, v) in o.iter() {
                write_member(k, v, style, depth + 1, out);
            }
            out.push_str(&style.unit(depth));
            out.push_str("}\n");
        }
        Node::Array(a) => {
            out.push_str("{\n");
            for sub in a.iter() {
                write_array_item(sub, style, depth + 1, out);
            }
            out.push_str(&style.unit(depth));
            out.push_str("}\n");
        }
    }
}

fn write_key(key: &str, out: &mut String) {
    out.push('"');
    out.push_str(&double_escape(key, '"'));
    out.push('"');
}

/// Strings always emit double-quoted; other scalars use their
/// canonical `stringify()` form.
fn write_scalar(s: &Scalar, out: &mut String) {
    match s {
        Scalar::String(text) => {
            out.push('"');
            out.push_str(&double_escape(text, '"'));
            out.push('"');
        }
        other => out.push_str(&other.stringify()),
    }
}

/// Luco's escape form for a structural character inside a quoted string:
/// write it twice.
fn double_escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out
}
