//! Conventional JSON serialization of a [`Node`] tree.

use super::IndentStyle;
use crate::node::Node;
use crate::scalar::{stringify_double, Scalar};

pub fn to_string(node: &Node, style: &IndentStyle) -> String {
    let mut out = String::new();
    write_node(node, style, 0, &mut out);
    out
}

fn write_node(node: &Node, style: &IndentStyle, depth: usize, out: &mut String) {
    match node {
        Node::Object(o) => {
            if o.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            let len = o.len();
            for (i, (k, v)) in o.iter().enumerate() {
                out.push_str(&style.unit(depth + 1));
                out.push('"');
                out.push_str(&json_escape(k));
                out.push_str("\": ");
                write_node(v, style, depth + 1, out);
                if i + 1 < len {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&style.unit(depth));
            out.push('}');
        }
        Node::Array(a) => {
            if a.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            let len = a.len();
            for (i, item) in a.iter().enumerate() {
                out.push_str(&style.unit(depth + 1));
                write_node(item, style, depth + 1, out);
                if i + 1 < len {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&style.unit(depth));
            out.push(']');
        }
        Node::Scalar(s) => write_scalar(s, out),
    }
}

fn write_scalar(s: &Scalar, out: &mut String) {
    match s {
        Scalar::String(text) => {
            out.push('"');
            out.push_str(&json_escape(text));
            out.push('"');
        }
        Scalar::Integer(i) => out.push_str(&i.to_string()),
        Scalar::Double(d) => out.push_str(&stringify_double(*d)),
        Scalar::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Scalar::Null | Scalar::Empty => out.push_str("null"),
    }
}

fn json_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    #[test]
    fn empty_object_is_braces() {
        assert_eq!(to_string(&Node::Object(Object::new()), &IndentStyle::default()), "{}");
    }

    #[test]
    fn scalar_member_emits_quoted_key_and_colon() {
        let mut obj = Object::new();
        obj.insert("age", 5i64);
        let out = to_string(&Node::Object(obj), &IndentStyle::default());
        assert_eq!(out, "{\n    \"age\": 5\n}");
    }

    #[test]
    fn string_escaping_handles_quotes_and_control_chars() {
        let mut out = String::new();
        write_scalar(&Scalar::String("a\"b\nc".to_string()), &mut out);
        assert_eq!(out, "\"a\\\"b\\nc\"");
    }
}
