//! Format decoded values for display: tracer-style text (`Display`) and an indented tree view.

use crate::value::{ArgumentList, Property, Value};
use std::fmt::{self, Write};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => write_quoted(f, s),
            Value::Address(s) | Value::FlagExpr(s) => f.write_str(s),
            Value::Null => f.write_str("NULL"),
            Value::List(items) => {
                f.write_char('[')?;
                write_joined(f, items)?;
                f.write_char(']')
            }
            Value::Object(props) => {
                f.write_char('{')?;
                for (i, p) in props.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                f.write_char('}')
            }
        }
    }
}

/// `key=value`. Several values are written back to back, as the tracer prints them.
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.key)?;
        for v in self.values.iter() {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Arguments separated by `, `, i.e. the text between the call's parentheses.
impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

/// Variant name used in the tree view.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Text(_) => "string",
        Value::Address(_) => "address",
        Value::Null => "null",
        Value::FlagExpr(_) => "flags",
        Value::List(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One line per value, two spaces of indent per nesting level, e.g.
///
/// ```text
/// [0] integer 3
/// [1] object
///   st_mode: flags S_IFREG
/// ```
pub fn format_tree(args: &ArgumentList) -> String {
    let mut out = String::new();
    for (i, v) in args.iter().enumerate() {
        tree_value(&mut out, &format!("[{}]", i), v, 0);
    }
    out
}

fn tree_value(out: &mut String, label: &str, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::List(items) => {
            let _ = writeln!(out, "{}{} array ({} items)", pad, label, items.len());
            for (i, v) in items.iter().enumerate() {
                tree_value(out, &format!("[{}]", i), v, depth + 1);
            }
        }
        Value::Object(props) => {
            let _ = writeln!(out, "{}{} object", pad, label);
            for p in props.iter() {
                match p.value() {
                    Some(v) => tree_value(out, &format!("{}:", p.key), v, depth + 1),
                    None => {
                        let _ = writeln!(out, "{}  {}: ({} values)", pad, p.key, p.values.len());
                        for (i, v) in p.values.iter().enumerate() {
                            tree_value(out, &format!("[{}]", i), v, depth + 2);
                        }
                    }
                }
            }
        }
        other => {
            let _ = writeln!(out, "{}{} {} {}", pad, label, kind(other), other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(Value::Integer(-1).to_string(), "-1");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Address("0x7f00".into()).to_string(), "0x7f00");
        assert_eq!(Value::FlagExpr("A|B".into()).to_string(), "A|B");
        assert_eq!(Value::Text("a\"b\\c".into()).to_string(), r#""a\"b\\c""#);
    }

    #[test]
    fn display_containers() {
        let v = Value::object(vec![
            Property::new("fd", vec![Value::Integer(3)]),
            Property::new("events", vec![Value::FlagExpr("POLLIN".into())]),
            Property::new("data", vec![Value::list(vec![Value::Integer(1), Value::Null])]),
        ]);
        assert_eq!(v.to_string(), "{fd=3, events=POLLIN, data=[1, NULL]}");
        let args = ArgumentList::new(vec![Value::Integer(1), Value::from("x")]);
        assert_eq!(args.to_string(), r#"1, "x""#);
    }

    #[test]
    fn tree_view_indents_nested_values() {
        let args = ArgumentList::new(vec![
            Value::Integer(3),
            Value::object(vec![Property::new("st_size", vec![Value::Integer(10)])]),
        ]);
        assert_eq!(
            format_tree(&args),
            "[0] integer 3\n[1] object\n  st_size: integer 10\n"
        );
    }

    #[test]
    fn tree_view_of_parsed_struct() {
        let args = crate::parse_arguments("3, {st_mode=S_IFREG}").expect("parse");
        assert_eq!(
            format_tree(&args),
            "[0] integer 3\n[1] object\n  st_mode: flags S_IFREG\n"
        );
    }
}
