//! Block-style YAML emitter for JSON value trees
//!
//! Covers exactly what generated documents contain: scalars, sequences and
//! mappings. Strings are always double-quoted with `"` escaped; multi-line
//! scalars, anchors and comments are not supported. Mapping keys are
//! written verbatim in insertion order.

use serde_json::Value;

const INDENT: &str = "  ";

/// Render a value tree as YAML text at the given indentation level.
///
/// Non-empty containers produce one line per entry, each terminated by a
/// newline. Scalars and empty containers produce a single line.
pub fn render(value: &Value, indent_level: usize) -> String {
    if is_block(value) {
        render_block(value, indent_level)
    } else {
        format!("{}{}\n", INDENT.repeat(indent_level), render_scalar(value))
    }
}

/// Render a whole document; top-level keys start at column zero
pub fn to_yaml(value: &Value) -> String {
    render(value, 0)
}

/// Non-empty sequences and mappings are emitted in block style
fn is_block(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        _ => false,
    }
}

/// Inline form of scalars and empty containers
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}

fn render_block(value: &Value, indent_level: usize) -> String {
    let indentation = INDENT.repeat(indent_level);
    let mut out = String::new();

    match value {
        Value::Array(items) => {
            for item in items {
                out.push_str(&indentation);
                out.push_str("- ");
                if is_block(item) {
                    // The child's first line moves up next to the dash
                    out.push_str(render_block(item, indent_level + 1).trim_start());
                } else {
                    out.push_str(&render_scalar(item));
                    out.push('\n');
                }
            }
        }
        Value::Object(entries) => {
            for (key, entry) in entries {
                out.push_str(&indentation);
                out.push_str(key);
                if is_block(entry) {
                    out.push_str(":\n");
                    out.push_str(&render_block(entry, indent_level + 1));
                } else {
                    out.push_str(": ");
                    out.push_str(&render_scalar(entry));
                    out.push('\n');
                }
            }
        }
        _ => {
            out.push_str(&indentation);
            out.push_str(&render_scalar(value));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_mapping() {
        let value = json!({ "a": "x", "b": [1, 2], "c": {} });
        assert_eq!(to_yaml(&value), "a: \"x\"\nb:\n  - 1\n  - 2\nc: {}\n");
    }

    #[test]
    fn test_empty_containers_stay_inline() {
        assert_eq!(to_yaml(&json!([])), "[]\n");
        assert_eq!(to_yaml(&json!({})), "{}\n");
        assert_eq!(
            to_yaml(&json!({ "list": [], "map": {} })),
            "list: []\nmap: {}\n"
        );
    }

    #[test]
    fn test_scalars() {
        let value = json!({
            "nothing": null,
            "flag": false,
            "int": 0,
            "float": 1.5,
            "quote": "say \"hi\"",
        });
        assert_eq!(
            to_yaml(&value),
            "nothing: null\nflag: false\nint: 0\nfloat: 1.5\nquote: \"say \\\"hi\\\"\"\n"
        );
    }

    #[test]
    fn test_only_double_quotes_are_escaped() {
        let value = json!({ "path": "C:\\tmp", "colon": "a: b" });
        assert_eq!(
            to_yaml(&value),
            "path: \"C:\\tmp\"\ncolon: \"a: b\"\n"
        );
    }

    #[test]
    fn test_mapping_inside_sequence_aligns_with_dash() {
        let value = json!({ "servers": [{ "url": "https://x", "name": "prod" }] });
        assert_eq!(
            to_yaml(&value),
            "servers:\n  - url: \"https://x\"\n    name: \"prod\"\n"
        );
    }

    #[test]
    fn test_nested_sequences() {
        let value = json!([[1, 2], [], "z"]);
        assert_eq!(to_yaml(&value), "- - 1\n  - 2\n- []\n- \"z\"\n");
    }

    #[test]
    fn test_deep_nesting_indents_two_spaces_per_level() {
        let value = json!({ "a": { "b": { "c": true } } });
        assert_eq!(to_yaml(&value), "a:\n  b:\n    c: true\n");
    }

    #[test]
    fn test_render_at_indent_level() {
        assert_eq!(render(&json!({ "k": 1 }), 2), "    k: 1\n");
        assert_eq!(render(&json!("s"), 1), "  \"s\"\n");
    }

    #[test]
    fn test_security_requirement_shape() {
        let value = json!({ "security": [{ "api_key": [] }] });
        assert_eq!(to_yaml(&value), "security:\n  - api_key: []\n");
    }
}
