//! Tree printer — recursive walk over a plist dictionary producing an
//! indented, line-oriented dump.
//!
//! The walk threads the nesting depth through each call instead of mutating
//! a process-wide indent prefix, so indentation is balanced by construction:
//! after a child subtree finishes, the caller is still holding the parent's
//! depth. Output is accumulated into a `String` so callers (and tests) can
//! capture it without touching stdout.
//!
//! Line format, per dictionary entry:
//!
//! ```text
//! key: name, type: Text
//! value: Ada, type: Text
//! --------------------------------------------------
//! key: tags, type: Sequence
//!     value: x, type: Text
//!     value: y, type: Text
//! --------------------------------------------------
//! ```
//!
//! Nested mappings and sequences recurse one indent unit deeper. Sequence
//! elements have no key, so they emit only `value:` lines (or a bare
//! `type:` line before recursing, for container elements). Values the
//! classifier cannot categorize produce a single `Error! type <name> not
//! found` line and traversal continues with the next sibling.

use plist::{Dictionary, Value};

use crate::kind::{classify, node_type_name, raw_tag, Kind};

/// One indentation unit; depth `d` prefixes every line with `d` repetitions.
pub const INDENT: &str = "    ";

/// Horizontal rule emitted after each dictionary entry's full output.
/// Fixed width at every nesting depth, shifted by the entry's indent.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Whole-run toggles for the optional line categories.
///
/// Each switch suppresses or enables its category for the entire dump,
/// never per-node. The `key:`/`value:`/`type:` dump lines themselves are
/// always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Emit a `kind: <Kind>` diagnostic line before each entry.
    pub kind_lines: bool,
    /// Emit a `node type: <name>` line with the deserializer's variant name.
    pub node_type_lines: bool,
    /// Emit a `tag: <n>` line with the raw variant tag.
    pub raw_tag_lines: bool,
    /// Emit the separator rule after each dictionary entry.
    pub separators: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            kind_lines: false,
            node_type_lines: false,
            raw_tag_lines: false,
            separators: true,
        }
    }
}

impl PrintOptions {
    /// All line categories enabled, diagnostics included.
    pub fn verbose() -> Self {
        Self {
            kind_lines: true,
            node_type_lines: true,
            raw_tag_lines: true,
            separators: true,
        }
    }
}

/// Render a full dump of `root`.
///
/// Entries appear in the dictionary's enumeration order, which for
/// [`plist::Dictionary`] is document insertion order, so rendering the same
/// tree twice is byte-identical.
pub fn render(root: &Dictionary, opts: &PrintOptions) -> String {
    let mut out = String::new();
    render_dictionary(root, 0, opts, &mut out);
    out
}

/// Emit every entry of a dictionary at the given depth, each followed by
/// the separator rule when enabled.
fn render_dictionary(dict: &Dictionary, depth: usize, opts: &PrintOptions, out: &mut String) {
    for (key, value) in dict {
        render_entry(key, value, depth, opts, out);
        if opts.separators {
            push_line(out, depth, SEPARATOR);
        }
    }
}

/// Dispatch one keyed entry by its classified kind.
fn render_entry(key: &str, value: &Value, depth: usize, opts: &PrintOptions, out: &mut String) {
    let kind = classify(value);
    emit_diagnostics(value, kind, depth, opts, out);
    match kind {
        Kind::Mapping => {
            push_line(out, depth, &format!("key: {key}, type: {kind}"));
            if let Value::Dictionary(dict) = value {
                render_dictionary(dict, depth + 1, opts, out);
            }
        }
        Kind::Sequence => {
            push_line(out, depth, &format!("key: {key}, type: {kind}"));
            if let Value::Array(items) = value {
                render_sequence(items, depth + 1, opts, out);
            }
        }
        Kind::Unknown => {
            push_line(
                out,
                depth,
                &format!("Error! type {} not found", node_type_name(value)),
            );
        }
        _ => {
            push_line(out, depth, &format!("key: {key}, type: {kind}"));
            push_line(
                out,
                depth,
                &format!("value: {}, type: {kind}", scalar_text(value)),
            );
        }
    }
}

/// Emit the elements of a sequence. Elements carry no key: scalars emit a
/// single `value:` line, container elements emit a bare `type:` line and
/// recurse, unknowns emit the error line and traversal continues.
fn render_sequence(items: &[Value], depth: usize, opts: &PrintOptions, out: &mut String) {
    for value in items {
        let kind = classify(value);
        emit_diagnostics(value, kind, depth, opts, out);
        match kind {
            Kind::Mapping => {
                push_line(out, depth, &format!("type: {kind}"));
                if let Value::Dictionary(dict) = value {
                    render_dictionary(dict, depth + 1, opts, out);
                }
            }
            Kind::Sequence => {
                push_line(out, depth, &format!("type: {kind}"));
                if let Value::Array(nested) = value {
                    render_sequence(nested, depth + 1, opts, out);
                }
            }
            Kind::Unknown => {
                push_line(
                    out,
                    depth,
                    &format!("Error! type {} not found", node_type_name(value)),
                );
            }
            _ => {
                push_line(
                    out,
                    depth,
                    &format!("value: {}, type: {kind}", scalar_text(value)),
                );
            }
        }
    }
}

/// Emit the optional diagnostic lines for one node, per the run's toggles.
fn emit_diagnostics(value: &Value, kind: Kind, depth: usize, opts: &PrintOptions, out: &mut String) {
    if opts.kind_lines {
        push_line(out, depth, &format!("kind: {kind}"));
    }
    if opts.node_type_lines {
        push_line(out, depth, &format!("node type: {}", node_type_name(value)));
    }
    if opts.raw_tag_lines {
        push_line(out, depth, &format!("tag: {}", raw_tag(value)));
    }
}

/// Format a scalar value for its `value:` line.
///
/// Binary blobs render as lowercase hex pairs; timestamps in the plist XML
/// date format. Only called for scalar kinds.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Real(r) => r.to_string(),
        Value::String(s) => s.clone(),
        Value::Data(bytes) => bytes.iter().map(|b| format!("{b:02x}")).collect(),
        Value::Date(date) => date.to_xml_format(),
        _ => String::new(),
    }
}

/// Append one line at the given depth: `INDENT × depth`, text, newline.
fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}
