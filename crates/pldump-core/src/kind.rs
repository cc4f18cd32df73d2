//! Kind classification — resolves every deserialized value to one of a
//! closed set of data-kinds.
//!
//! The original platform's plist values are dynamically typed objects whose
//! category has to be recovered from a runtime type tag. Here the
//! deserializer already yields a tagged union ([`plist::Value`]), so
//! classification is a total match over its variants. `plist::Value` is
//! `#[non_exhaustive]`; any variant this crate does not recognize (today:
//! `Uid`, plus whatever future versions add) classifies as
//! [`Kind::Unknown`] instead of panicking, and the printer reports it as an
//! inline error line.

use std::fmt;

use plist::Value;

/// The classified category of a deserialized plist value.
///
/// Numeric values split into `Integer` vs `FloatingPoint` by representation
/// tag, never by value: a real `3.0` is `FloatingPoint` even though it has
/// no fractional part, and a large integer stays `Integer`. Booleans carry
/// their own variant in the deserializer, so they can never be mistaken for
/// the 0/1 integers that back them at the storage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Boolean,
    Integer,
    FloatingPoint,
    Text,
    Binary,
    Timestamp,
    Mapping,
    Sequence,
    /// A value whose dynamic type matches none of the recognized kinds.
    /// Surfaced as an error line in the dump, never a crash.
    Unknown,
}

impl Kind {
    /// True for kinds rendered as a single `value:` line (everything except
    /// `Mapping`, `Sequence`, and `Unknown`).
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Mapping | Kind::Sequence | Kind::Unknown)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::FloatingPoint => "FloatingPoint",
            Kind::Text => "Text",
            Kind::Binary => "Binary",
            Kind::Timestamp => "Timestamp",
            Kind::Mapping => "Mapping",
            Kind::Sequence => "Sequence",
            Kind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Classify a deserialized value. Total and pure: every input maps to
/// exactly one [`Kind`], unrecognized variants map to [`Kind::Unknown`].
pub fn classify(value: &Value) -> Kind {
    match value {
        // Boolean before the numeric variants: the storage layer may back
        // booleans with 0/1, but the variant tag is authoritative.
        Value::Boolean(_) => Kind::Boolean,
        Value::Integer(_) => Kind::Integer,
        Value::Real(_) => Kind::FloatingPoint,
        Value::String(_) => Kind::Text,
        Value::Data(_) => Kind::Binary,
        Value::Date(_) => Kind::Timestamp,
        Value::Dictionary(_) => Kind::Mapping,
        Value::Array(_) => Kind::Sequence,
        _ => Kind::Unknown,
    }
}

/// The deserializer-level name of a value's variant, as used in the
/// `Error! type <name> not found` line and the node-type diagnostic.
pub fn node_type_name(value: &Value) -> &'static str {
    match value {
        Value::Boolean(_) => "boolean",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::String(_) => "string",
        Value::Data(_) => "data",
        Value::Date(_) => "date",
        Value::Dictionary(_) => "dictionary",
        Value::Array(_) => "array",
        Value::Uid(_) => "uid",
        _ => "unrecognized",
    }
}

/// A stable small integer identifying a value's raw variant, emitted by the
/// raw-tag diagnostic line (the analogue of a runtime type id).
pub fn raw_tag(value: &Value) -> u8 {
    match value {
        Value::Boolean(_) => 1,
        Value::Integer(_) => 2,
        Value::Real(_) => 3,
        Value::String(_) => 4,
        Value::Data(_) => 5,
        Value::Date(_) => 6,
        Value::Dictionary(_) => 7,
        Value::Array(_) => 8,
        Value::Uid(_) => 9,
        _ => 0,
    }
}
