//! Literal input values.

use smol_str::SmolStr;

use crate::ast::Span;

/// A literal input value with its kind tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub span: Span,
}

impl Value {
    /// Creates a value.
    pub fn new(kind: ValueKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a string literal value.
    pub fn string(text: impl Into<String>, span: Span) -> Self {
        Self::new(ValueKind::String(text.into()), span)
    }

    /// Creates an int literal value.
    pub fn int(value: i64, span: Span) -> Self {
        Self::new(ValueKind::Int(value), span)
    }

    /// Creates a boolean literal value.
    pub fn boolean(value: bool, span: Span) -> Self {
        Self::new(ValueKind::Boolean(value), span)
    }

    /// True if this value is a string literal.
    pub fn is_string(&self) -> bool {
        matches!(self.kind, ValueKind::String(_))
    }
}

/// The closed set of literal value kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    /// An enum value name, written without quotes.
    Enum(SmolStr),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}

/// A single entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub name: SmolStr,
    pub value: Value,
    pub span: Span,
}
