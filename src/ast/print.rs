//! Printed forms of AST fragments.
//!
//! The schema checker compares type references and argument definitions by
//! their printed form, so these impls are part of the validation contract:
//! two references are "the same type" exactly when they print identically.

use std::fmt;

use crate::ast::type_system::InputValueDefinition;
use crate::ast::types::Type;
use crate::ast::value::{Value, ValueKind};

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(t) => write!(f, "{}", t.name),
            Type::List(t) => write!(f, "[{}]", t.wrapped),
            Type::NonNull(t) => write!(f, "{}!", t.wrapped),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Int(v) => write!(f, "{v}"),
            ValueKind::Float(v) => write!(f, "{v}"),
            ValueKind::String(v) => write!(f, "{v:?}"),
            ValueKind::Boolean(v) => write!(f, "{v}"),
            ValueKind::Null => write!(f, "null"),
            ValueKind::Enum(v) => write!(f, "{v}"),
            ValueKind::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            ValueKind::Object(fields) => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Prints an argument or input-field definition (`name: Type = default`).
pub fn print_input_value(definition: &InputValueDefinition) -> String {
    match &definition.default_value {
        Some(default) => format!(
            "{}: {} = {}",
            definition.name, definition.value_type, default
        ),
        None => format!("{}: {}", definition.name, definition.value_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::value::ObjectField;

    #[test]
    fn prints_wrapped_types() {
        let ty = Type::non_null(Type::list(Type::named("String", 0..0), 0..0), 0..0);
        assert_eq!(ty.to_string(), "[String]!");
        assert_eq!(
            Type::list(Type::non_null(Type::named("Int", 0..0), 0..0), 0..0).to_string(),
            "[Int!]"
        );
    }

    #[test]
    fn prints_values() {
        assert_eq!(Value::int(42, 0..0).to_string(), "42");
        assert_eq!(Value::string("hi", 0..0).to_string(), "\"hi\"");
        assert_eq!(Value::new(ValueKind::Null, 0..0).to_string(), "null");
        assert_eq!(
            Value::new(ValueKind::Enum("NEWHOPE".into()), 0..0).to_string(),
            "NEWHOPE"
        );
        let list = Value::new(
            ValueKind::List(vec![Value::int(1, 0..0), Value::int(2, 0..0)]),
            0..0,
        );
        assert_eq!(list.to_string(), "[1, 2]");
        let object = Value::new(
            ValueKind::Object(vec![ObjectField {
                name: "a".into(),
                value: Value::boolean(true, 0..0),
                span: 0..0,
            }]),
            0..0,
        );
        assert_eq!(object.to_string(), "{a: true}");
    }

    #[test]
    fn prints_input_values_with_defaults() {
        let mut def = InputValueDefinition::new("episode", Type::named("Episode", 0..0), 0..0);
        assert_eq!(print_input_value(&def), "episode: Episode");
        def.default_value = Some(Value::new(ValueKind::Enum("NEWHOPE".into()), 0..0));
        assert_eq!(print_input_value(&def), "episode: Episode = NEWHOPE");
    }
}
