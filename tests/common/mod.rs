//! Common test utilities
//!
//! Shared builders and assertion helpers for the validation test suites.
//! The builders construct type-system AST values with throwaway spans so
//! tests read close to the schema text they stand for.

use graphql_sema::ast::{
    EnumTypeDefinition, EnumValueDefinition, FieldDefinition, InputObjectTypeDefinition,
    InputValueDefinition, InterfaceTypeDefinition, ObjectTypeDefinition, OperationTypeDefinition,
    ScalarTypeDefinition, SchemaDefinition, Type, TypeDefinition, TypeExtensionDefinition,
    UnionTypeDefinition,
};
use graphql_sema::validation::{
    RuntimeWiring, SchemaValidator, TypeRegistry, ValidationError, ValidationErrorKind,
};

/// A named type reference with a throwaway span.
pub fn named(name: &str) -> Type {
    Type::named(name, 0..0)
}

/// A non-null named type reference.
pub fn non_null(name: &str) -> Type {
    Type::non_null(named(name), 0..0)
}

/// A field with no arguments.
pub fn field(name: &str, field_type: Type) -> FieldDefinition {
    FieldDefinition::new(name, field_type, 0..0)
}

/// An argument definition with no default.
pub fn argument(name: &str, value_type: Type) -> InputValueDefinition {
    InputValueDefinition::new(name, value_type, 0..0)
}

/// An object type definition.
pub fn object(name: &str, fields: Vec<FieldDefinition>) -> TypeDefinition {
    TypeDefinition::Object(ObjectTypeDefinition {
        name: name.into(),
        implements: vec![],
        directives: vec![],
        fields,
        span: 0..0,
    })
}

/// An object type implementing interfaces.
pub fn object_implementing(
    name: &str,
    implements: Vec<Type>,
    fields: Vec<FieldDefinition>,
) -> TypeDefinition {
    TypeDefinition::Object(ObjectTypeDefinition {
        name: name.into(),
        implements,
        directives: vec![],
        fields,
        span: 0..0,
    })
}

/// An interface type definition.
pub fn interface(name: &str, fields: Vec<FieldDefinition>) -> TypeDefinition {
    TypeDefinition::Interface(InterfaceTypeDefinition {
        name: name.into(),
        directives: vec![],
        fields,
        span: 0..0,
    })
}

/// A union type definition.
pub fn union_of(name: &str, members: Vec<Type>) -> TypeDefinition {
    TypeDefinition::Union(UnionTypeDefinition {
        name: name.into(),
        directives: vec![],
        members,
        span: 0..0,
    })
}

/// An enum type definition.
pub fn enum_of(name: &str, values: Vec<EnumValueDefinition>) -> TypeDefinition {
    TypeDefinition::Enum(EnumTypeDefinition {
        name: name.into(),
        directives: vec![],
        values,
        span: 0..0,
    })
}

/// An enum value definition.
pub fn enum_value(name: &str) -> EnumValueDefinition {
    EnumValueDefinition {
        name: name.into(),
        directives: vec![],
        span: 0..0,
    }
}

/// An input object type definition.
pub fn input_object(name: &str, fields: Vec<InputValueDefinition>) -> TypeDefinition {
    TypeDefinition::InputObject(InputObjectTypeDefinition {
        name: name.into(),
        directives: vec![],
        fields,
        span: 0..0,
    })
}

/// A custom scalar type definition.
pub fn scalar(name: &str) -> TypeDefinition {
    TypeDefinition::Scalar(ScalarTypeDefinition {
        name: name.into(),
        directives: vec![],
        span: 0..0,
    })
}

/// A type extension definition.
pub fn extension(name: &str, fields: Vec<FieldDefinition>) -> TypeExtensionDefinition {
    TypeExtensionDefinition {
        name: name.into(),
        implements: vec![],
        directives: vec![],
        fields,
        span: 0..0,
    }
}

/// A schema definition with the given operation wiring.
pub fn schema_definition(operations: Vec<(&str, &str)>) -> SchemaDefinition {
    SchemaDefinition {
        directives: vec![],
        operation_types: operations
            .into_iter()
            .map(|(operation, type_name)| OperationTypeDefinition {
                operation: operation.into(),
                operation_type: named(type_name),
                span: 0..0,
            })
            .collect(),
        span: 0..0,
    }
}

/// A registry from type definitions alone.
pub fn registry_of(types: Vec<TypeDefinition>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for definition in types {
        registry.add_type(definition).expect("unique test types");
    }
    registry
}

/// Validates with a default (empty) wiring.
pub fn validate(registry: &TypeRegistry) -> Vec<ValidationError> {
    SchemaValidator::new(registry, &RuntimeWiring::default()).validate()
}

/// The kind tags of the errors, in order.
pub fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
    errors.iter().map(|error| error.kind()).collect()
}

/// Counts the errors of one kind.
pub fn count_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> usize {
    errors.iter().filter(|error| error.kind() == kind).count()
}

/// Formats errors for assertion messages.
pub fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.kind().name(), error.message()))
        .collect::<Vec<_>>()
        .join("\n")
}
