//! AST nodes for type-system definitions.
//!
//! These are the definitions a schema document contributes to the type
//! registry: object, interface, union, enum, input-object, and scalar types,
//! the optional schema definition wiring operation names to types, and
//! object type extensions.

use smol_str::SmolStr;

use crate::ast::Span;
use crate::ast::document::Directive;
use crate::ast::types::Type;
use crate::ast::value::Value;

/// A type-system definition appearing in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtensionDefinition),
}

/// A named type definition of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
}

impl TypeDefinition {
    /// Returns the defined type's name.
    pub fn name(&self) -> &SmolStr {
        match self {
            TypeDefinition::Object(d) => &d.name,
            TypeDefinition::Interface(d) => &d.name,
            TypeDefinition::Union(d) => &d.name,
            TypeDefinition::Enum(d) => &d.name,
            TypeDefinition::InputObject(d) => &d.name,
            TypeDefinition::Scalar(d) => &d.name,
        }
    }

    /// Returns the definition's span.
    pub fn span(&self) -> &Span {
        match self {
            TypeDefinition::Object(d) => &d.span,
            TypeDefinition::Interface(d) => &d.span,
            TypeDefinition::Union(d) => &d.span,
            TypeDefinition::Enum(d) => &d.span,
            TypeDefinition::InputObject(d) => &d.span,
            TypeDefinition::Scalar(d) => &d.span,
        }
    }

    /// Returns a lowercase label for the definition kind, for messages.
    pub fn kind_label(&self) -> &'static str {
        match self {
            TypeDefinition::Object(_) => "object",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input object",
            TypeDefinition::Scalar(_) => "scalar",
        }
    }
}

/// An object type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeDefinition {
    pub name: SmolStr,
    /// Interface references from the `implements` clause.
    pub implements: Vec<Type>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

/// An interface type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

/// A union type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionTypeDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    /// Member type references.
    pub members: Vec<Type>,
    pub span: Span,
}

/// An enum type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumTypeDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub span: Span,
}

/// An input object type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub span: Span,
}

/// A custom scalar type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarTypeDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// The explicit schema definition wiring operation names to root types.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub span: Span,
}

/// A single `query: Foo` style entry of a schema definition.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTypeDefinition {
    /// Operation name as written (`query`, `mutation`).
    pub operation: SmolStr,
    pub operation_type: Type,
    pub span: Span,
}

/// An `extend type` definition adding fields to an existing object type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExtensionDefinition {
    /// Name of the base object type being extended.
    pub name: SmolStr,
    pub implements: Vec<Type>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

/// A field of an object, interface, or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: SmolStr,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: Type,
    pub directives: Vec<Directive>,
    pub span: Span,
}

impl FieldDefinition {
    /// Creates a field definition with no arguments or directives.
    pub fn new(name: impl Into<SmolStr>, field_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            field_type,
            directives: Vec::new(),
            span,
        }
    }
}

/// An argument or input-object field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: SmolStr,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub span: Span,
}

impl InputValueDefinition {
    /// Creates an input value definition with no default or directives.
    pub fn new(name: impl Into<SmolStr>, value_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            value_type,
            default_value: None,
            directives: Vec::new(),
            span,
        }
    }
}

/// An enum value definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDefinition {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub span: Span,
}
