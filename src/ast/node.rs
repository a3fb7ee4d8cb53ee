//! Borrowed node views with generic child access.
//!
//! [`NodeRef`] is the uniform handle the traversal engine works with: one
//! variant per node kind in the closed hierarchy, each borrowing the typed
//! node it stands for. `children()` yields the direct children in document
//! order, which fixes the pre-order visit sequence.

use crate::ast::Span;
use crate::ast::document::{
    Argument, Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread,
    InlineFragment, OperationDefinition, Selection,
};
use crate::ast::type_system::{
    EnumTypeDefinition, EnumValueDefinition, FieldDefinition, InputObjectTypeDefinition,
    InputValueDefinition, InterfaceTypeDefinition, ObjectTypeDefinition, OperationTypeDefinition,
    ScalarTypeDefinition, SchemaDefinition, TypeDefinition, TypeExtensionDefinition,
    TypeSystemDefinition, UnionTypeDefinition,
};
use crate::ast::types::{ListType, NamedType, NonNullType, Type};
use crate::ast::value::{Value, ValueKind};

/// A borrowed view of any node in the closed hierarchy.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Document(&'a Document),
    OperationDefinition(&'a OperationDefinition),
    FragmentDefinition(&'a FragmentDefinition),
    Field(&'a Field),
    FragmentSpread(&'a FragmentSpread),
    InlineFragment(&'a InlineFragment),
    Directive(&'a Directive),
    Argument(&'a Argument),
    Value(&'a Value),
    NamedType(&'a NamedType),
    ListType(&'a ListType),
    NonNullType(&'a NonNullType),
    SchemaDefinition(&'a SchemaDefinition),
    OperationTypeDefinition(&'a OperationTypeDefinition),
    ObjectTypeDefinition(&'a ObjectTypeDefinition),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition),
    UnionTypeDefinition(&'a UnionTypeDefinition),
    EnumTypeDefinition(&'a EnumTypeDefinition),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition),
    ScalarTypeDefinition(&'a ScalarTypeDefinition),
    TypeExtensionDefinition(&'a TypeExtensionDefinition),
    FieldDefinition(&'a FieldDefinition),
    InputValueDefinition(&'a InputValueDefinition),
    EnumValueDefinition(&'a EnumValueDefinition),
}

impl<'a> NodeRef<'a> {
    /// Wraps a type reference in the matching view variant.
    pub fn from_type(ty: &'a Type) -> Self {
        match ty {
            Type::Named(t) => NodeRef::NamedType(t),
            Type::List(t) => NodeRef::ListType(t),
            Type::NonNull(t) => NodeRef::NonNullType(t),
        }
    }

    /// Wraps a type definition in the matching view variant.
    pub fn from_type_definition(definition: &'a TypeDefinition) -> Self {
        match definition {
            TypeDefinition::Object(d) => NodeRef::ObjectTypeDefinition(d),
            TypeDefinition::Interface(d) => NodeRef::InterfaceTypeDefinition(d),
            TypeDefinition::Union(d) => NodeRef::UnionTypeDefinition(d),
            TypeDefinition::Enum(d) => NodeRef::EnumTypeDefinition(d),
            TypeDefinition::InputObject(d) => NodeRef::InputObjectTypeDefinition(d),
            TypeDefinition::Scalar(d) => NodeRef::ScalarTypeDefinition(d),
        }
    }

    /// Wraps a selection in the matching view variant.
    pub fn from_selection(selection: &'a Selection) -> Self {
        match selection {
            Selection::Field(s) => NodeRef::Field(s),
            Selection::FragmentSpread(s) => NodeRef::FragmentSpread(s),
            Selection::InlineFragment(s) => NodeRef::InlineFragment(s),
        }
    }

    /// Returns the node's source span.
    pub fn span(&self) -> &Span {
        match self {
            NodeRef::Document(n) => &n.span,
            NodeRef::OperationDefinition(n) => &n.span,
            NodeRef::FragmentDefinition(n) => &n.span,
            NodeRef::Field(n) => &n.span,
            NodeRef::FragmentSpread(n) => &n.span,
            NodeRef::InlineFragment(n) => &n.span,
            NodeRef::Directive(n) => &n.span,
            NodeRef::Argument(n) => &n.span,
            NodeRef::Value(n) => &n.span,
            NodeRef::NamedType(n) => &n.span,
            NodeRef::ListType(n) => &n.span,
            NodeRef::NonNullType(n) => &n.span,
            NodeRef::SchemaDefinition(n) => &n.span,
            NodeRef::OperationTypeDefinition(n) => &n.span,
            NodeRef::ObjectTypeDefinition(n) => &n.span,
            NodeRef::InterfaceTypeDefinition(n) => &n.span,
            NodeRef::UnionTypeDefinition(n) => &n.span,
            NodeRef::EnumTypeDefinition(n) => &n.span,
            NodeRef::InputObjectTypeDefinition(n) => &n.span,
            NodeRef::ScalarTypeDefinition(n) => &n.span,
            NodeRef::TypeExtensionDefinition(n) => &n.span,
            NodeRef::FieldDefinition(n) => &n.span,
            NodeRef::InputValueDefinition(n) => &n.span,
            NodeRef::EnumValueDefinition(n) => &n.span,
        }
    }

    /// Returns the node's direct children in document order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut children = Vec::new();
        match self {
            NodeRef::Document(n) => {
                for definition in &n.definitions {
                    children.push(match definition {
                        Definition::Operation(d) => NodeRef::OperationDefinition(d),
                        Definition::Fragment(d) => NodeRef::FragmentDefinition(d),
                        Definition::TypeSystem(TypeSystemDefinition::Schema(d)) => {
                            NodeRef::SchemaDefinition(d)
                        }
                        Definition::TypeSystem(TypeSystemDefinition::Type(d)) => {
                            NodeRef::from_type_definition(d)
                        }
                        Definition::TypeSystem(TypeSystemDefinition::TypeExtension(d)) => {
                            NodeRef::TypeExtensionDefinition(d)
                        }
                    });
                }
            }
            NodeRef::OperationDefinition(n) => {
                push_directives(&mut children, &n.directives);
                push_selections(&mut children, &n.selections);
            }
            NodeRef::FragmentDefinition(n) => {
                children.push(NodeRef::NamedType(&n.type_condition));
                push_directives(&mut children, &n.directives);
                push_selections(&mut children, &n.selections);
            }
            NodeRef::Field(n) => {
                for argument in &n.arguments {
                    children.push(NodeRef::Argument(argument));
                }
                push_directives(&mut children, &n.directives);
                push_selections(&mut children, &n.selections);
            }
            NodeRef::FragmentSpread(n) => {
                push_directives(&mut children, &n.directives);
            }
            NodeRef::InlineFragment(n) => {
                if let Some(condition) = &n.type_condition {
                    children.push(NodeRef::NamedType(condition));
                }
                push_directives(&mut children, &n.directives);
                push_selections(&mut children, &n.selections);
            }
            NodeRef::Directive(n) => {
                for argument in &n.arguments {
                    children.push(NodeRef::Argument(argument));
                }
            }
            NodeRef::Argument(n) => {
                children.push(NodeRef::Value(&n.value));
            }
            NodeRef::Value(n) => match &n.kind {
                ValueKind::List(items) => {
                    for item in items {
                        children.push(NodeRef::Value(item));
                    }
                }
                ValueKind::Object(fields) => {
                    for field in fields {
                        children.push(NodeRef::Value(&field.value));
                    }
                }
                _ => {}
            },
            NodeRef::NamedType(_) => {}
            NodeRef::ListType(n) => children.push(NodeRef::from_type(&n.wrapped)),
            NodeRef::NonNullType(n) => children.push(NodeRef::from_type(&n.wrapped)),
            NodeRef::SchemaDefinition(n) => {
                push_directives(&mut children, &n.directives);
                for operation_type in &n.operation_types {
                    children.push(NodeRef::OperationTypeDefinition(operation_type));
                }
            }
            NodeRef::OperationTypeDefinition(n) => {
                children.push(NodeRef::from_type(&n.operation_type));
            }
            NodeRef::ObjectTypeDefinition(n) => {
                push_types(&mut children, &n.implements);
                push_directives(&mut children, &n.directives);
                push_fields(&mut children, &n.fields);
            }
            NodeRef::InterfaceTypeDefinition(n) => {
                push_directives(&mut children, &n.directives);
                push_fields(&mut children, &n.fields);
            }
            NodeRef::UnionTypeDefinition(n) => {
                push_directives(&mut children, &n.directives);
                push_types(&mut children, &n.members);
            }
            NodeRef::EnumTypeDefinition(n) => {
                push_directives(&mut children, &n.directives);
                for value in &n.values {
                    children.push(NodeRef::EnumValueDefinition(value));
                }
            }
            NodeRef::InputObjectTypeDefinition(n) => {
                push_directives(&mut children, &n.directives);
                for field in &n.fields {
                    children.push(NodeRef::InputValueDefinition(field));
                }
            }
            NodeRef::ScalarTypeDefinition(n) => {
                push_directives(&mut children, &n.directives);
            }
            NodeRef::TypeExtensionDefinition(n) => {
                push_types(&mut children, &n.implements);
                push_directives(&mut children, &n.directives);
                push_fields(&mut children, &n.fields);
            }
            NodeRef::FieldDefinition(n) => {
                for argument in &n.arguments {
                    children.push(NodeRef::InputValueDefinition(argument));
                }
                children.push(NodeRef::from_type(&n.field_type));
                push_directives(&mut children, &n.directives);
            }
            NodeRef::InputValueDefinition(n) => {
                children.push(NodeRef::from_type(&n.value_type));
                if let Some(default) = &n.default_value {
                    children.push(NodeRef::Value(default));
                }
                push_directives(&mut children, &n.directives);
            }
            NodeRef::EnumValueDefinition(n) => {
                push_directives(&mut children, &n.directives);
            }
        }
        children
    }
}

fn push_directives<'a>(children: &mut Vec<NodeRef<'a>>, directives: &'a [Directive]) {
    for directive in directives {
        children.push(NodeRef::Directive(directive));
    }
}

fn push_selections<'a>(children: &mut Vec<NodeRef<'a>>, selections: &'a [Selection]) {
    for selection in selections {
        children.push(NodeRef::from_selection(selection));
    }
}

fn push_types<'a>(children: &mut Vec<NodeRef<'a>>, types: &'a [Type]) {
    for ty in types {
        children.push(NodeRef::from_type(ty));
    }
}

fn push_fields<'a>(children: &mut Vec<NodeRef<'a>>, fields: &'a [FieldDefinition]) {
    for field in fields {
        children.push(NodeRef::FieldDefinition(field));
    }
}
