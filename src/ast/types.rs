//! Type references: named types and their list / non-null wrappers.
//!
//! A type reference is the syntactic form appearing after a colon in field,
//! argument, and operation-type positions (`String`, `[String]`, `String!`).
//! Wrappers nest arbitrarily; the innermost node is always a [`NamedType`],
//! which is the join key into the type registry.

use smol_str::SmolStr;

use crate::ast::Span;

/// A type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

/// A bare type name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: SmolStr,
    pub span: Span,
}

/// A list wrapper (`[T]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ListType {
    pub wrapped: Box<Type>,
    pub span: Span,
}

/// A non-null wrapper (`T!`).
#[derive(Debug, Clone, PartialEq)]
pub struct NonNullType {
    pub wrapped: Box<Type>,
    pub span: Span,
}

impl Type {
    /// Creates a named type reference.
    pub fn named(name: impl Into<SmolStr>, span: Span) -> Self {
        Type::Named(NamedType {
            name: name.into(),
            span,
        })
    }

    /// Wraps a type in a list.
    pub fn list(wrapped: Type, span: Span) -> Self {
        Type::List(ListType {
            wrapped: Box::new(wrapped),
            span,
        })
    }

    /// Wraps a type in a non-null marker.
    pub fn non_null(wrapped: Type, span: Span) -> Self {
        Type::NonNull(NonNullType {
            wrapped: Box::new(wrapped),
            span,
        })
    }

    /// Returns the span of this type reference.
    pub fn span(&self) -> &Span {
        match self {
            Type::Named(t) => &t.span,
            Type::List(t) => &t.span,
            Type::NonNull(t) => &t.span,
        }
    }

    /// Unwraps all list / non-null wrappers down to the named type.
    pub fn base(&self) -> &NamedType {
        match self {
            Type::Named(t) => t,
            Type::List(t) => t.wrapped.base(),
            Type::NonNull(t) => t.wrapped.base(),
        }
    }

    /// Returns the innermost type name.
    pub fn base_name(&self) -> &str {
        &self.base().name
    }
}
