//! AST nodes for executable GraphQL documents.
//!
//! A [`Document`] is the root of everything the parser produces: executable
//! operations and fragments alongside type-system definitions. All nodes own
//! their children outright; the tree carries no back-references.

use smol_str::SmolStr;

use crate::ast::Span;
use crate::ast::type_system::TypeSystemDefinition;
use crate::ast::types::NamedType;
use crate::ast::value::Value;

/// Root AST node for a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: Span,
}

/// Top-level definition in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Executable operation (query or mutation).
    Operation(OperationDefinition),
    /// Named fragment definition.
    Fragment(FragmentDefinition),
    /// Schema, type, or type-extension definition.
    TypeSystem(TypeSystemDefinition),
}

/// The kind of an executable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// An executable operation definition.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationKind,
    /// Anonymous operations carry no name.
    pub name: Option<SmolStr>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// A single entry in a selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A field selection, possibly with its own nested selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<SmolStr>,
    pub name: SmolStr,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// A named fragment spread (`...FragmentName`).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    pub name: SmolStr,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// An inline fragment (`... on Type { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// A named fragment definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub name: SmolStr,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// A directive usage site (`@name(args)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: SmolStr,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

impl Directive {
    /// Creates a directive usage with no arguments.
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            span,
        }
    }

    /// Appends an argument.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// A named argument paired with its literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: SmolStr,
    pub value: Value,
    pub span: Span,
}

impl Argument {
    /// Creates an argument.
    pub fn new(name: impl Into<SmolStr>, value: Value, span: Span) -> Self {
        Self {
            name: name.into(),
            value,
            span,
        }
    }
}
