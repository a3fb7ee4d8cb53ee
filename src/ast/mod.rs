//! AST node model, borrowed node views, and traversal infrastructure.
//!
//! The node hierarchy is closed: every kind a document can contain is
//! defined here, and [`node::NodeRef`] gives each one a uniform borrowed
//! view with generic child access. [`visit`] builds the visitor dispatch
//! contract and the depth-first traversal engine on top of that view.

pub mod document;
pub mod node;
pub mod print;
pub mod type_system;
pub mod types;
pub mod value;
pub mod visit;

use std::ops::Range;

/// A span representing a range in source text.
/// This is the canonical span type used throughout the crate.
pub type Span = Range<usize>;

// Re-export the node types.
pub use document::{
    Argument, Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread,
    InlineFragment, OperationDefinition, OperationKind, Selection,
};
pub use node::NodeRef;
pub use print::print_input_value;
pub use type_system::{
    EnumTypeDefinition, EnumValueDefinition, FieldDefinition, InputObjectTypeDefinition,
    InputValueDefinition, InterfaceTypeDefinition, ObjectTypeDefinition, OperationTypeDefinition,
    ScalarTypeDefinition, SchemaDefinition, TypeDefinition, TypeExtensionDefinition,
    TypeSystemDefinition, UnionTypeDefinition,
};
pub use types::{ListType, NamedType, NonNullType, Type};
pub use value::{ObjectField, Value, ValueKind};
pub use visit::{NodeVisitor, TraversalContext, TraversalControl, VisitContext, traverse};
