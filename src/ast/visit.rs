//! Visitor dispatch and depth-first traversal.
//!
//! The dispatch contract gives every node kind exactly one visit operation,
//! with category-level fallbacks so a validator overrides only the kinds its
//! rule cares about:
//!
//! - value kinds fall back to [`NodeVisitor::visit_value`]
//! - `Field` / `FragmentSpread` / `InlineFragment` fall back to
//!   [`NodeVisitor::visit_selection`]
//! - type references fall back to [`NodeVisitor::visit_type`]
//! - type-system definitions fall back to
//!   [`NodeVisitor::visit_type_definition`], which falls back to
//!   [`NodeVisitor::visit_definition`]
//! - operation, fragment, and schema definitions fall back to
//!   [`NodeVisitor::visit_definition`]
//! - [`NodeVisitor::visit_node`] is the final fallback for everything and
//!   defaults to [`TraversalControl::Continue`]
//!
//! [`traverse`] drives a pre-order walk, checking the control signal after
//! every visit: `Quit` unwinds the whole walk immediately, `SkipSubtree`
//! suppresses descent into the current node's children only.

use crate::ast::document::{
    Argument, Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition,
};
use crate::ast::node::NodeRef;
use crate::ast::type_system::{
    EnumTypeDefinition, EnumValueDefinition, FieldDefinition, InputObjectTypeDefinition,
    InputValueDefinition, InterfaceTypeDefinition, ObjectTypeDefinition, OperationTypeDefinition,
    ScalarTypeDefinition, SchemaDefinition, TypeExtensionDefinition, UnionTypeDefinition,
};
use crate::ast::types::{ListType, NamedType, NonNullType};
use crate::ast::value::{Value, ValueKind};

/// Signal returned by every visit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalControl {
    /// Descend into the current node's children.
    Continue,
    /// Do not descend, but keep walking siblings and the rest of the tree.
    SkipSubtree,
    /// Terminate the entire traversal immediately.
    Quit,
}

/// Per-traversal state handed to every visit operation.
///
/// Owns caller-supplied seed data, a single result slot, and the ancestor
/// stack (root to parent) maintained by the driver. A context belongs to
/// exactly one traversal invocation; create a fresh one per walk.
#[derive(Debug)]
pub struct TraversalContext<'ast, S, R> {
    seed: S,
    result: Option<R>,
    ancestors: Vec<NodeRef<'ast>>,
}

impl<'ast, S, R> TraversalContext<'ast, S, R> {
    /// Creates a context seeded with caller data.
    pub fn new(seed: S) -> Self {
        Self {
            seed,
            result: None,
            ancestors: Vec::new(),
        }
    }

    /// Returns the seed data.
    pub fn seed(&self) -> &S {
        &self.seed
    }

    /// Returns the current result, if any visit has set one.
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Sets the result slot, replacing any previous value.
    pub fn set_result(&mut self, result: R) {
        self.result = Some(result);
    }

    /// Consumes the context, returning the result slot.
    pub fn into_result(self) -> Option<R> {
        self.result
    }

    /// Ancestors of the node currently being visited, root first.
    pub fn ancestors(&self) -> &[NodeRef<'ast>] {
        &self.ancestors
    }

    /// The immediate parent of the node currently being visited.
    pub fn parent(&self) -> Option<&NodeRef<'ast>> {
        self.ancestors.last()
    }
}

/// Shorthand for the context type a visitor's methods receive.
pub type VisitContext<'ast, V> =
    TraversalContext<'ast, <V as NodeVisitor<'ast>>::Seed, <V as NodeVisitor<'ast>>::Output>;

/// One visit operation per node kind, with category fallbacks.
///
/// Implementors override only the operations their rule needs; unoverridden
/// kinds inherit the category defaults documented in the module header.
pub trait NodeVisitor<'ast> {
    /// Read-only seed data carried by the traversal context.
    type Seed;
    /// Result value a visit may leave in the context.
    type Output;

    fn visit_document(
        &mut self,
        node: &'ast Document,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::Document(node), cx)
    }

    fn visit_operation_definition(
        &mut self,
        node: &'ast OperationDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_definition(NodeRef::OperationDefinition(node), cx)
    }

    fn visit_fragment_definition(
        &mut self,
        node: &'ast FragmentDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_definition(NodeRef::FragmentDefinition(node), cx)
    }

    fn visit_field(
        &mut self,
        node: &'ast Field,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_selection(NodeRef::Field(node), cx)
    }

    fn visit_fragment_spread(
        &mut self,
        node: &'ast FragmentSpread,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_selection(NodeRef::FragmentSpread(node), cx)
    }

    fn visit_inline_fragment(
        &mut self,
        node: &'ast InlineFragment,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_selection(NodeRef::InlineFragment(node), cx)
    }

    fn visit_directive(
        &mut self,
        node: &'ast Directive,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::Directive(node), cx)
    }

    fn visit_argument(
        &mut self,
        node: &'ast Argument,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::Argument(node), cx)
    }

    fn visit_int_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_float_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_string_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_boolean_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_null_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_enum_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_list_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_object_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_value(node, cx)
    }

    fn visit_named_type(
        &mut self,
        node: &'ast NamedType,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type(NodeRef::NamedType(node), cx)
    }

    fn visit_list_type(
        &mut self,
        node: &'ast ListType,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type(NodeRef::ListType(node), cx)
    }

    fn visit_non_null_type(
        &mut self,
        node: &'ast NonNullType,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type(NodeRef::NonNullType(node), cx)
    }

    fn visit_schema_definition(
        &mut self,
        node: &'ast SchemaDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_definition(NodeRef::SchemaDefinition(node), cx)
    }

    fn visit_operation_type_definition(
        &mut self,
        node: &'ast OperationTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::OperationTypeDefinition(node), cx)
    }

    fn visit_object_type_definition(
        &mut self,
        node: &'ast ObjectTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::ObjectTypeDefinition(node), cx)
    }

    fn visit_interface_type_definition(
        &mut self,
        node: &'ast InterfaceTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::InterfaceTypeDefinition(node), cx)
    }

    fn visit_union_type_definition(
        &mut self,
        node: &'ast UnionTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::UnionTypeDefinition(node), cx)
    }

    fn visit_enum_type_definition(
        &mut self,
        node: &'ast EnumTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::EnumTypeDefinition(node), cx)
    }

    fn visit_input_object_type_definition(
        &mut self,
        node: &'ast InputObjectTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::InputObjectTypeDefinition(node), cx)
    }

    fn visit_scalar_type_definition(
        &mut self,
        node: &'ast ScalarTypeDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::ScalarTypeDefinition(node), cx)
    }

    fn visit_type_extension_definition(
        &mut self,
        node: &'ast TypeExtensionDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_type_definition(NodeRef::TypeExtensionDefinition(node), cx)
    }

    fn visit_field_definition(
        &mut self,
        node: &'ast FieldDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::FieldDefinition(node), cx)
    }

    fn visit_input_value_definition(
        &mut self,
        node: &'ast InputValueDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::InputValueDefinition(node), cx)
    }

    fn visit_enum_value_definition(
        &mut self,
        node: &'ast EnumValueDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::EnumValueDefinition(node), cx)
    }

    /// Category fallback for all value kinds.
    fn visit_value(
        &mut self,
        node: &'ast Value,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(NodeRef::Value(node), cx)
    }

    /// Category fallback for field, fragment-spread, and inline-fragment
    /// selections.
    fn visit_selection(
        &mut self,
        node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(node, cx)
    }

    /// Category fallback for type references.
    fn visit_type(
        &mut self,
        node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(node, cx)
    }

    /// Category fallback for type-system definitions; falls back to
    /// [`NodeVisitor::visit_definition`].
    fn visit_type_definition(
        &mut self,
        node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_definition(node, cx)
    }

    /// Category fallback for definitions of any kind.
    fn visit_definition(
        &mut self,
        node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        self.visit_node(node, cx)
    }

    /// Final fallback for every node kind.
    fn visit_node(
        &mut self,
        node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        let _ = (node, cx);
        TraversalControl::Continue
    }
}

/// Invokes the visit operation matching the node's kind.
pub fn dispatch<'ast, V>(
    visitor: &mut V,
    node: NodeRef<'ast>,
    cx: &mut VisitContext<'ast, V>,
) -> TraversalControl
where
    V: NodeVisitor<'ast>,
{
    match node {
        NodeRef::Document(n) => visitor.visit_document(n, cx),
        NodeRef::OperationDefinition(n) => visitor.visit_operation_definition(n, cx),
        NodeRef::FragmentDefinition(n) => visitor.visit_fragment_definition(n, cx),
        NodeRef::Field(n) => visitor.visit_field(n, cx),
        NodeRef::FragmentSpread(n) => visitor.visit_fragment_spread(n, cx),
        NodeRef::InlineFragment(n) => visitor.visit_inline_fragment(n, cx),
        NodeRef::Directive(n) => visitor.visit_directive(n, cx),
        NodeRef::Argument(n) => visitor.visit_argument(n, cx),
        NodeRef::Value(n) => match &n.kind {
            ValueKind::Int(_) => visitor.visit_int_value(n, cx),
            ValueKind::Float(_) => visitor.visit_float_value(n, cx),
            ValueKind::String(_) => visitor.visit_string_value(n, cx),
            ValueKind::Boolean(_) => visitor.visit_boolean_value(n, cx),
            ValueKind::Null => visitor.visit_null_value(n, cx),
            ValueKind::Enum(_) => visitor.visit_enum_value(n, cx),
            ValueKind::List(_) => visitor.visit_list_value(n, cx),
            ValueKind::Object(_) => visitor.visit_object_value(n, cx),
        },
        NodeRef::NamedType(n) => visitor.visit_named_type(n, cx),
        NodeRef::ListType(n) => visitor.visit_list_type(n, cx),
        NodeRef::NonNullType(n) => visitor.visit_non_null_type(n, cx),
        NodeRef::SchemaDefinition(n) => visitor.visit_schema_definition(n, cx),
        NodeRef::OperationTypeDefinition(n) => visitor.visit_operation_type_definition(n, cx),
        NodeRef::ObjectTypeDefinition(n) => visitor.visit_object_type_definition(n, cx),
        NodeRef::InterfaceTypeDefinition(n) => visitor.visit_interface_type_definition(n, cx),
        NodeRef::UnionTypeDefinition(n) => visitor.visit_union_type_definition(n, cx),
        NodeRef::EnumTypeDefinition(n) => visitor.visit_enum_type_definition(n, cx),
        NodeRef::InputObjectTypeDefinition(n) => {
            visitor.visit_input_object_type_definition(n, cx)
        }
        NodeRef::ScalarTypeDefinition(n) => visitor.visit_scalar_type_definition(n, cx),
        NodeRef::TypeExtensionDefinition(n) => visitor.visit_type_extension_definition(n, cx),
        NodeRef::FieldDefinition(n) => visitor.visit_field_definition(n, cx),
        NodeRef::InputValueDefinition(n) => visitor.visit_input_value_definition(n, cx),
        NodeRef::EnumValueDefinition(n) => visitor.visit_enum_value_definition(n, cx),
    }
}

/// Walks `root` and its descendants depth-first, pre-order.
///
/// Returns [`TraversalControl::Quit`] if a visit terminated the walk, else
/// [`TraversalControl::Continue`]. The context's ancestor stack is pushed
/// and popped around each descent, so a visit always sees the chain from
/// the root down to its own parent.
pub fn traverse<'ast, V>(
    visitor: &mut V,
    root: NodeRef<'ast>,
    cx: &mut VisitContext<'ast, V>,
) -> TraversalControl
where
    V: NodeVisitor<'ast>,
{
    match dispatch(visitor, root, cx) {
        TraversalControl::Quit => return TraversalControl::Quit,
        TraversalControl::SkipSubtree => return TraversalControl::Continue,
        TraversalControl::Continue => {}
    }
    cx.ancestors.push(root);
    for child in root.children() {
        if let TraversalControl::Quit = traverse(visitor, child, cx) {
            cx.ancestors.pop();
            return TraversalControl::Quit;
        }
    }
    cx.ancestors.pop();
    TraversalControl::Continue
}
