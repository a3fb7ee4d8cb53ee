//! Directive declarations and the placement rule.
//!
//! A schema declares each directive with the set of locations where usages
//! are allowed, plus legacy compatibility flags predating the location-set
//! mechanism. The [`KnownDirectives`] rule checks a single usage against
//! its nearest syntactic ancestor; [`check_document_directives`] runs the
//! rule over every usage in a document.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::document::{
    Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationKind,
};
use crate::ast::node::NodeRef;
use crate::ast::visit::{NodeVisitor, TraversalContext, TraversalControl, VisitContext, traverse};
use crate::validation::diag::{ValidationError, ValidationErrorCollector};

/// A site kind where a directive usage may be permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
}

impl DirectiveLocation {
    /// Returns the location's canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
        }
    }
}

/// A directive declaration known to the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub name: SmolStr,
    /// Locations where usages are valid.
    pub locations: Vec<DirectiveLocation>,
    /// Legacy flag: usable on any operation.
    pub on_operation: bool,
    /// Legacy flag: usable on any fragment site.
    pub on_fragment: bool,
    /// Legacy flag: usable on any field.
    pub on_field: bool,
}

impl DirectiveDefinition {
    /// Creates a declaration with no valid locations and no legacy flags.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            locations: Vec::new(),
            on_operation: false,
            on_fragment: false,
            on_field: false,
        }
    }

    /// Adds a valid location.
    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// True if the location is in the declared valid set.
    pub fn has_location(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

/// The directive declarations of a schema, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct DirectiveRegistry {
    directives: IndexMap<SmolStr, DirectiveDefinition>,
}

impl DirectiveRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the standard declarations.
    ///
    /// `skip` and `include` are valid on fields and both fragment spread
    /// kinds. `deprecated` is declared too, but belongs in schema text, so
    /// it carries no executable location.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for name in ["skip", "include"] {
            registry.add(
                DirectiveDefinition::new(name)
                    .with_location(DirectiveLocation::Field)
                    .with_location(DirectiveLocation::FragmentSpread)
                    .with_location(DirectiveLocation::InlineFragment),
            );
        }
        registry.add(DirectiveDefinition::new("deprecated"));
        registry
    }

    /// Registers a declaration, replacing any previous one of that name.
    pub fn add(&mut self, definition: DirectiveDefinition) {
        self.directives.insert(definition.name.clone(), definition);
    }

    /// Looks up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }
}

/// The fixed legacy-compatibility table, keyed by location.
///
/// Only usage-site locations have a legacy mapping. Calling this with any
/// other location is a contract violation inside the validator, not a
/// user-facing validation failure, and fails loudly.
fn legacy_permits(location: DirectiveLocation, declaration: &DirectiveDefinition) -> bool {
    match location {
        DirectiveLocation::Field => declaration.on_field,

        DirectiveLocation::FragmentSpread
        | DirectiveLocation::FragmentDefinition
        | DirectiveLocation::InlineFragment => declaration.on_fragment,

        DirectiveLocation::Query | DirectiveLocation::Mutation => declaration.on_operation,

        other => panic!(
            "legacy directive compatibility has no mapping for location {}",
            other.name()
        ),
    }
}

/// Visitor resolving whether the visited node is a valid directive site.
///
/// Seeded with the directive declaration; leaves `true` in the result slot
/// when the location is invalid, and quits after the first node either way.
struct LocationVisitor;

fn resolve_and_quit(
    cx: &mut TraversalContext<'_, DirectiveDefinition, bool>,
    location: DirectiveLocation,
) -> TraversalControl {
    let declaration = cx.seed();
    let invalid = !(declaration.has_location(location) || legacy_permits(location, declaration));
    cx.set_result(invalid);
    TraversalControl::Quit
}

impl<'ast> NodeVisitor<'ast> for LocationVisitor {
    type Seed = DirectiveDefinition;
    type Output = bool;

    fn visit_operation_definition(
        &mut self,
        node: &'ast OperationDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        let location = match node.operation {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
        };
        resolve_and_quit(cx, location)
    }

    fn visit_field(
        &mut self,
        _node: &'ast Field,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        resolve_and_quit(cx, DirectiveLocation::Field)
    }

    fn visit_fragment_spread(
        &mut self,
        _node: &'ast FragmentSpread,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        resolve_and_quit(cx, DirectiveLocation::FragmentSpread)
    }

    fn visit_fragment_definition(
        &mut self,
        _node: &'ast FragmentDefinition,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        resolve_and_quit(cx, DirectiveLocation::FragmentDefinition)
    }

    fn visit_inline_fragment(
        &mut self,
        _node: &'ast InlineFragment,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        resolve_and_quit(cx, DirectiveLocation::InlineFragment)
    }

    fn visit_node(
        &mut self,
        _node: NodeRef<'ast>,
        cx: &mut VisitContext<'ast, Self>,
    ) -> TraversalControl {
        // Any other ancestor kind is never a directive site.
        cx.set_result(true);
        TraversalControl::Quit
    }
}

/// The directive placement rule.
///
/// Checks one usage at a time against its syntactic ancestor chain; only
/// the nearest ancestor decides. An unknown directive name takes priority
/// over location checking, which is then never attempted.
pub struct KnownDirectives<'s> {
    directives: &'s DirectiveRegistry,
}

impl<'s> KnownDirectives<'s> {
    /// Creates the rule over a schema's directive declarations.
    pub fn new(directives: &'s DirectiveRegistry) -> Self {
        Self { directives }
    }

    /// Checks one usage, appending at most one error to the collector.
    pub fn check_directive(
        &self,
        directive: &Directive,
        ancestors: &[NodeRef<'_>],
        collector: &mut ValidationErrorCollector,
    ) {
        let Some(declaration) = self.directives.get(&directive.name) else {
            collector.add(ValidationError::unknown_directive(
                &directive.name,
                directive.span.clone(),
            ));
            return;
        };

        // A usage without any ancestor has no site to be valid at.
        let invalid = match ancestors.last() {
            Some(ancestor) => has_invalid_location(declaration, *ancestor),
            None => true,
        };

        if invalid {
            collector.add(ValidationError::misplaced_directive(
                &directive.name,
                directive.span.clone(),
            ));
        }
    }
}

/// Walks from the nearest ancestor, which immediately resolves and quits.
fn has_invalid_location(declaration: &DirectiveDefinition, ancestor: NodeRef<'_>) -> bool {
    let mut cx = TraversalContext::new(declaration.clone());
    traverse(&mut LocationVisitor, ancestor, &mut cx);
    cx.into_result().unwrap_or(true)
}

/// Checks every directive usage in a document.
///
/// Walks the document with the traversal engine, handing the rule each
/// `Directive` node together with the engine's ancestor stack, and returns
/// the collected errors.
pub fn check_document_directives(
    document: &Document,
    directives: &DirectiveRegistry,
) -> Vec<ValidationError> {
    log::debug!(
        "checking directive placement over document with {} definitions",
        document.definitions.len()
    );

    struct DirectiveScan<'s> {
        rule: KnownDirectives<'s>,
        collector: ValidationErrorCollector,
    }

    impl<'ast> NodeVisitor<'ast> for DirectiveScan<'_> {
        type Seed = ();
        type Output = ();

        fn visit_directive(
            &mut self,
            node: &'ast Directive,
            cx: &mut VisitContext<'ast, Self>,
        ) -> TraversalControl {
            self.rule
                .check_directive(node, cx.ancestors(), &mut self.collector);
            TraversalControl::Continue
        }
    }

    let mut scan = DirectiveScan {
        rule: KnownDirectives::new(directives),
        collector: ValidationErrorCollector::new(),
    };
    let mut cx = TraversalContext::new(());
    traverse(&mut scan, NodeRef::Document(document), &mut cx);
    scan.collector.into_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::diag::ValidationErrorKind;

    fn field_node() -> Field {
        Field {
            alias: None,
            name: "hero".into(),
            arguments: vec![],
            directives: vec![],
            selections: vec![],
            span: 0..4,
        }
    }

    #[test]
    fn declared_location_is_valid() {
        let declaration =
            DirectiveDefinition::new("skip").with_location(DirectiveLocation::Field);
        let field = field_node();
        assert!(!has_invalid_location(&declaration, NodeRef::Field(&field)));
    }

    #[test]
    fn legacy_flag_rescues_undeclared_location() {
        let mut declaration = DirectiveDefinition::new("old");
        let field = field_node();
        assert!(has_invalid_location(&declaration, NodeRef::Field(&field)));
        declaration.on_field = true;
        assert!(!has_invalid_location(&declaration, NodeRef::Field(&field)));
    }

    #[test]
    fn operation_kind_picks_query_or_mutation() {
        let query_only =
            DirectiveDefinition::new("auth").with_location(DirectiveLocation::Query);
        let operation = |operation| OperationDefinition {
            operation,
            name: None,
            directives: vec![],
            selections: vec![],
            span: 0..0,
        };
        let query = operation(OperationKind::Query);
        let mutation = operation(OperationKind::Mutation);
        assert!(!has_invalid_location(
            &query_only,
            NodeRef::OperationDefinition(&query)
        ));
        assert!(has_invalid_location(
            &query_only,
            NodeRef::OperationDefinition(&mutation)
        ));
    }

    #[test]
    fn non_site_ancestor_is_always_invalid() {
        let declaration = DirectiveDefinition::new("skip")
            .with_location(DirectiveLocation::Field)
            .with_location(DirectiveLocation::Query);
        let document = Document {
            definitions: vec![],
            span: 0..0,
        };
        assert!(has_invalid_location(
            &declaration,
            NodeRef::Document(&document)
        ));
    }

    #[test]
    #[should_panic(expected = "no mapping for location SUBSCRIPTION")]
    fn legacy_table_rejects_non_site_locations() {
        let declaration = DirectiveDefinition::new("odd");
        legacy_permits(DirectiveLocation::Subscription, &declaration);
    }

    #[test]
    fn unknown_directive_wins_over_location() {
        let registry = DirectiveRegistry::standard();
        let rule = KnownDirectives::new(&registry);
        let usage = Directive::new("upper", 7..13);
        let field = field_node();
        let ancestors = [NodeRef::Field(&field)];
        let mut collector = ValidationErrorCollector::new();
        rule.check_directive(&usage, &ancestors, &mut collector);
        let errors = collector.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ValidationErrorKind::UnknownDirective);
    }

    #[test]
    fn known_directive_at_declared_site_passes() {
        let registry = DirectiveRegistry::standard();
        let rule = KnownDirectives::new(&registry);
        let usage = Directive::new("skip", 7..12);
        let field = field_node();
        let ancestors = [NodeRef::Field(&field)];
        let mut collector = ValidationErrorCollector::new();
        rule.check_directive(&usage, &ancestors, &mut collector);
        assert!(collector.is_empty());
    }
}
