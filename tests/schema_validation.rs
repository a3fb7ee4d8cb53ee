//! Schema consistency validator tests
//!
//! Each check of the battery gets its own section, plus end-to-end cases
//! covering how independent checks compose over a broken registry.

mod common;

use std::sync::Arc;

use common::*;
use graphql_sema::ast::{Argument, Directive, Type, Value};
use graphql_sema::validation::{
    CoercionError, RuntimeWiring, ScalarCoercer, ScalarWiringEnvironment, SchemaValidator,
    TypeRegistry, TypeResolver, TypeResolverEnvironment, ValidationErrorKind, WiringFactory,
};
use smol_str::SmolStr;

struct PassThroughCoercer;

impl ScalarCoercer for PassThroughCoercer {
    fn coerce_literal(&self, literal: &Value) -> Result<Value, CoercionError> {
        Ok(literal.clone())
    }
}

struct FirstObjectResolver;

impl TypeResolver for FirstObjectResolver {
    fn resolve_type(&self, type_hint: &str) -> Option<SmolStr> {
        Some(type_hint.into())
    }
}

/// A factory claiming to provide everything dynamically.
struct ProvideAllFactory;

impl WiringFactory for ProvideAllFactory {
    fn provides_scalar(&self, _environment: &ScalarWiringEnvironment<'_>) -> bool {
        true
    }

    fn provides_type_resolver(&self, _environment: &TypeResolverEnvironment<'_>) -> bool {
        true
    }
}

// ============================================================================
// A fully consistent registry
// ============================================================================

#[test]
fn consistent_registry_has_no_errors() {
    let mut registry = registry_of(vec![
        interface("Character", vec![field("name", named("String"))]),
        object_implementing(
            "Droid",
            vec![named("Character")],
            vec![
                field("name", named("String")),
                field("primaryFunction", named("String")),
            ],
        ),
        object(
            "Query",
            vec![field("hero", named("Character")), field("url", named("Url"))],
        ),
        scalar("Url"),
        union_of("SearchResult", vec![named("Droid"), named("Query")]),
    ]);
    registry.set_schema_definition(schema_definition(vec![("query", "Query")]));

    let wiring = RuntimeWiring::builder()
        .with_scalar("Url", Arc::new(PassThroughCoercer))
        .with_type_resolver("Character", Arc::new(FirstObjectResolver))
        .with_type_resolver("SearchResult", Arc::new(FirstObjectResolver))
        .build();

    let errors = SchemaValidator::new(&registry, &wiring).validate();
    assert!(errors.is_empty(), "unexpected errors:\n{}", format_errors(&errors));
}

#[test]
fn validator_is_idempotent_over_a_broken_registry() {
    let registry = registry_of(vec![
        object("Thing", vec![field("a", named("Missing")), field("a", named("Missing"))]),
        union_of("U", vec![named("AlsoMissing")]),
    ]);
    let first = validate(&registry);
    let second = validate(&registry);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

// ============================================================================
// Check 1: referential completeness
// ============================================================================

#[test]
fn missing_field_type_is_reported_per_occurrence() {
    let registry = registry_of(vec![
        object("Query", vec![field("a", named("Ghost")), field("b", named("Ghost"))]),
    ]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::MissingType), 2);
    assert!(errors[0].message().contains("'Ghost'"));
    assert!(errors[0].message().contains("'Query'"));
}

#[test]
fn missing_argument_type_is_reported() {
    let mut hero = field("hero", named("String"));
    hero.arguments.push(argument("episode", named("Episode")));
    let registry = registry_of(vec![object("Query", vec![hero])]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::MissingType), 1);
    assert!(errors[0].message().contains("field input"));
}

#[test]
fn missing_union_member_and_input_field_types_are_reported() {
    let registry = registry_of(vec![
        object("Query", vec![field("ok", named("String"))]),
        union_of("Pick", vec![named("Query"), named("Gone")]),
        input_object("Filter", vec![argument("where", named("AlsoGone"))]),
    ]);
    let errors = validate(&registry);
    let missing: Vec<_> = errors
        .iter()
        .filter(|error| error.kind() == ValidationErrorKind::MissingType)
        .collect();
    assert_eq!(missing.len(), 2);
    assert!(missing[0].message().contains("union member"));
    assert!(missing[1].message().contains("input value"));
}

#[test]
fn implements_reference_must_be_a_defined_interface() {
    let registry = registry_of(vec![
        object_implementing("A", vec![named("Ghost")], vec![field("x", named("String"))]),
        object_implementing("B", vec![named("NotAnInterface")], vec![]),
        object("NotAnInterface", vec![]),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingInterfaceType),
        2
    );
}

#[test]
fn wrapped_references_resolve_through_their_base_name() {
    let registry = registry_of(vec![
        object(
            "Query",
            vec![field("names", Type::list(non_null("String"), 0..0))],
        ),
    ]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::MissingType), 0);
}

// ============================================================================
// Checks 2 and 3: type extensions
// ============================================================================

#[test]
fn extension_without_base_object_is_reported() {
    let mut registry = registry_of(vec![interface("Iface", vec![])]);
    registry.add_type_extension(extension("Ghost", vec![field("x", named("Iface"))]));
    registry.add_type_extension(extension("Iface", vec![]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionMissingBaseType),
        2
    );
}

#[test]
fn extension_groups_report_once_per_name() {
    let mut registry = TypeRegistry::new();
    registry.add_type_extension(extension("Ghost", vec![]));
    registry.add_type_extension(extension("Ghost", vec![]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionMissingBaseType),
        1
    );
}

#[test]
fn extension_field_matching_base_type_is_fine() {
    let mut registry = registry_of(vec![object("Query", vec![field("a", named("String"))])]);
    registry.add_type_extension(extension("Query", vec![field("a", named("String"))]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionFieldRedefinition),
        0
    );
}

#[test]
fn extension_field_changing_base_type_is_reported() {
    let mut registry = registry_of(vec![object("Query", vec![field("a", named("String"))])]);
    registry.add_type_extension(extension("Query", vec![field("a", non_null("String"))]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionFieldRedefinition),
        1
    );
}

#[test]
fn sibling_extensions_conflict_in_both_directions() {
    let mut registry = registry_of(vec![object("Query", vec![])]);
    registry.add_type_extension(extension("Query", vec![field("extra", named("String"))]));
    registry.add_type_extension(extension("Query", vec![field("extra", named("Int"))]));
    let errors = validate(&registry);
    // Each extension is reported against the other.
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionFieldRedefinition),
        2
    );
}

#[test]
fn sibling_extensions_agreeing_on_a_new_field_are_fine() {
    let mut registry = registry_of(vec![object("Query", vec![])]);
    registry.add_type_extension(extension("Query", vec![field("extra", named("String"))]));
    registry.add_type_extension(extension("Query", vec![field("extra", named("String"))]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::TypeExtensionFieldRedefinition),
        0
    );
}

// ============================================================================
// Check 4: interface conformance
// ============================================================================

fn conformance_errors(
    interface_field_type: Type,
    object_field_type: Type,
) -> Vec<graphql_sema::validation::ValidationError> {
    let registry = registry_of(vec![
        interface("Named", vec![field("name", interface_field_type)]),
        object_implementing(
            "Droid",
            vec![named("Named")],
            vec![field("name", object_field_type)],
        ),
    ]);
    validate(&registry)
}

#[test]
fn matching_printed_types_conform() {
    let errors = conformance_errors(named("String"), named("String"));
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::InterfaceFieldRedefinition),
        0
    );
}

#[test]
fn nullability_mismatch_is_a_redefinition_either_way() {
    let stricter = conformance_errors(named("String"), non_null("String"));
    assert_eq!(
        count_kind(&stricter, ValidationErrorKind::InterfaceFieldRedefinition),
        1
    );
    let looser = conformance_errors(non_null("String"), named("String"));
    assert_eq!(
        count_kind(&looser, ValidationErrorKind::InterfaceFieldRedefinition),
        1
    );
}

#[test]
fn implementor_missing_an_interface_field_is_reported() {
    let registry = registry_of(vec![
        interface("Named", vec![field("name", named("String"))]),
        object_implementing("Droid", vec![named("Named")], vec![field("id", named("String"))]),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingInterfaceField),
        1
    );
    assert!(errors
        .iter()
        .any(|error| error.message().contains("'name'") && error.message().contains("'Named'")));
}

#[test]
fn argument_count_mismatch_is_reported() {
    let mut interface_field = field("name", named("String"));
    interface_field.arguments.push(argument("upper", named("Boolean")));
    let registry = registry_of(vec![
        interface("Named", vec![interface_field]),
        object_implementing(
            "Droid",
            vec![named("Named")],
            vec![field("name", named("String"))],
        ),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingInterfaceFieldArguments),
        1
    );
}

#[test]
fn arguments_are_compared_positionally_by_printed_form() {
    let mut interface_field = field("name", named("String"));
    interface_field.arguments.push(argument("upper", named("Boolean")));
    let mut object_field = field("name", named("String"));
    // Same position and type, different name: still a redefinition.
    object_field.arguments.push(argument("uppercase", named("Boolean")));
    let registry = registry_of(vec![
        interface("Named", vec![interface_field]),
        object_implementing("Droid", vec![named("Named")], vec![object_field]),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(
            &errors,
            ValidationErrorKind::InterfaceFieldArgumentRedefinition
        ),
        1
    );
}

#[test]
fn default_values_participate_in_argument_comparison() {
    let mut interface_field = field("name", named("String"));
    let mut with_default = argument("upper", named("Boolean"));
    with_default.default_value = Some(Value::boolean(true, 0..0));
    interface_field.arguments.push(with_default);

    let mut object_field = field("name", named("String"));
    object_field.arguments.push(argument("upper", named("Boolean")));

    let registry = registry_of(vec![
        interface("Named", vec![interface_field]),
        object_implementing("Droid", vec![named("Named")], vec![object_field]),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(
            &errors,
            ValidationErrorKind::InterfaceFieldArgumentRedefinition
        ),
        1
    );
}

// ============================================================================
// Check 5: schema invariants
// ============================================================================

#[test]
fn no_schema_definition_and_no_query_type_is_schema_missing() {
    let registry = registry_of(vec![object("Mutation", vec![field("x", named("Mutation"))])]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::SchemaMissing), 1);
    // The two invariants are mutually exclusive paths.
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::QueryOperationMissing),
        0
    );
}

#[test]
fn a_type_named_query_stands_in_for_a_schema_definition() {
    let registry = registry_of(vec![object("Query", vec![])]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::SchemaMissing), 0);
}

#[test]
fn schema_definition_requires_a_query_operation() {
    let mut registry = registry_of(vec![object("MutationRoot", vec![])]);
    registry.set_schema_definition(schema_definition(vec![("mutation", "MutationRoot")]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::QueryOperationMissing),
        1
    );
    assert_eq!(count_kind(&errors, ValidationErrorKind::SchemaMissing), 0);
}

#[test]
fn operation_type_must_exist() {
    let mut registry = registry_of(vec![object("QueryRoot", vec![])]);
    registry.set_schema_definition(schema_definition(vec![
        ("query", "QueryRoot"),
        ("mutation", "Ghost"),
    ]));
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::MissingType), 1);
    assert!(errors[0].message().contains("operation"));
}

#[test]
fn operation_type_resolving_to_an_interface_is_not_an_object() {
    let mut registry = registry_of(vec![interface("Mutation", vec![])]);
    registry.set_schema_definition(schema_definition(vec![("query", "Mutation")]));
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::OperationTypesMustBeObjects),
        1
    );
    // The reference resolves, just to the wrong kind: no MissingType.
    assert_eq!(count_kind(&errors, ValidationErrorKind::MissingType), 0);
}

// ============================================================================
// Checks 6 and 7: wiring completeness
// ============================================================================

#[test]
fn scalar_without_a_coercer_is_reported() {
    let registry = registry_of(vec![object("Query", vec![field("when", named("Date"))]), scalar("Date")]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingScalarImplementation),
        1
    );
}

#[test]
fn statically_wired_scalar_is_satisfied() {
    let registry = registry_of(vec![object("Query", vec![field("when", named("Date"))]), scalar("Date")]);
    let wiring = RuntimeWiring::builder()
        .with_scalar("Date", Arc::new(PassThroughCoercer))
        .build();
    let errors = SchemaValidator::new(&registry, &wiring).validate();
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingScalarImplementation),
        0
    );
}

#[test]
fn interface_and_union_without_resolvers_are_reported() {
    let registry = registry_of(vec![
        object("Query", vec![]),
        interface("Character", vec![]),
        union_of("SearchResult", vec![named("Query")]),
    ]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingTypeResolver),
        2
    );
}

#[test]
fn wiring_factory_satisfies_everything_dynamically() {
    let registry = registry_of(vec![
        object("Query", vec![]),
        interface("Character", vec![]),
        union_of("SearchResult", vec![named("Query")]),
        scalar("Date"),
    ]);
    let wiring = RuntimeWiring::builder()
        .with_wiring_factory(Arc::new(ProvideAllFactory))
        .build();
    let errors = SchemaValidator::new(&registry, &wiring).validate();
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingScalarImplementation),
        0
    );
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::MissingTypeResolver),
        0
    );
}

// ============================================================================
// Check 8: uniqueness and directive shape
// ============================================================================

#[test]
fn duplicate_field_names_report_each_later_occurrence() {
    let two = registry_of(vec![object(
        "Query",
        vec![field("foo", named("String")), field("foo", named("Int"))],
    )]);
    let errors = validate(&two);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueName), 1);

    let three = registry_of(vec![object(
        "Query",
        vec![
            field("foo", named("String")),
            field("foo", named("Int")),
            field("foo", named("Boolean")),
        ],
    )]);
    let errors = validate(&three);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueName), 2);
}

#[test]
fn duplicate_enum_values_and_input_fields_are_reported() {
    let registry = registry_of(vec![
        object("Query", vec![]),
        enum_of("Episode", vec![enum_value("NEWHOPE"), enum_value("NEWHOPE")]),
        input_object(
            "Filter",
            vec![argument("q", named("String")), argument("q", named("String"))],
        ),
    ]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueName), 2);
}

#[test]
fn duplicate_field_arguments_are_reported() {
    let mut hero = field("hero", named("String"));
    hero.arguments.push(argument("id", named("String")));
    hero.arguments.push(argument("id", named("String")));
    let registry = registry_of(vec![object("Query", vec![hero])]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueArgument), 1);
}

#[test]
fn duplicate_directives_and_directive_arguments_are_reported() {
    let mut hero = field("hero", named("String"));
    hero.directives.push(Directive::new("tag", 0..0));
    hero.directives.push(Directive::new("tag", 0..0));
    hero.directives.push(
        Directive::new("once", 0..0)
            .with_argument(Argument::new("key", Value::string("a", 0..0), 0..0))
            .with_argument(Argument::new("key", Value::string("b", 0..0), 0..0)),
    );
    let registry = registry_of(vec![object("Query", vec![hero])]);
    let errors = validate(&registry);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueDirective), 1);
    assert_eq!(count_kind(&errors, ValidationErrorKind::NonUniqueArgument), 1);
}

#[test]
fn deprecated_directive_shapes() {
    let deprecated = |arguments: Vec<Argument>| {
        let mut directive = Directive::new("deprecated", 0..0);
        directive.arguments = arguments;
        let mut value = field("old", named("String"));
        value.directives.push(directive);
        registry_of(vec![object("Query", vec![value])])
    };

    let ok = deprecated(vec![]);
    assert_eq!(
        count_kind(&validate(&ok), ValidationErrorKind::InvalidDeprecationDirective),
        0
    );

    let with_reason = deprecated(vec![Argument::new(
        "reason",
        Value::string("use new", 0..0),
        0..0,
    )]);
    assert_eq!(
        count_kind(&validate(&with_reason), ValidationErrorKind::InvalidDeprecationDirective),
        0
    );

    let non_string = deprecated(vec![Argument::new("reason", Value::int(1, 0..0), 0..0)]);
    assert_eq!(
        count_kind(&validate(&non_string), ValidationErrorKind::InvalidDeprecationDirective),
        1
    );

    let two_arguments = deprecated(vec![
        Argument::new("reason", Value::string("x", 0..0), 0..0),
        Argument::new("also", Value::string("y", 0..0), 0..0),
    ]);
    assert_eq!(
        count_kind(&validate(&two_arguments), ValidationErrorKind::InvalidDeprecationDirective),
        1
    );
}

#[test]
fn deprecated_on_enum_values_is_checked_too() {
    let mut value = enum_value("OLD");
    value.directives.push(
        Directive::new("deprecated", 0..0)
            .with_argument(Argument::new("reason", Value::int(1, 0..0), 0..0)),
    );
    let registry = registry_of(vec![object("Query", vec![]), enum_of("Episode", vec![value])]);
    let errors = validate(&registry);
    assert_eq!(
        count_kind(&errors, ValidationErrorKind::InvalidDeprecationDirective),
        1
    );
}

// ============================================================================
// Independence of checks
// ============================================================================

#[test]
fn independent_problems_are_all_reported() {
    let mut registry = registry_of(vec![
        // Missing field type, duplicate field name, and an unresolved
        // implements clause on the same type.
        broken_type(),
        scalar("Date"),
    ]);
    registry.add_type_extension(extension("Ghost", vec![]));
    let errors = validate(&registry);
    let kinds = kinds(&errors);
    assert!(kinds.contains(&ValidationErrorKind::MissingType));
    assert!(kinds.contains(&ValidationErrorKind::MissingInterfaceType));
    assert!(kinds.contains(&ValidationErrorKind::NonUniqueName));
    assert!(kinds.contains(&ValidationErrorKind::TypeExtensionMissingBaseType));
    assert!(kinds.contains(&ValidationErrorKind::SchemaMissing));
    assert!(kinds.contains(&ValidationErrorKind::MissingScalarImplementation));
}

fn broken_type() -> graphql_sema::ast::TypeDefinition {
    object_implementing(
        "Broken",
        vec![named("NoSuchInterface")],
        vec![field("a", named("NoSuchType")), field("a", named("NoSuchType"))],
    )
}
