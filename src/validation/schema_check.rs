//! Schema consistency checking.
//!
//! [`SchemaValidator`] pre-checks a type registry and its runtime wiring to
//! ensure the pair can become an executable schema. Checks run in a fixed
//! sequence but are fully independent: no check's findings suppress
//! another's, and every check tolerates partially broken input (a type
//! reference that does not resolve is reported once, by the completeness
//! check, and simply skipped elsewhere).

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::Span;
use crate::ast::document::Directive;
use crate::ast::print::print_input_value;
use crate::ast::type_system::{
    EnumValueDefinition, FieldDefinition, InputValueDefinition, SchemaDefinition, TypeDefinition,
};
use crate::ast::types::Type;
use crate::validation::diag::ValidationError;
use crate::validation::registry::TypeRegistry;
use crate::validation::wiring::{
    RuntimeWiring, ScalarWiringEnvironment, TypeResolverEnvironment,
};

/// Validates a type registry against its runtime wiring.
pub struct SchemaValidator<'a> {
    registry: &'a TypeRegistry,
    wiring: &'a RuntimeWiring,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator over a registry and wiring pair.
    pub fn new(registry: &'a TypeRegistry, wiring: &'a RuntimeWiring) -> Self {
        Self { registry, wiring }
    }

    /// Runs every check and returns the complete error list.
    ///
    /// The list is empty when the registry can become an executable schema.
    /// Its order is deterministic for a given registry and wiring.
    pub fn validate(&self) -> Vec<ValidationError> {
        log::debug!(
            "checking type registry with {} types and {} extensions",
            self.registry.types().count(),
            self.registry.all_type_extensions().count()
        );

        let mut errors = Vec::new();
        self.check_missing_types(&mut errors);

        self.check_extensions_have_base_type(&mut errors);
        self.check_extension_field_redefinition(&mut errors);

        self.check_interfaces_implemented(&mut errors);

        self.check_schema_invariants(&mut errors);

        self.check_scalar_implementations(&mut errors);
        self.check_type_resolvers(&mut errors);

        self.check_fields_sensible(&mut errors);

        log::debug!("type registry check found {} problems", errors.len());
        errors
    }

    /// Check 1: every type reference resolves to a registered name.
    fn check_missing_types(&self, errors: &mut Vec<ValidationError>) {
        for extension in self.registry.all_type_extensions() {
            for interface_ref in &extension.implements {
                self.check_interface_type_exists(&extension.name, interface_ref, errors);
            }
            self.check_field_types_present(&extension.name, &extension.fields, errors);
        }

        for object in self.registry.objects() {
            for interface_ref in &object.implements {
                self.check_interface_type_exists(&object.name, interface_ref, errors);
            }
            self.check_field_types_present(&object.name, &object.fields, errors);
        }

        for interface in self.registry.interfaces() {
            self.check_field_types_present(&interface.name, &interface.fields, errors);
        }

        for union_type in self.registry.unions() {
            for member in &union_type.members {
                self.check_type_exists("union member", &union_type.name, member, errors);
            }
        }

        for input_object in self.registry.input_objects() {
            for field in &input_object.fields {
                self.check_type_exists("input value", &input_object.name, &field.value_type, errors);
            }
        }
    }

    fn check_field_types_present(
        &self,
        owner: &str,
        fields: &[FieldDefinition],
        errors: &mut Vec<ValidationError>,
    ) {
        for field in fields {
            self.check_type_exists("field", owner, &field.field_type, errors);
        }
        for field in fields {
            for argument in &field.arguments {
                self.check_type_exists("field input", owner, &argument.value_type, errors);
            }
        }
    }

    fn check_type_exists(
        &self,
        context: &str,
        owner: &str,
        type_ref: &Type,
        errors: &mut Vec<ValidationError>,
    ) {
        if !self.registry.has_type(type_ref) {
            let base = type_ref.base();
            errors.push(ValidationError::missing_type(
                context,
                owner,
                &base.name,
                base.span.clone(),
            ));
        }
    }

    fn check_interface_type_exists(
        &self,
        owner: &str,
        type_ref: &Type,
        errors: &mut Vec<ValidationError>,
    ) {
        let base = type_ref.base();
        match self.registry.get(&base.name) {
            Some(TypeDefinition::Interface(_)) => {}
            _ => errors.push(ValidationError::missing_interface_type(
                owner,
                &base.name,
                base.span.clone(),
            )),
        }
    }

    /// Check 2: every extension names an existing base object type.
    fn check_extensions_have_base_type(&self, errors: &mut Vec<ValidationError>) {
        for (name, group) in self.registry.type_extensions() {
            let Some(first) = group.first() else {
                continue;
            };
            match self.registry.get(name) {
                Some(TypeDefinition::Object(_)) => {}
                _ => errors.push(ValidationError::type_extension_missing_base_type(
                    name,
                    first.span.clone(),
                )),
            }
        }
    }

    /// Check 3: a field reintroduced by an extension keeps its type.
    ///
    /// Only the field's own type participates; argument lists are not
    /// compared here.
    fn check_extension_field_redefinition(&self, errors: &mut Vec<ValidationError>) {
        for group in self.registry.type_extensions().values() {
            for (position, extension) in group.iter().enumerate() {
                // Re-definitions between sibling extensions of the same base.
                for (other_position, other) in group.iter().enumerate() {
                    if other_position == position {
                        continue;
                    }
                    check_field_redefinition(&other.name, &other.fields, &extension.fields, errors);
                }
                // Re-definitions against the base type itself.
                if let Some(TypeDefinition::Object(base)) = self.registry.get(&extension.name) {
                    check_field_redefinition(
                        &extension.name,
                        &extension.fields,
                        &base.fields,
                        errors,
                    );
                }
            }
        }
    }

    /// Check 4: implementors carry every interface field, exactly.
    fn check_interfaces_implemented(&self, errors: &mut Vec<ValidationError>) {
        for object in self.registry.objects() {
            for interface_ref in &object.implements {
                self.check_interface_implemented(
                    "object",
                    &object.name,
                    &object.span,
                    &object.fields,
                    interface_ref,
                    errors,
                );
            }
        }

        for extension in self.registry.all_type_extensions() {
            for interface_ref in &extension.implements {
                self.check_interface_implemented(
                    "extension",
                    &extension.name,
                    &extension.span,
                    &extension.fields,
                    interface_ref,
                    errors,
                );
            }
        }
    }

    fn check_interface_implemented(
        &self,
        kind_label: &str,
        implementor: &str,
        implementor_span: &Span,
        implementor_fields: &[FieldDefinition],
        type_ref: &Type,
        errors: &mut Vec<ValidationError>,
    ) {
        // The missing and wrong-kind cases are the completeness check's job.
        let Some(TypeDefinition::Interface(interface)) =
            self.registry.get(type_ref.base_name())
        else {
            return;
        };

        let fields_by_name = index_by_name(implementor_fields, |field| &field.name);

        for interface_field in &interface.fields {
            let Some(&own_field) = fields_by_name.get(&interface_field.name) else {
                errors.push(ValidationError::missing_interface_field(
                    kind_label,
                    implementor,
                    &interface.name,
                    &interface_field.name,
                    implementor_span.clone(),
                ));
                continue;
            };

            let expected = interface_field.field_type.to_string();
            let found = own_field.field_type.to_string();
            if expected != found {
                errors.push(ValidationError::interface_field_redefinition(
                    kind_label,
                    implementor,
                    &interface.name,
                    &interface_field.name,
                    &found,
                    &expected,
                    own_field.span.clone(),
                ));
            }

            if own_field.arguments.len() != interface_field.arguments.len() {
                errors.push(ValidationError::missing_interface_field_arguments(
                    kind_label,
                    implementor,
                    &interface.name,
                    &interface_field.name,
                    own_field.span.clone(),
                ));
            } else {
                check_argument_consistency(
                    kind_label,
                    implementor,
                    &interface.name,
                    own_field,
                    interface_field,
                    errors,
                );
            }
        }
    }

    /// Check 5: schema-level invariants.
    fn check_schema_invariants(&self, errors: &mut Vec<ValidationError>) {
        // A document may omit the schema definition when its root query
        // type is literally named `Query`.
        let Some(schema) = self.registry.schema_definition() else {
            if self.registry.get("Query").is_none() {
                errors.push(ValidationError::schema_missing());
            }
            return;
        };

        self.check_operation_types_exist(schema, errors);
        self.check_operation_types_are_objects(schema, errors);

        if !schema
            .operation_types
            .iter()
            .any(|operation| operation.operation == "query")
        {
            errors.push(ValidationError::query_operation_missing(schema.span.clone()));
        }
    }

    fn check_operation_types_exist(
        &self,
        schema: &SchemaDefinition,
        errors: &mut Vec<ValidationError>,
    ) {
        for operation in &schema.operation_types {
            if !self.registry.has_type(&operation.operation_type) {
                let base = operation.operation_type.base();
                errors.push(ValidationError::missing_type(
                    "operation",
                    &operation.operation,
                    &base.name,
                    base.span.clone(),
                ));
            }
        }
    }

    fn check_operation_types_are_objects(
        &self,
        schema: &SchemaDefinition,
        errors: &mut Vec<ValidationError>,
    ) {
        for operation in &schema.operation_types {
            let base = operation.operation_type.base();
            // An unresolved reference is the exist check's finding, not ours.
            if let Some(definition) = self.registry.get(&base.name) {
                if !matches!(definition, TypeDefinition::Object(_)) {
                    errors.push(ValidationError::operation_types_must_be_objects(
                        &operation.operation,
                        &base.name,
                        operation.span.clone(),
                    ));
                }
            }
        }
    }

    /// Check 6: every declared scalar has a coercer.
    fn check_scalar_implementations(&self, errors: &mut Vec<ValidationError>) {
        for scalar in self.registry.scalars() {
            let environment = ScalarWiringEnvironment {
                registry: self.registry,
                scalar,
            };
            if !self.wiring.factory().provides_scalar(&environment)
                && !self.wiring.has_scalar(&scalar.name)
            {
                errors.push(ValidationError::missing_scalar_implementation(
                    &scalar.name,
                    scalar.span.clone(),
                ));
            }
        }
    }

    /// Check 7: every interface and union has a type resolver.
    fn check_type_resolvers(&self, errors: &mut Vec<ValidationError>) {
        for interface in self.registry.interfaces() {
            let environment = TypeResolverEnvironment::Interface {
                registry: self.registry,
                definition: interface,
            };
            if !self.wiring.factory().provides_type_resolver(&environment)
                && !self.wiring.has_type_resolver(&interface.name)
            {
                errors.push(ValidationError::missing_type_resolver(
                    "interface",
                    &interface.name,
                    interface.span.clone(),
                ));
            }
        }

        for union_type in self.registry.unions() {
            let environment = TypeResolverEnvironment::Union {
                registry: self.registry,
                definition: union_type,
            };
            if !self.wiring.factory().provides_type_resolver(&environment)
                && !self.wiring.has_type_resolver(&union_type.name)
            {
                errors.push(ValidationError::missing_type_resolver(
                    "union",
                    &union_type.name,
                    union_type.span.clone(),
                ));
            }
        }
    }

    /// Check 8: names are unique and directive usages are well formed.
    fn check_fields_sensible(&self, errors: &mut Vec<ValidationError>) {
        for extension in self.registry.all_type_extensions() {
            self.check_output_fields(&extension.name, &extension.fields, errors);
        }

        for object in self.registry.objects() {
            self.check_output_fields(&object.name, &object.fields, errors);
        }

        for interface in self.registry.interfaces() {
            self.check_output_fields(&interface.name, &interface.fields, errors);
        }

        for enum_type in self.registry.enums() {
            self.check_enum_values(&enum_type.name, &enum_type.values, errors);
        }

        for input_object in self.registry.input_objects() {
            self.check_input_values(&input_object.name, &input_object.fields, errors);
        }
    }

    fn check_output_fields(
        &self,
        owner: &str,
        fields: &[FieldDefinition],
        errors: &mut Vec<ValidationError>,
    ) {
        check_named_uniqueness(errors, fields, |field| &field.name, |field| {
            ValidationError::non_unique_name(owner, &field.name, field.span.clone())
        });

        for field in fields {
            check_named_uniqueness(errors, &field.arguments, |argument| &argument.name, |argument| {
                ValidationError::non_unique_argument(
                    owner,
                    &field.name,
                    &argument.name,
                    argument.span.clone(),
                )
            });
        }

        for field in fields {
            check_named_uniqueness(errors, &field.directives, |directive| &directive.name, |directive| {
                ValidationError::non_unique_directive(
                    owner,
                    &field.name,
                    &directive.name,
                    directive.span.clone(),
                )
            });
        }

        for field in fields {
            for directive in &field.directives {
                check_deprecated_directive(owner, &field.name, directive, errors);
                check_named_uniqueness(
                    errors,
                    &directive.arguments,
                    |argument| &argument.name,
                    |argument| {
                        ValidationError::non_unique_argument(
                            owner,
                            &field.name,
                            &argument.name,
                            argument.span.clone(),
                        )
                    },
                );
            }
        }
    }

    fn check_enum_values(
        &self,
        owner: &str,
        values: &[EnumValueDefinition],
        errors: &mut Vec<ValidationError>,
    ) {
        check_named_uniqueness(errors, values, |value| &value.name, |value| {
            ValidationError::non_unique_name(owner, &value.name, value.span.clone())
        });

        for value in values {
            check_named_uniqueness(errors, &value.directives, |directive| &directive.name, |directive| {
                ValidationError::non_unique_directive(
                    owner,
                    &value.name,
                    &directive.name,
                    directive.span.clone(),
                )
            });
        }

        for value in values {
            for directive in &value.directives {
                check_deprecated_directive(owner, &value.name, directive, errors);
                check_named_uniqueness(
                    errors,
                    &directive.arguments,
                    |argument| &argument.name,
                    |argument| {
                        ValidationError::non_unique_argument(
                            owner,
                            &value.name,
                            &argument.name,
                            argument.span.clone(),
                        )
                    },
                );
            }
        }
    }

    fn check_input_values(
        &self,
        owner: &str,
        fields: &[InputValueDefinition],
        errors: &mut Vec<ValidationError>,
    ) {
        check_named_uniqueness(errors, fields, |field| &field.name, |field| {
            ValidationError::non_unique_name(owner, &field.name, field.span.clone())
        });

        for field in fields {
            check_named_uniqueness(errors, &field.directives, |directive| &directive.name, |directive| {
                ValidationError::non_unique_directive(
                    owner,
                    &field.name,
                    &directive.name,
                    directive.span.clone(),
                )
            });
        }

        for field in fields {
            for directive in &field.directives {
                check_deprecated_directive(owner, &field.name, directive, errors);
                check_named_uniqueness(
                    errors,
                    &directive.arguments,
                    |argument| &argument.name,
                    |argument| {
                        ValidationError::non_unique_argument(
                            owner,
                            &field.name,
                            &argument.name,
                            argument.span.clone(),
                        )
                    },
                );
            }
        }
    }
}

/// Positional argument comparison between an implementor field and its
/// interface counterpart. Arguments are compared by printed form, so names,
/// types, and default values all participate.
fn check_argument_consistency(
    kind_label: &str,
    implementor: &str,
    interface: &str,
    own_field: &FieldDefinition,
    interface_field: &FieldDefinition,
    errors: &mut Vec<ValidationError>,
) {
    for (interface_argument, own_argument) in
        interface_field.arguments.iter().zip(&own_field.arguments)
    {
        let expected = print_input_value(interface_argument);
        let found = print_input_value(own_argument);
        if expected != found {
            errors.push(ValidationError::interface_field_argument_redefinition(
                kind_label,
                implementor,
                interface,
                &own_field.name,
                &found,
                &expected,
                own_argument.span.clone(),
            ));
        }
    }
}

/// Reports fields in `fields` that re-declare a name from
/// `reference_fields` with a different printed type.
fn check_field_redefinition(
    owner: &str,
    fields: &[FieldDefinition],
    reference_fields: &[FieldDefinition],
    errors: &mut Vec<ValidationError>,
) {
    let reference = index_by_name(reference_fields, |field| &field.name);

    for field in fields {
        if let Some(reference_field) = reference.get(&field.name) {
            if !is_same_type(&field.field_type, &reference_field.field_type) {
                errors.push(ValidationError::type_extension_field_redefinition(
                    owner,
                    &field.name,
                    field.span.clone(),
                ));
            }
        }
    }
}

/// Structural type equality by printed form.
fn is_same_type(left: &Type, right: &Type) -> bool {
    left.to_string() == right.to_string()
}

/// Indexes items by name; the first occurrence of a name wins.
fn index_by_name<'a, T>(
    items: &'a [T],
    name_of: impl Fn(&'a T) -> &'a SmolStr,
) -> IndexMap<&'a SmolStr, &'a T> {
    let mut index = IndexMap::new();
    for item in items {
        index.entry(name_of(item)).or_insert(item);
    }
    index
}

/// Walks a list of named things and reports every name that repeats. The
/// first occurrence is canonical; each later occurrence is reported
/// individually.
fn check_named_uniqueness<T>(
    errors: &mut Vec<ValidationError>,
    items: &[T],
    name_of: impl Fn(&T) -> &SmolStr,
    mut on_duplicate: impl FnMut(&T) -> ValidationError,
) {
    let mut seen: IndexMap<&SmolStr, &T> = IndexMap::new();
    for item in items {
        let name = name_of(item);
        if seen.contains_key(name) {
            errors.push(on_duplicate(item));
        } else {
            seen.insert(name, item);
        }
    }
}

/// A `deprecated` usage is valid with zero arguments, or with exactly one
/// string-valued argument named `reason`.
fn check_deprecated_directive(
    owner: &str,
    element: &str,
    directive: &Directive,
    errors: &mut Vec<ValidationError>,
) {
    if directive.name != "deprecated" {
        return;
    }
    if directive.arguments.is_empty() {
        return;
    }
    if directive.arguments.len() == 1 {
        let argument = &directive.arguments[0];
        if argument.name == "reason" && argument.value.is_string() {
            return;
        }
    }
    errors.push(ValidationError::invalid_deprecation_directive(
        owner,
        element,
        directive.span.clone(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::document::Argument;
    use crate::ast::value::Value;

    #[test]
    fn uniqueness_reports_each_later_occurrence() {
        let fields = vec![
            FieldDefinition::new("foo", Type::named("String", 0..0), 0..3),
            FieldDefinition::new("foo", Type::named("Int", 0..0), 4..7),
            FieldDefinition::new("foo", Type::named("Boolean", 0..0), 8..11),
        ];
        let mut errors = Vec::new();
        check_named_uniqueness(&mut errors, &fields, |field| &field.name, |field| {
            ValidationError::non_unique_name("Thing", &field.name, field.span.clone())
        });
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].diag().labels[0].span, 4..7);
        assert_eq!(errors[1].diag().labels[0].span, 8..11);
    }

    #[test]
    fn deprecated_shapes() {
        let mut errors = Vec::new();

        let bare = Directive::new("deprecated", 0..11);
        check_deprecated_directive("Thing", "field", &bare, &mut errors);
        assert!(errors.is_empty());

        let with_reason = Directive::new("deprecated", 0..30).with_argument(Argument::new(
            "reason",
            Value::string("use other", 0..0),
            0..0,
        ));
        check_deprecated_directive("Thing", "field", &with_reason, &mut errors);
        assert!(errors.is_empty());

        let wrong_value = Directive::new("deprecated", 0..20)
            .with_argument(Argument::new("reason", Value::int(3, 0..0), 0..0));
        check_deprecated_directive("Thing", "field", &wrong_value, &mut errors);
        assert_eq!(errors.len(), 1);

        let wrong_name = Directive::new("deprecated", 0..20)
            .with_argument(Argument::new("cause", Value::string("x", 0..0), 0..0));
        check_deprecated_directive("Thing", "field", &wrong_name, &mut errors);
        assert_eq!(errors.len(), 2);

        let other_directive = Directive::new("skip", 0..5)
            .with_argument(Argument::new("a", Value::int(1, 0..0), 0..0))
            .with_argument(Argument::new("b", Value::int(2, 0..0), 0..0));
        check_deprecated_directive("Thing", "field", &other_directive, &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn printed_type_equality_is_exact() {
        let nullable = Type::named("String", 0..0);
        let non_null = Type::non_null(Type::named("String", 0..0), 0..0);
        assert!(is_same_type(&nullable, &nullable.clone()));
        assert!(!is_same_type(&nullable, &non_null));
    }
}
