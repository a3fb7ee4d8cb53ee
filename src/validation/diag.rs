//! Validation error records built on the base diagnostic model.
//!
//! Every check reports through [`ValidationError`]: a kind tag from the
//! closed taxonomy plus a rendered [`Diag`]. Errors are collected, never
//! raised; an empty list means the input is valid.

use crate::ast::Span;
use crate::diag::Diag;

/// The closed taxonomy of validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A directive usage names a directive the schema does not declare.
    UnknownDirective,
    /// A directive usage sits at a location its declaration does not allow.
    MisplacedDirective,
    /// A type reference does not resolve to a registered type.
    MissingType,
    /// An `implements` reference is absent or not an interface.
    MissingInterfaceType,
    /// An implementor lacks a field its interface declares.
    MissingInterfaceField,
    /// An implementor's field and its interface field disagree on argument
    /// count.
    MissingInterfaceFieldArguments,
    /// An implementor's field type differs from the interface's.
    InterfaceFieldRedefinition,
    /// An implementor's field argument differs from the interface's.
    InterfaceFieldArgumentRedefinition,
    /// A type extension has no base object type.
    TypeExtensionMissingBaseType,
    /// A type extension redefines a field with a different type.
    TypeExtensionFieldRedefinition,
    /// A container declares two members with the same name.
    NonUniqueName,
    /// A field or directive declares two arguments with the same name.
    NonUniqueArgument,
    /// An element carries two directives with the same name.
    NonUniqueDirective,
    /// A `deprecated` directive usage with an unsupported shape.
    InvalidDeprecationDirective,
    /// A declared scalar has no coercer in the wiring.
    MissingScalarImplementation,
    /// An interface or union has no type resolver in the wiring.
    MissingTypeResolver,
    /// No schema definition and no type named `Query`.
    SchemaMissing,
    /// A schema definition without a `query` operation.
    QueryOperationMissing,
    /// A schema operation type resolving to a non-object definition.
    OperationTypesMustBeObjects,
}

impl ValidationErrorKind {
    /// Returns the stable name of this error kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnknownDirective => "UnknownDirective",
            Self::MisplacedDirective => "MisplacedDirective",
            Self::MissingType => "MissingType",
            Self::MissingInterfaceType => "MissingInterfaceType",
            Self::MissingInterfaceField => "MissingInterfaceField",
            Self::MissingInterfaceFieldArguments => "MissingInterfaceFieldArguments",
            Self::InterfaceFieldRedefinition => "InterfaceFieldRedefinition",
            Self::InterfaceFieldArgumentRedefinition => "InterfaceFieldArgumentRedefinition",
            Self::TypeExtensionMissingBaseType => "TypeExtensionMissingBaseType",
            Self::TypeExtensionFieldRedefinition => "TypeExtensionFieldRedefinition",
            Self::NonUniqueName => "NonUniqueName",
            Self::NonUniqueArgument => "NonUniqueArgument",
            Self::NonUniqueDirective => "NonUniqueDirective",
            Self::InvalidDeprecationDirective => "InvalidDeprecationDirective",
            Self::MissingScalarImplementation => "MissingScalarImplementation",
            Self::MissingTypeResolver => "MissingTypeResolver",
            Self::SchemaMissing => "SchemaMissing",
            Self::QueryOperationMissing => "QueryOperationMissing",
            Self::OperationTypesMustBeObjects => "OperationTypesMustBeObjects",
        }
    }
}

/// A single structured validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    diag: Diag,
}

impl ValidationError {
    /// Creates an error of the given kind.
    pub fn new(kind: ValidationErrorKind, diag: Diag) -> Self {
        Self { kind, diag }
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        &self.diag.message
    }

    /// Returns the underlying diagnostic.
    pub fn diag(&self) -> &Diag {
        &self.diag
    }

    /// Consumes the error, returning the diagnostic.
    pub fn into_diag(self) -> Diag {
        self.diag
    }
}

/// Constructor helpers, one per taxonomy kind.
impl ValidationError {
    /// A directive usage naming an undeclared directive.
    pub fn unknown_directive(name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::UnknownDirective,
            Diag::error(format!("Unknown directive '{name}'"))
                .with_primary_label(span, "directive is not declared by the schema"),
        )
    }

    /// A directive usage at a disallowed location.
    pub fn misplaced_directive(name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::MisplacedDirective,
            Diag::error(format!("Directive '{name}' not allowed here"))
                .with_primary_label(span, "not a valid location for this directive"),
        )
    }

    /// An unresolved type reference.
    pub fn missing_type(context: &str, owner: &str, type_name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::MissingType,
            Diag::error(format!(
                "The {context} type '{type_name}' is not present when resolving type '{owner}'"
            ))
            .with_primary_label(span, "type is not defined"),
        )
    }

    /// An `implements` reference that is absent or not an interface.
    pub fn missing_interface_type(owner: &str, type_name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::MissingInterfaceType,
            Diag::error(format!(
                "The interface type '{type_name}' is not present when resolving type '{owner}'"
            ))
            .with_primary_label(span, "not a defined interface type"),
        )
    }

    /// An implementor missing an interface field.
    pub fn missing_interface_field(
        kind_label: &str,
        implementor: &str,
        interface: &str,
        field: &str,
        span: Span,
    ) -> Self {
        Self::new(
            ValidationErrorKind::MissingInterfaceField,
            Diag::error(format!(
                "The {kind_label} type '{implementor}' does not have a field '{field}' \
                 required by interface '{interface}'"
            ))
            .with_primary_label(span, format!("missing field '{field}'")),
        )
    }

    /// An implementor's field with the wrong argument count.
    pub fn missing_interface_field_arguments(
        kind_label: &str,
        implementor: &str,
        interface: &str,
        field: &str,
        span: Span,
    ) -> Self {
        Self::new(
            ValidationErrorKind::MissingInterfaceFieldArguments,
            Diag::error(format!(
                "The {kind_label} type '{implementor}' field '{field}' does not have the same \
                 number of arguments as specified by interface '{interface}'"
            ))
            .with_primary_label(span, "argument count differs from the interface"),
        )
    }

    /// An implementor's field type differing from the interface.
    pub fn interface_field_redefinition(
        kind_label: &str,
        implementor: &str,
        interface: &str,
        field: &str,
        found: &str,
        expected: &str,
        span: Span,
    ) -> Self {
        Self::new(
            ValidationErrorKind::InterfaceFieldRedefinition,
            Diag::error(format!(
                "The {kind_label} type '{implementor}' has tried to redefine field '{field}' \
                 of interface '{interface}' from '{expected}' to '{found}'"
            ))
            .with_primary_label(span, format!("expected '{expected}', found '{found}'")),
        )
    }

    /// An implementor's field argument differing from the interface.
    pub fn interface_field_argument_redefinition(
        kind_label: &str,
        implementor: &str,
        interface: &str,
        field: &str,
        found: &str,
        expected: &str,
        span: Span,
    ) -> Self {
        Self::new(
            ValidationErrorKind::InterfaceFieldArgumentRedefinition,
            Diag::error(format!(
                "The {kind_label} type '{implementor}' field '{field}' has tried to redefine \
                 argument '{expected}' of interface '{interface}' as '{found}'"
            ))
            .with_primary_label(span, format!("expected '{expected}', found '{found}'")),
        )
    }

    /// A type extension with no base object type.
    pub fn type_extension_missing_base_type(name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::TypeExtensionMissingBaseType,
            Diag::error(format!(
                "The type extension '{name}' is missing its base object type"
            ))
            .with_primary_label(span, "no object type with this name"),
        )
    }

    /// A type extension redefining a field with a different type.
    pub fn type_extension_field_redefinition(name: &str, field: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::TypeExtensionFieldRedefinition,
            Diag::error(format!(
                "The type extension '{name}' has tried to redefine field '{field}' with a \
                 different type"
            ))
            .with_primary_label(span, "field type differs from the existing definition"),
        )
    }

    /// A duplicate member name inside a container.
    pub fn non_unique_name(owner: &str, name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::NonUniqueName,
            Diag::error(format!(
                "The type '{owner}' has declared a member with a non-unique name '{name}'"
            ))
            .with_primary_label(span, "duplicate name"),
        )
    }

    /// A duplicate argument name on a field or directive.
    pub fn non_unique_argument(owner: &str, element: &str, name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::NonUniqueArgument,
            Diag::error(format!(
                "The type '{owner}' element '{element}' has declared an argument with a \
                 non-unique name '{name}'"
            ))
            .with_primary_label(span, "duplicate argument name"),
        )
    }

    /// A duplicate directive name on an element.
    pub fn non_unique_directive(owner: &str, element: &str, name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::NonUniqueDirective,
            Diag::error(format!(
                "The type '{owner}' element '{element}' has declared a directive with a \
                 non-unique name '{name}'"
            ))
            .with_primary_label(span, "duplicate directive name"),
        )
    }

    /// A `deprecated` directive usage with an unsupported shape.
    pub fn invalid_deprecation_directive(owner: &str, element: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::InvalidDeprecationDirective,
            Diag::error(format!(
                "The type '{owner}' element '{element}' has an invalid 'deprecated' directive"
            ))
            .with_primary_label(span, "invalid 'deprecated' usage")
            .with_help(
                "'deprecated' takes no arguments, or one string argument named 'reason'",
            ),
        )
    }

    /// A declared scalar with no coercer in the wiring.
    pub fn missing_scalar_implementation(name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::MissingScalarImplementation,
            Diag::error(format!(
                "There is no scalar implementation for the named '{name}' scalar type"
            ))
            .with_primary_label(span, "no coercer wired for this scalar"),
        )
    }

    /// An interface or union with no type resolver in the wiring.
    pub fn missing_type_resolver(kind_label: &str, name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::MissingTypeResolver,
            Diag::error(format!(
                "There is no type resolver for the named '{name}' {kind_label} type"
            ))
            .with_primary_label(span, "no resolver wired for this type"),
        )
    }

    /// No schema definition and no type named `Query`.
    pub fn schema_missing() -> Self {
        Self::new(
            ValidationErrorKind::SchemaMissing,
            Diag::error("There is no schema definition, and no type named 'Query' to default to"),
        )
    }

    /// A schema definition without a `query` operation.
    pub fn query_operation_missing(span: Span) -> Self {
        Self::new(
            ValidationErrorKind::QueryOperationMissing,
            Diag::error("The schema definition must declare a 'query' operation")
                .with_primary_label(span, "no 'query' operation here"),
        )
    }

    /// A schema operation type resolving to a non-object definition.
    pub fn operation_types_must_be_objects(operation: &str, type_name: &str, span: Span) -> Self {
        Self::new(
            ValidationErrorKind::OperationTypesMustBeObjects,
            Diag::error(format!(
                "The schema operation '{operation}' must reference an object type, but \
                 '{type_name}' is not one"
            ))
            .with_primary_label(span, "not an object type"),
        )
    }
}

/// An externally owned, append-only error list.
///
/// Rules append into a collector they are handed; they never return errors
/// directly and never stop collecting on the first hit.
#[derive(Debug, Default)]
pub struct ValidationErrorCollector {
    errors: Vec<ValidationError>,
}

impl ValidationErrorCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the collected errors in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the collector, returning the errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
