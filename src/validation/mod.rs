//! Semantic validation over parsed schema and document ASTs.
//!
//! Two validators live here, both reporting through the structured error
//! model in [`diag`]:
//!
//! - [`schema_check::SchemaValidator`] runs the full battery of consistency
//!   checks over a [`registry::TypeRegistry`] and its
//!   [`wiring::RuntimeWiring`]: referential completeness, type-extension
//!   attachment and field redefinition, interface conformance, schema-level
//!   invariants, scalar and resolver completeness, and name uniqueness.
//! - [`directives::KnownDirectives`] checks directive usages against their
//!   declared valid locations, one usage at a time, via the traversal
//!   engine.
//!
//! Checks never raise: each entry point returns the complete list of
//! [`diag::ValidationError`]s, and an empty list means the input is valid.
//! The caller decides whether a non-empty list blocks anything.

pub mod diag;
pub mod directives;
pub mod registry;
pub mod schema_check;
pub mod wiring;

pub use diag::{ValidationError, ValidationErrorCollector, ValidationErrorKind};
pub use directives::{
    DirectiveDefinition, DirectiveLocation, DirectiveRegistry, KnownDirectives,
    check_document_directives,
};
pub use registry::TypeRegistry;
pub use schema_check::SchemaValidator;
pub use wiring::{
    CoercionError, NoopWiringFactory, RuntimeWiring, RuntimeWiringBuilder, ScalarCoercer,
    ScalarWiringEnvironment, TypeResolver, TypeResolverEnvironment, WiringFactory,
};
