//! GraphQL semantic analysis with rich diagnostics.
//!
//! This library is the validation layer of a GraphQL engine: it takes the
//! AST an external parser produced and decides whether it can become an
//! executable schema, with error reporting built on miette.
//!
//! # Example
//!
//! ```
//! use graphql_sema::ast::{ObjectTypeDefinition, TypeDefinition};
//! use graphql_sema::validation::{RuntimeWiring, SchemaValidator, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .add_type(TypeDefinition::Object(ObjectTypeDefinition {
//!         name: "Query".into(),
//!         implements: vec![],
//!         directives: vec![],
//!         fields: vec![],
//!         span: 0..0,
//!     }))
//!     .expect("fresh registry");
//!
//! let wiring = RuntimeWiring::default();
//! let errors = SchemaValidator::new(&registry, &wiring).validate();
//!
//! // A `Query` type stands in for an explicit schema definition.
//! assert!(errors.is_empty());
//! ```

pub mod ast;
pub mod diag;
pub mod validation;

// Re-export syntax span primitives.
pub use ast::Span;

// Re-export the diagnostic model for convenience.
pub use diag::{Diag, DiagLabel, DiagSeverity, LabelRole, SourceFile};
