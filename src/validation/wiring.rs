//! Runtime wiring: behavior providers bound to schema type names.
//!
//! The wiring maps custom scalar names to coercers and interface/union
//! names to type resolvers, with a [`WiringFactory`] consulted dynamically
//! for anything not statically bound. Host applications implement the
//! provider traits; the validator only asks whether a provider exists.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::type_system::{
    InterfaceTypeDefinition, ScalarTypeDefinition, UnionTypeDefinition,
};
use crate::ast::value::Value;
use crate::validation::registry::TypeRegistry;

/// Failure while coercing a scalar literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// What went wrong.
    pub message: String,
}

impl CoercionError {
    /// Creates a coercion error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CoercionError {}

/// Coerces literals of one custom scalar type.
pub trait ScalarCoercer: Send + Sync {
    /// Coerces an AST literal into the scalar's canonical value form.
    fn coerce_literal(&self, literal: &Value) -> Result<Value, CoercionError>;
}

/// Resolves the concrete object type behind an interface or union value.
pub trait TypeResolver: Send + Sync {
    /// Names the concrete object type for a runtime value tag.
    fn resolve_type(&self, type_hint: &str) -> Option<SmolStr>;
}

/// Registry and scalar definition handed to a factory's scalar hook.
#[derive(Clone, Copy)]
pub struct ScalarWiringEnvironment<'a> {
    pub registry: &'a TypeRegistry,
    pub scalar: &'a ScalarTypeDefinition,
}

/// Registry and abstract-type definition handed to a factory's resolver
/// hook.
#[derive(Clone, Copy)]
pub enum TypeResolverEnvironment<'a> {
    Interface {
        registry: &'a TypeRegistry,
        definition: &'a InterfaceTypeDefinition,
    },
    Union {
        registry: &'a TypeRegistry,
        definition: &'a UnionTypeDefinition,
    },
}

impl TypeResolverEnvironment<'_> {
    /// Name of the abstract type needing a resolver.
    pub fn type_name(&self) -> &SmolStr {
        match self {
            TypeResolverEnvironment::Interface { definition, .. } => &definition.name,
            TypeResolverEnvironment::Union { definition, .. } => &definition.name,
        }
    }
}

/// Dynamic provider fallback, queried when no static binding exists.
///
/// The default implementation provides nothing, so a wiring without a
/// custom factory is exactly its static maps.
pub trait WiringFactory: Send + Sync {
    /// True if this factory can coerce the given scalar.
    fn provides_scalar(&self, environment: &ScalarWiringEnvironment<'_>) -> bool {
        let _ = environment;
        false
    }

    /// True if this factory can resolve the given interface or union.
    fn provides_type_resolver(&self, environment: &TypeResolverEnvironment<'_>) -> bool {
        let _ = environment;
        false
    }
}

/// A factory providing nothing; the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWiringFactory;

impl WiringFactory for NoopWiringFactory {}

/// The full wiring configuration for a schema.
#[derive(Clone)]
pub struct RuntimeWiring {
    scalars: IndexMap<SmolStr, Arc<dyn ScalarCoercer>>,
    type_resolvers: IndexMap<SmolStr, Arc<dyn TypeResolver>>,
    factory: Arc<dyn WiringFactory>,
}

impl RuntimeWiring {
    /// Starts building a wiring.
    pub fn builder() -> RuntimeWiringBuilder {
        RuntimeWiringBuilder::default()
    }

    /// True if a coercer is statically bound for the scalar name.
    pub fn has_scalar(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Returns the coercer statically bound for the scalar name.
    pub fn scalar(&self, name: &str) -> Option<&Arc<dyn ScalarCoercer>> {
        self.scalars.get(name)
    }

    /// True if a resolver is statically bound for the type name.
    pub fn has_type_resolver(&self, name: &str) -> bool {
        self.type_resolvers.contains_key(name)
    }

    /// Returns the resolver statically bound for the type name.
    pub fn type_resolver(&self, name: &str) -> Option<&Arc<dyn TypeResolver>> {
        self.type_resolvers.get(name)
    }

    /// Returns the dynamic factory.
    pub fn factory(&self) -> &dyn WiringFactory {
        self.factory.as_ref()
    }
}

impl Default for RuntimeWiring {
    fn default() -> Self {
        RuntimeWiring::builder().build()
    }
}

impl fmt::Debug for RuntimeWiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeWiring")
            .field("scalars", &self.scalars.keys().collect::<Vec<_>>())
            .field(
                "type_resolvers",
                &self.type_resolvers.keys().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Builder for [`RuntimeWiring`].
#[derive(Default)]
pub struct RuntimeWiringBuilder {
    scalars: IndexMap<SmolStr, Arc<dyn ScalarCoercer>>,
    type_resolvers: IndexMap<SmolStr, Arc<dyn TypeResolver>>,
    factory: Option<Arc<dyn WiringFactory>>,
}

impl RuntimeWiringBuilder {
    /// Binds a coercer to a scalar name.
    pub fn with_scalar(mut self, name: impl Into<SmolStr>, coercer: Arc<dyn ScalarCoercer>) -> Self {
        self.scalars.insert(name.into(), coercer);
        self
    }

    /// Binds a resolver to an interface or union name.
    pub fn with_type_resolver(
        mut self,
        name: impl Into<SmolStr>,
        resolver: Arc<dyn TypeResolver>,
    ) -> Self {
        self.type_resolvers.insert(name.into(), resolver);
        self
    }

    /// Sets the dynamic factory.
    pub fn with_wiring_factory(mut self, factory: Arc<dyn WiringFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Finishes the wiring.
    pub fn build(self) -> RuntimeWiring {
        RuntimeWiring {
            scalars: self.scalars,
            type_resolvers: self.type_resolvers,
            factory: self
                .factory
                .unwrap_or_else(|| Arc::new(NoopWiringFactory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PassThrough;

    impl ScalarCoercer for PassThrough {
        fn coerce_literal(&self, literal: &Value) -> Result<Value, CoercionError> {
            Ok(literal.clone())
        }
    }

    struct FixedResolver;

    impl TypeResolver for FixedResolver {
        fn resolve_type(&self, _type_hint: &str) -> Option<SmolStr> {
            Some("Droid".into())
        }
    }

    #[test]
    fn builder_registers_static_bindings() {
        let wiring = RuntimeWiring::builder()
            .with_scalar("Url", Arc::new(PassThrough))
            .with_type_resolver("Character", Arc::new(FixedResolver))
            .build();
        assert!(wiring.has_scalar("Url"));
        assert!(!wiring.has_scalar("Date"));
        assert!(wiring.has_type_resolver("Character"));
        assert!(!wiring.has_type_resolver("SearchResult"));
    }

    #[test]
    fn default_factory_provides_nothing() {
        let wiring = RuntimeWiring::default();
        let registry = TypeRegistry::new();
        let scalar = ScalarTypeDefinition {
            name: "Url".into(),
            directives: vec![],
            span: 0..0,
        };
        let environment = ScalarWiringEnvironment {
            registry: &registry,
            scalar: &scalar,
        };
        assert!(!wiring.factory().provides_scalar(&environment));
    }
}
