//! The type registry: all type and type-extension definitions of a schema.
//!
//! Type names are the join key between base types and their extensions. A
//! name may map to one base type with any number of extensions; extensions
//! without a base type are kept too, so the checker can report them. The
//! registry is insertion-ordered throughout, which keeps every downstream
//! error list deterministic for a given input.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::type_system::{
    EnumTypeDefinition, InputObjectTypeDefinition, InterfaceTypeDefinition, ObjectTypeDefinition,
    ScalarTypeDefinition, SchemaDefinition, TypeDefinition, TypeExtensionDefinition,
    UnionTypeDefinition,
};
use crate::ast::types::Type;
use crate::diag::Diag;

/// Scalar names every schema can reference without declaring them.
const STANDARD_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Aggregation of every definition parsed for a schema.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<SmolStr, TypeDefinition>,
    extensions: IndexMap<SmolStr, Vec<TypeExtensionDefinition>>,
    schema: Option<SchemaDefinition>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type definition.
    ///
    /// A second definition under an already-registered name is rejected;
    /// the registry keeps the first.
    pub fn add_type(&mut self, definition: TypeDefinition) -> Result<(), Diag> {
        let name = definition.name().clone();
        if let Some(existing) = self.types.get(&name) {
            return Err(Diag::error(format!("The type '{name}' is defined twice"))
                .with_primary_label(definition.span().clone(), "redefined here")
                .with_secondary_label(existing.span().clone(), "first defined here"));
        }
        self.types.insert(name, definition);
        Ok(())
    }

    /// Registers a type extension. Extensions of the same name accumulate.
    pub fn add_type_extension(&mut self, extension: TypeExtensionDefinition) {
        self.extensions
            .entry(extension.name.clone())
            .or_default()
            .push(extension);
    }

    /// Sets the explicit schema definition, replacing any previous one.
    pub fn set_schema_definition(&mut self, definition: SchemaDefinition) {
        self.schema = Some(definition);
    }

    /// Returns the explicit schema definition, if one was parsed.
    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema.as_ref()
    }

    /// Looks up a type definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// True if the base name of the given type reference is registered.
    ///
    /// The standard scalars resolve without being declared; only custom
    /// scalars appear in the registry itself.
    pub fn has_type(&self, type_ref: &Type) -> bool {
        let name = type_ref.base_name();
        self.types.contains_key(name) || STANDARD_SCALARS.contains(&name)
    }

    /// All registered type definitions, in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// All type extensions, grouped by base name, in insertion order.
    pub fn type_extensions(&self) -> &IndexMap<SmolStr, Vec<TypeExtensionDefinition>> {
        &self.extensions
    }

    /// All type extensions in one flat insertion-ordered sequence.
    pub fn all_type_extensions(&self) -> impl Iterator<Item = &TypeExtensionDefinition> {
        self.extensions.values().flatten()
    }

    /// The registered object types.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::Object(d) => Some(d),
            _ => None,
        })
    }

    /// The registered interface types.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::Interface(d) => Some(d),
            _ => None,
        })
    }

    /// The registered union types.
    pub fn unions(&self) -> impl Iterator<Item = &UnionTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::Union(d) => Some(d),
            _ => None,
        })
    }

    /// The registered enum types.
    pub fn enums(&self) -> impl Iterator<Item = &EnumTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::Enum(d) => Some(d),
            _ => None,
        })
    }

    /// The registered input object types.
    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::InputObject(d) => Some(d),
            _ => None,
        })
    }

    /// The registered custom scalar types.
    pub fn scalars(&self) -> impl Iterator<Item = &ScalarTypeDefinition> {
        self.types.values().filter_map(|def| match def {
            TypeDefinition::Scalar(d) => Some(d),
            _ => None,
        })
    }
}
