use crate::{Directive, FillDirection, Member, Param, Result, Value};

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{OnceLock, RwLock},
};

/// A type that can be projected into command parameters and populated from rows.
///
/// Usually implemented with `#[derive(Model)]`. Hand-written implementations
/// return a [`Schema`] listing the type's bindable members.
pub trait Model: Sized + 'static {
    /// Builds the mapping schema of the type.
    ///
    /// Called at most once per type; use [`schema`] to get the cached result.
    fn build_schema() -> Schema<Self>;
}

/// Mapping schema of a model type.
pub struct Schema<M> {
    /// Type name, used in error messages
    pub name: &'static str,

    /// Type-level directive
    pub directive: Option<Directive>,

    pub kind: SchemaKind<M>,
}

pub enum SchemaKind<M> {
    /// A model mapped member by member
    Record(Vec<Member<M>>),

    /// A model mapped as one value under a runtime name
    Scalar(ScalarSchema<M>),
}

pub struct ScalarSchema<M> {
    pub alias: for<'a> fn(&'a M) -> &'a str,
    pub get: for<'a> fn(&'a M) -> Param<'a>,
    pub set: fn(&mut M, Value) -> Result<()>,
}

impl<M> Schema<M> {
    pub fn record(
        name: &'static str,
        directive: Option<Directive>,
        members: Vec<Member<M>>,
    ) -> Self {
        Self {
            name,
            directive,
            kind: SchemaKind::Record(members),
        }
    }

    pub fn scalar(
        name: &'static str,
        alias: for<'a> fn(&'a M) -> &'a str,
        get: for<'a> fn(&'a M) -> Param<'a>,
        set: fn(&mut M, Value) -> Result<()>,
    ) -> Self {
        Self {
            name,
            directive: None,
            kind: SchemaKind::Scalar(ScalarSchema { alias, get, set }),
        }
    }

    /// Bindable members, in declaration order. Empty for scalar schemas.
    pub fn members(&self) -> &[Member<M>] {
        match &self.kind {
            SchemaKind::Record(members) => members,
            SchemaKind::Scalar(_) => &[],
        }
    }

    pub fn member(&self, name: &str) -> Option<&Member<M>> {
        self.members().iter().find(|member| member.name == name)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, SchemaKind::Scalar(_))
    }

    /// Direction of the type-level directive, if any.
    pub fn fill_direction(&self) -> Option<FillDirection> {
        self.directive.map(|directive| directive.fill_direction)
    }
}

impl<M> core::fmt::Debug for Schema<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("directive", &self.directive)
            .field("members", &self.members())
            .field("scalar", &self.is_scalar())
            .finish()
    }
}

type Registry = RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the schema of `M`, building it on first use.
///
/// Schemas live for the rest of the process and are never rebuilt.
pub fn schema<M: Model>() -> &'static Schema<M> {
    let registry = REGISTRY.get_or_init(Registry::default);
    let id = TypeId::of::<M>();

    let cached = registry
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(&id)
        .copied();

    let entry = match cached {
        Some(entry) => entry,
        None => {
            // Built with no lock held: `build_schema` may look up other schemas.
            let built = Box::new(M::build_schema());

            let mut map = registry
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            let entry = *map.entry(id).or_insert_with(move || {
                let schema: &'static (dyn Any + Send + Sync) = Box::leak(built);
                schema
            });
            entry
        }
    };

    match entry.downcast_ref::<Schema<M>>() {
        Some(schema) => schema,
        None => unreachable!(
            "schema registered under the type id of `{}`",
            core::any::type_name::<M>()
        ),
    }
}
