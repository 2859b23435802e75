use crate::{Directive, Param, Result, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A stored field
    Field,

    /// A computed accessor pair
    Accessor,
}

/// A readable and writable member of a model.
///
/// Fields and accessors behave identically during mapping; the kind is
/// informational only.
pub struct Member<M> {
    /// Member name, used when no alias is given
    pub name: &'static str,

    /// Rust type of the member
    pub declared_type: &'static str,

    pub kind: MemberKind,

    /// Member-level directive
    pub directive: Option<Directive>,

    get: for<'a> fn(&'a M) -> Param<'a>,
    set: fn(&mut M, Value) -> Result<()>,
}

impl<M> Member<M> {
    pub fn field(
        name: &'static str,
        declared_type: &'static str,
        directive: Option<Directive>,
        get: for<'a> fn(&'a M) -> Param<'a>,
        set: fn(&mut M, Value) -> Result<()>,
    ) -> Self {
        Self {
            name,
            declared_type,
            kind: MemberKind::Field,
            directive,
            get,
            set,
        }
    }

    pub fn accessor(
        name: &'static str,
        declared_type: &'static str,
        directive: Option<Directive>,
        get: for<'a> fn(&'a M) -> Param<'a>,
        set: fn(&mut M, Value) -> Result<()>,
    ) -> Self {
        Self {
            kind: MemberKind::Accessor,
            ..Self::field(name, declared_type, directive, get, set)
        }
    }

    /// Reads the member's current value.
    pub fn get<'a>(&self, model: &'a M) -> Param<'a> {
        (self.get)(model)
    }

    /// Assigns the member from a raw cell.
    pub fn set(&self, model: &mut M, value: Value) -> Result<()> {
        (self.set)(model, value)
    }
}

impl<M> core::fmt::Debug for Member<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("kind", &self.kind)
            .field("directive", &self.directive)
            .finish()
    }
}
