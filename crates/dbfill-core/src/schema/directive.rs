use super::StorageType;

/// Which way a model or member participates in mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillDirection {
    /// Populated from result rows only.
    FromStore,

    /// Sent to the store as a parameter only.
    ToStore,

    /// Both populated from rows and sent as a parameter.
    #[default]
    Both,

    /// Never touched by mapping.
    None,
}

impl FillDirection {
    /// Returns `true` if inbound mapping assigns members with this direction.
    pub const fn reads_from_store(self) -> bool {
        matches!(self, Self::FromStore | Self::Both)
    }

    /// Returns `true` if outbound mapping emits parameters for members with this direction.
    pub const fn writes_to_store(self) -> bool {
        matches!(self, Self::ToStore | Self::Both)
    }
}

/// Mapping metadata attached to a model type or to one of its members.
///
/// A type-level directive supplies defaults for every member of the type; a
/// member-level directive overrides them. Directives are declared once, with
/// `#[dbfill(...)]`, and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Column or parameter name to use instead of the member's own name.
    pub alias: Option<&'static str>,

    /// Prepended to the resolved name of outbound parameters.
    pub parameter_prefix: Option<&'static str>,

    /// Appended to the resolved name of outbound parameters.
    pub parameter_suffix: Option<&'static str>,

    pub fill_direction: FillDirection,

    /// When `true`, a missing column is skipped instead of reported.
    pub allow_missing: bool,

    /// Explicit storage type for outbound parameters (e.g. `DateTime2` rather than `DateTime`).
    pub storage_type: Option<StorageType>,
}

impl Directive {
    pub const fn new() -> Self {
        Self {
            alias: None,
            parameter_prefix: None,
            parameter_suffix: None,
            fill_direction: FillDirection::Both,
            allow_missing: false,
            storage_type: None,
        }
    }

    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub const fn parameter_prefix(mut self, prefix: &'static str) -> Self {
        self.parameter_prefix = Some(prefix);
        self
    }

    pub const fn parameter_suffix(mut self, suffix: &'static str) -> Self {
        self.parameter_suffix = Some(suffix);
        self
    }

    pub const fn fill_direction(mut self, direction: FillDirection) -> Self {
        self.fill_direction = direction;
        self
    }

    pub const fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    pub const fn storage_type(mut self, ty: StorageType) -> Self {
        self.storage_type = Some(ty);
        self
    }
}

impl Default for Directive {
    fn default() -> Self {
        Self::new()
    }
}
