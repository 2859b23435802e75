mod anonymous;
pub use anonymous::AnonymousValue;

mod binding;
pub use binding::Binding;

mod fill;
pub use fill::{
    add_anonymous_parameter, add_parameter, populate, populate_all, project_parameters,
};

mod load;
pub use load::{coerce, Load, Target};

mod member;
pub use member::{Member, MemberKind};

mod model;
pub use model::{schema, Model, ScalarSchema, Schema, SchemaKind};

mod procedure;
pub use procedure::{ProcedureConfig, Procedures};

mod response;
pub use response::Response;

mod store;
pub use store::{Param, Store, StructuredType};

mod structured;
pub use structured::{Structured, TableRow};

pub use dbfill_core::{
    async_trait, bail,
    driver::{self, Command, Connection, Cursor, Driver, Parameter, ResultSet, Statement},
    err,
    schema::{Directive, FillDirection, StorageType},
    stmt::{self, Value},
    Error, Result,
};

pub use dbfill_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        coerce, Directive, FillDirection, Member, Model, Param, Result, Schema, StorageType,
        Store, Value,
    };
}
