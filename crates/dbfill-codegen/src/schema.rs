mod directive;
pub(crate) use directive::{Direction, DirectiveAttr};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod name;
pub(crate) use name::{member_name, RenameRule};
