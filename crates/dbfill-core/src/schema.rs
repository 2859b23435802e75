mod directive;
pub use directive::{Directive, FillDirection};

mod storage_type;
pub use storage_type::StorageType;
