mod table;
pub use table::{Record, TableColumn, TableValue};

mod value;
pub use value::Value;

mod value_chrono;

mod value_num;

mod value_uuid;
