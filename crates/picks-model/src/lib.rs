pub mod field;
pub mod hints;

pub use field::LogicalField;
pub use hints::ColumnHint;
