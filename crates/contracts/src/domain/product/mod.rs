pub mod aggregate;
pub mod csv;
pub mod fields;
pub mod views;

pub use aggregate::{Product, ProductDto, ProductId};
pub use csv::{ImportFailure, ImportOutcome};
pub use fields::{FieldValue, ProductField};
