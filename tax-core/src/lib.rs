pub mod calculations;
pub mod input;
pub mod models;
pub mod store;

pub use calculations::TaxCalculator;
pub use input::sanitize;
pub use models::*;
pub use store::{InputStore, MemoryStore, StoreError};
