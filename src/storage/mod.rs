// storage/mod.rs
// Spatial database operations module

pub mod insert;
pub mod pool;
pub mod schema;

// Re-export commonly used items
pub use insert::insert_observation;
pub use pool::init_spatial_pool;
pub use schema::{create_spatial_index, init_schema};
