pub mod bands;
pub mod connection;
pub mod countries;
pub mod edges;
pub mod models;
pub mod setup;
pub mod themes;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
