//! Infrastructure layer - database connection and schema.

mod db;
mod schema;

pub use db::{connect_options, Database, HELD_CONNECTION_TIMEOUT};
pub use schema::users_table;
