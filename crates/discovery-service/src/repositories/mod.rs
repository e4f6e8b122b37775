//! Repository layer for the discovery read path.
//!
//! All database queries use parameterized sqlx statements against the
//! read-replica pool.

pub mod users;

pub use users::{UserReplica, UsersRepository};
