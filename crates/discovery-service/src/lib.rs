//! Discovery Service read path
//!
//! This library provides the user/replica read path for a discovery service
//! that indexes a decentralized content-storage network's replica
//! assignments. Each user carries a delimited content-node endpoint list:
//! the first entry is the user's primary replica, the rest are secondaries
//! in priority order.
//!
//! The crate owns two things:
//!
//! - The "users by primary node" query: all current creator users whose
//!   primary replica is a given content node and who also have a configured
//!   secondary replica.
//! - Replica-set parsing: turning the raw endpoint list into typed
//!   primary/secondary roles, reusable anywhere the list shows up.
//!
//! Routing, pagination, and user-metadata enrichment belong to the embedding
//! service; this crate owns query semantics and row conversion.
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `db` - Read-replica pool construction
//! - `errors` - Error types
//! - `observability` - Tracing init and metrics
//! - `replica` - Replica-set parsing and role derivation
//! - `repositories` - Database read queries

pub mod config;
pub mod db;
pub mod errors;
pub mod observability;
pub mod replica;
pub mod repositories;
