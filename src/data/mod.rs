//! Data repositories for the canonical store.
//!
//! Each repository wraps the store operations for one table and is the only
//! contract point between the ingestion pipeline and the persistence layer.
//! Business rules (dedup policy, lookup-or-create, matching) live in the
//! service layer, not here.

pub mod alert;
pub mod company;
pub mod job;
pub mod preference;
pub mod rotation;
pub mod signal;
pub mod track;
