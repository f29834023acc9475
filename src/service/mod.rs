//! Business logic services for the ingestion pipeline.
//!
//! Services coordinate fetching from upstream providers, deduplicating
//! postings against the canonical store, rotating API quota, matching new
//! postings against user preferences, and fanning hiring signals out to
//! tracking users. Repositories do the store I/O; services own the rules.

pub mod company;
pub mod ingest;
pub mod job;
pub mod matcher;
pub mod rotation;
pub mod signal;
pub mod source;
