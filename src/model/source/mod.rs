//! Provider-specific response shapes.
//!
//! Each upstream provider gets its own decoded representation, one variant
//! per known response shape; unknown and extra fields are dropped at the
//! fetcher boundary rather than propagated into the canonical record.

pub mod adzuna;
pub mod greenhouse;
pub mod remotive;
