//! Route configuration and shared response types.

pub mod responses;
pub mod router;

pub use router::create_router;
