//! API error taxonomy and HTTP conversion.

pub mod conversion;
pub mod types;

pub use conversion::not_found;
pub use types::ApiError;
