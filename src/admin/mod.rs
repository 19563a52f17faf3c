//! Administrative user management (admin-only routes).

pub mod handlers;
