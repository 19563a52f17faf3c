//! Animal records: model, queries, and CRUD handlers.

pub mod db;
pub mod handlers;

pub use db::Animal;
