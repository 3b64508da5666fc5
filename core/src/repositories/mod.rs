//! Repository interfaces for persistence, with in-memory mocks for testing.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
