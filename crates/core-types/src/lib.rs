pub mod structs;

// Re-export the core types to provide a clean public API.
pub use structs::{Trade, User};
