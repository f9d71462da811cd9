//! Trait abstractions implemented by storage backends.

pub mod store;

pub use store::DocumentStore;
