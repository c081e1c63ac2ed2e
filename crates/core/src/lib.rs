//! Domain building blocks for the pages service.
//!
//! Holds the page model, the domain error type, and the in-memory
//! [`store::PageStore`] that owns every page for the life of the process.
//! Nothing in here knows about HTTP.

pub mod error;
pub mod page;
pub mod store;
pub mod types;
