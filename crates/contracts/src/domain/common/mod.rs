//! Common types shared by stock aggregates

pub mod amount;
pub mod catalog_ref;
pub mod id;

// Re-exports
pub use catalog_ref::{ProductRef, VendorRef};
