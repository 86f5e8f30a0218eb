//! Product catalogue module.
//!
//! Contains the product, colour variant, and size availability types.

mod product;

pub use product::{Product, SizeAvailability, Variant};
