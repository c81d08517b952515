//! Static reference tables.
//!
//! Read-only lookup data shared by the schemas and the address cascade.
//! Nothing here is ever mutated at runtime.

pub mod address;
pub mod catalog;
