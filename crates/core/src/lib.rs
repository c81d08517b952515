//! `jobport-core` -- pure domain logic of the application wizard.
//!
//! Roles, reference tables, the address cascade, form validation, the
//! backend endpoint table, the step controller and review flattening.
//! Nothing in this crate performs I/O.

pub mod address;
pub mod endpoints;
pub mod error;
pub mod reference;
pub mod review;
pub mod roles;
pub mod types;
pub mod validation;
pub mod wizard;
