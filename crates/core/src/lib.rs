//! Domain types, slot computation, and the error taxonomy shared by the
//! SlotBook crates. This crate performs no I/O.

pub mod errors;
pub mod models;
pub mod slots;
