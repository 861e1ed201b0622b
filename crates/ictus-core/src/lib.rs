//! ictus-core
//!
//! Pure domain types shared across the Ictus engines — the vocabulary of
//! the system. No engine logic, no I/O.

pub mod models;
