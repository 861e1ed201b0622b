//! ictus-narrative
//!
//! Medical-record text built from a scored NIHSS exam: per-item
//! component lists and the structured neurologic-examination block.
//! Pure string assembly — rendering and clipboard belong to the
//! presentation layer.

pub mod nihss;
