//! Core types for the pinfluencer marketplace backend.
//!
//! Pure data, validation and trait definitions. Nothing in this crate performs
//! I/O; the `pinfluencer` crate provides the SQLite and object-store
//! implementations behind these traits.

pub mod api;
pub mod image;
pub mod marketplace;
pub mod storage;
