//! Pinfluencer backend: brands, influencers, products and campaigns.
//!
//! Processors run against SQLite-backed repositories and an object store for
//! images. They are served over HTTP by [`app::create_app`] or invoked one
//! event at a time with the `invoke` command.

pub mod app;
pub mod config;
pub mod context;
pub mod images;
pub mod processors;
pub mod state;
pub mod storage;
