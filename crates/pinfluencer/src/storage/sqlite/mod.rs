//! SQLite storage backend.
//!
//! Uses `rusqlite` for the queries and `tokio-rusqlite` to run them on a
//! dedicated thread. The generic [`table::Table`] is composed into
//! user-scoped and owner-scoped wrappers, which the concrete repositories
//! expose through the traits in `pinfluencer_core::storage`.

mod conversions;
mod database;
mod entities;
mod error;
mod owner_scoped;
mod repository;
mod schema;
mod table;
mod user_scoped;

pub use database::Database;
pub use repository::{
    SqliteBrandRepository, SqliteCampaignRepository, SqliteInfluencerRepository,
    SqliteProductRepository,
};
