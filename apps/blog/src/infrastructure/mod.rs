// Infrastructure layer module
// SQLite adapters for the domain repository contracts

pub mod database;
pub mod repositories;
