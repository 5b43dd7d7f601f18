pub mod app;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod models;
pub mod output;
pub mod select;
pub mod text;
pub mod tmdb;
