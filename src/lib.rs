// src/lib.rs

pub mod config;
pub mod fetch;
pub mod query;
pub mod resource;
pub mod store;
