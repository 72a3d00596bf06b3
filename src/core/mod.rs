//! Configuration and domain models shared by every stage of the digest.

pub mod config;
pub mod models;
