//! # Plivo
//!
//! Client library for the Plivo REST API address verification resources.

pub mod address;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod upload;

pub use client::PlivoClient;
pub use config::Config;
pub use error::PlivoError;
