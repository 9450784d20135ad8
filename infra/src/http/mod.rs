//! HTTP access layer over reqwest

mod client;

pub use client::HttpApiClient;
