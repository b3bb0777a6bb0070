//! # API Access Layer
//!
//! Resolves request URLs against the configured base address and performs
//! JSON requests against the matching backend.
//!
//! - [`client`]: `resolve_base`, `resolve_path`, `ApiClient`, `ApiError`
//! - [`types`]: wire schemas per endpoint and their adapters
//! - [`backend`]: the `ConsoleBackend` trait screens fetch through

pub mod backend;
pub mod client;
pub mod types;

pub use backend::ConsoleBackend;
pub use client::{ApiClient, ApiError, resolve_base, resolve_path};
