//! Muster API client library
//!
//! A Rust async client for the muster recruitment backend: institutes,
//! cadets, admin users, activity logs, and role permissions over a
//! bearer-authenticated REST API.

pub mod api;
pub mod error;
pub mod model;
pub mod session;

mod client;

pub use client::*;
pub use error::ApiError;
pub use session::SessionContext;
pub use session::SessionUser;
