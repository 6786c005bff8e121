//! Error types

mod api;
mod server;

pub use api::*;
pub use server::*;
