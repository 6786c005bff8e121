//! Admin front-end core for the cadet recruitment backend.
//!
//! Per-entity page controllers own listing queries (page, page size, sort,
//! search) and feed fetched pages into [`muster_grid`] grids. A permission
//! oracle gates navigation by the signed-in role, and modal state machines
//! drive the create/edit/delete/import/email workflows. Rendering is left
//! to whatever front end consumes the view snapshots.

pub mod app;
pub mod controller;
pub mod error;
pub mod menu;
pub mod modals;
pub mod notify;
pub mod pages;
pub mod permissions;
pub mod roles;

pub use app::{AdminApp, AppConfig};
pub use error::AdminError;
