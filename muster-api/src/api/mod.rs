//! Backend operations
//!
//! One module per endpoint family. Every list operation takes a
//! [`ListQuery`](query::ListQuery) and returns a normalized
//! [`ListPage`](page::ListPage), whichever envelope shape the endpoint
//! answered with.

mod activity_logs;
mod cadets;
mod institutes;
mod permissions;
mod source;
mod users;

pub mod page;
pub mod query;

pub use activity_logs::*;
pub use cadets::*;
pub use institutes::*;
pub use permissions::*;
pub use source::*;
pub use users::*;
