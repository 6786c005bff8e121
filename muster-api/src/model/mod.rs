//! Wire models for muster entities

mod activity_log;
mod cadet;
mod institute;
mod permission;
mod upload;
mod user;

pub use activity_log::*;
pub use cadet::*;
pub use institute::*;
pub use permission::*;
pub use upload::*;
pub use user::*;
