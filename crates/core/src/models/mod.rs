//! Data models for Eventera

mod category;
mod event;
mod user;

pub use category::*;
pub use event::*;
pub use user::*;
