//! Data shapes exchanged with the remote posts API.

mod number;
pub mod post;
pub mod user;

pub use post::*;
pub use user::*;
