//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with its short id and stat id
//! - [`Click`] - A recorded redirect
//! - [`Stats`] - Click aggregate for one link

pub mod click;
pub mod link;
pub mod stats;

pub use click::Click;
pub use link::Link;
pub use stats::{RECENT_CLICKS_LIMIT, Stats};
