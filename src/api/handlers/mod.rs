//! HTTP request handlers.
//!
//! Each handler module corresponds to a single endpoint.

pub mod front;
pub mod generate;
pub mod heartbeat;
pub mod redirect;
pub mod stats;

pub use front::front_handler;
pub use generate::generate_handler;
pub use heartbeat::heartbeat_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
