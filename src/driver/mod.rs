//! Driver Module - DOP style
//!
//! Time-based sources for the morph control value.

pub mod driver_data;
pub mod driver_operations;

pub use driver_data::PingPongDriverData;
pub use driver_operations::{create_ping_pong_driver, ping_pong, sample_ping_pong};
