//! Shared building blocks for the tender backend crates.

pub mod types;
pub mod utils;
