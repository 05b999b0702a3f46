//! Tender module: repository, service and dashboard statistics.

pub mod repository;
pub mod service;
pub mod stats;

pub use repository::{SeaOrmTenderRepository, TenderRepository};
pub use service::TenderService;
pub use stats::TenderStats;
