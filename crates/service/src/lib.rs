//! Service layer for tender records.
//! - `TenderRepository` hides the persistence technology behind a trait.
//! - `TenderService` is the seam the HTTP layer talks to.

pub mod tender;
#[cfg(test)]
pub mod test_support;
