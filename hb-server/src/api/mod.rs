pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod session;
