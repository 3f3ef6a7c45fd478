pub mod error;
pub mod header_contract;
pub mod identity;

pub use error::{AuthError, Result};
pub use header_contract::HeaderContract;
pub use identity::Identity;
