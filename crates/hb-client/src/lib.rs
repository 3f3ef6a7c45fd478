pub mod context;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod session;

pub use context::{SessionContext, SessionState};
pub use dashboard::{DashboardClient, DashboardSettings};
pub use error::{ClientError, Result as ClientResult};
pub use fetch::{FetchSession, HttpSessionFetch};
pub use session::{Session, SessionUser};
