pub mod backend;
pub mod session;
pub mod types;

pub use backend::{Browser, MockBrowser};
pub use session::DriverSession;
pub use types::{DriverConfig, DriverError, DriverResult};
