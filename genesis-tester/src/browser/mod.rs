pub mod artifacts;
pub mod page;
pub mod session;

pub use artifacts::{FailureCapture, failure_dir};
pub use session::{BrowserConfig, BrowserKind, new_session};
