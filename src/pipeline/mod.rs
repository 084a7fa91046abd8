//! Session Pipeline
//!
//! ```text
//! control event → validate → derive → alert log → history → suggestions
//! query event   → respond → query + response log
//! ```
//!
//! Single-threaded and synchronous. The `SessionController` is the only
//! owner of mutable session state.

mod error;
mod history;
mod session;

pub use error::{validate_control, ControlError, SessionError};
pub use history::HistoryBuffer;
pub use session::{SessionController, SessionSnapshot};
