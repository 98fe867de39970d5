// Library surface: the activity model, its validation and storage, and the
// session controller that a map/form/list frontend drives.
pub mod activity;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod persistence;
pub mod runtime;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod ui;
pub mod validation_policy;

pub use activity::{Activity, ActivityDetails, ActivityKind, Coordinates, Locale};
pub use error::{PersistenceError, SessionError, ValidationError};
pub use session::{init_session, SessionController, SessionState};
