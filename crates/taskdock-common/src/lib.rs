pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PlatformError, StoreError, TaskdockError};
pub use events::{Event, EventBus};
pub use id::new_correlation_id;
pub use types::{GroupIcon, GroupId, GroupSummary, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, TaskdockError>;
