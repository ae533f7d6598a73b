//! Notifications from the engine to its collaborators.
//!
//! The engine calls a [`NotificationSink`] at each observable transition.
//! It never reads anything back from the sink.
//!
//! - [`RecordingSink`]: keeps [`Notification`] records, used by tests and
//!   by transports that render after the action returns
//! - [`LogSink`]: one `log` line per notification
//! - [`NullSink`]: discards everything

mod notification;
mod sink;

pub use notification::{Notification, Roster};
pub use sink::{LogSink, NotificationSink, NullSink, RecordingSink};
