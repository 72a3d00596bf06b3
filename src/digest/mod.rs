//! Presentation of a finished digest: the full report and the short notification.

pub mod notification;
pub mod report;

pub use notification::{DEFAULT_MAX_ITEMS, NO_UNREAD_MESSAGE, build_digest_message};
pub use report::{EMPTY_REPORT_PLACEHOLDER, render_report, render_report_at};
