pub mod notices;

pub use notices::{report_error, use_notices, NoticeProvider};
