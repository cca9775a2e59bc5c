//! Screen modules other than the watch face itself.

mod log;

pub use log::draw_log_page;
