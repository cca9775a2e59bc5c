//! Log buffer with levels for on-device log viewing.
//!
//! A fixed ring of [`LogEntry`] values, shown on the log page. The buffer is
//! owned by the top-level controller and passed to whoever logs; there is no
//! global instance.
//!
//! # Usage
//!
//! ```ignore
//! use watchface_common::{log_info, log_warn};
//!
//! log_info!(log, "inbox: {} tuples", dict.len());
//! log_warn!(log, "config ignored: {}", err);
//! ```
//!
//! With the `defmt` feature the macros also forward to the matching
//! `defmt` level, so the format arguments must implement both `Display` and
//! `defmt::Format`.

use heapless::String;

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Single-character prefix shown on the log page.
    pub const fn prefix(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Sequence number since start-up. Survives ring wrap-around so the log
    /// page can show how much was dropped.
    pub seq: u32,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
        seq: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars().take(LOG_MSG_LEN - 1) {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            seq,
        }
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    next_seq: u32,
}

impl LogBuffer {
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    seq: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
            next_seq: 0,
        }
    }

    /// Append a message. The oldest entry is dropped when full.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        self.entries[self.head] = LogEntry::new(level, message, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    #[inline]
    pub const fn len(&self) -> usize { self.count }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Total entries ever pushed, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.next_seq }

    /// Newest entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_to_buffer {
    ($log:expr, $level:expr, $($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut buf: $crate::__heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> =
            $crate::__heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $log.push($level, buf.as_str());
    }};
}

#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_forward {
    (debug, $($arg:tt)*) => { $crate::__defmt::debug!($($arg)*) };
    (info, $($arg:tt)*) => { $crate::__defmt::info!($($arg)*) };
    (warn, $($arg:tt)*) => { $crate::__defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { $crate::__defmt::error!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_forward {
    ($level:ident, $($arg:tt)*) => {};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => {{
        $crate::__log_to_buffer!($log, $crate::log_buffer::LogLevel::Debug, $($arg)*);
        $crate::__log_forward!(debug, $($arg)*);
    }};
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => {{
        $crate::__log_to_buffer!($log, $crate::log_buffer::LogLevel::Info, $($arg)*);
        $crate::__log_forward!(info, $($arg)*);
    }};
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => {{
        $crate::__log_to_buffer!($log, $crate::log_buffer::LogLevel::Warn, $($arg)*);
        $crate::__log_forward!(warn, $($arg)*);
    }};
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)*) => {{
        $crate::__log_to_buffer!($log, $crate::log_buffer::LogLevel::Error, $($arg)*);
        $crate::__log_forward!(error, $($arg)*);
    }};
}
