use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
///
/// Transactions store this rendered form directly; the persisted file keeps
/// whatever was recorded, so the format must stay stable.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
