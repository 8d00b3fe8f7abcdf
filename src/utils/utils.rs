use std::ffi::{OsStr, OsString};
use std::io;

/// 來源格式的副檔名（區分大小寫）
pub const SOURCE_SUFFIX: &str = ".webp";
/// 目標格式的副檔名
pub const TARGET_SUFFIX: &str = ".png";

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

// 名稱以作業系統編碼的位元組比對，非 UTF-8 的名稱同樣適用
pub fn is_source_file(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(SOURCE_SUFFIX.as_bytes())
}

/// 取最後一個 `.` 之前的部分作為基底名稱並加上 `.png`；沒有 `.` 時整個名稱即為基底
pub fn derive_output_name(name: &OsStr) -> OsString {
    let bytes = name.as_encoded_bytes();
    let base = match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) => &bytes[..dot],
        None => bytes,
    };
    // SAFETY: 在 ASCII 字元 `.` 之前切開，前段仍是有效的編碼位元組
    let mut output = unsafe { OsStr::from_encoded_bytes_unchecked(base) }.to_os_string();
    output.push(TARGET_SUFFIX);
    output
}

pub fn format_status_line(source: &OsStr, destination: &OsStr) -> String {
    format!("Converted {} to {}", source.to_string_lossy(), destination.to_string_lossy())
}
