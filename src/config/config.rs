use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "webp_to_png",
    about = "將目錄中的 WEBP 圖片轉換為 PNG 格式",
    long_about = "掃描目錄（預設為目前工作目錄，不遞迴）中所有以 .webp 結尾的檔案，解碼後以 PNG 格式寫入同一目錄，檔名以 .png 取代原副檔名。\n已存在的同名 PNG 會被直接覆寫，任何錯誤都會立即中止執行。"
)]
pub struct Cli {
    /// 要掃描的目錄，省略時使用目前工作目錄
    pub dir: Option<String>,
    #[arg(long, default_value = "warn", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    if !path.is_dir() {
        log::error!("輸入路徑不是目錄：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("輸入路徑 '{}' 不是目錄", input)
        ));
    }
    Ok(path)
}
