use std::io;
use std::path::PathBuf;
use crate::error::ConvertError;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub work_dir: PathBuf,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<ConversionOutput, ConvertError>;
}
