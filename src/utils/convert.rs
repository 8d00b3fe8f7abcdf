use std::io::{self, Write};
use std::path::Path;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConvertError;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::codec::CodecService;
use crate::service::file::FileService;

/// 轉換指定目錄中的所有 .webp 檔案，狀態訊息寫入 out
pub fn execute_conversion(work_dir: &Path, out: &mut dyn Write) -> Result<ConversionOutput, ConvertError> {
    let facade = ConversionFacade::new(Box::new(FileService::new()), Box::new(CodecService::new()));
    facade.execute_conversion(ConversionInput { work_dir: work_dir.to_path_buf() }, out)
}

// 轉換執行適配器：組裝預設服務，狀態訊息寫入標準輸出
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<ConversionOutput, ConvertError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        execute_conversion(&config.work_dir, &mut out)
    }
}
