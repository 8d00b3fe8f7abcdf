use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 轉換流程中可能發生的錯誤，任何一種都會中止整個執行
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 無法列出工作目錄
    #[error("無法讀取目錄 '{}'：{source}", dir.display())]
    Listing {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 無法開啟或解碼來源圖片
    #[error("無法解碼 '{}'：{source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 無法編碼或寫入目標圖片
    #[error("無法寫入 '{}'：{source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 無法輸出狀態訊息
    #[error("無法輸出轉換訊息：{0}")]
    Report(#[source] io::Error),

    /// 配置或日誌初始化失敗，例如命令列給定的目錄不存在
    #[error("配置錯誤：{0}")]
    Config(#[from] io::Error),
}

impl ConvertError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ConvertError::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, ConvertError::Encode { .. })
    }
}
