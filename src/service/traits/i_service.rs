use image::DynamicImage;
use crate::error::ConvertError;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::image::{ImageDecodeInput, ImageEncodeInput};

// File 服務接口，負責列出目錄項目
pub trait FileServiceTrait: Send + Sync {
    /// 列出工作目錄第一層的所有項目名稱（不遞迴）
    /// # 參數
    /// - input: 要列出的工作目錄
    /// # 回傳
    /// - 成功時返回項目名稱列表，順序與系統列出的順序相同；失敗時返回 Listing 錯誤
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConvertError>;
}

// 編解碼服務接口，負責讀取來源圖片與寫入目標圖片
pub trait CodecServiceTrait: Send + Sync {
    /// 解碼來源圖片
    /// # 回傳
    /// - 成功時返回記憶體中的圖片，失敗時返回 Decode 錯誤
    fn decode(&self, input: ImageDecodeInput) -> Result<DynamicImage, ConvertError>;

    /// 以 PNG 格式編碼並寫入目標路徑，已存在的檔案會被覆寫
    fn encode(&self, input: ImageEncodeInput) -> Result<(), ConvertError>;
}
