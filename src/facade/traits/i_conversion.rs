use std::io::Write;
use crate::error::ConvertError;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調目錄轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依目錄列出順序轉換所有 .webp 項目，遇到第一個錯誤即中止
    /// # 參數
    /// - input: 要掃描的工作目錄
    /// - out: 每轉換一個檔案寫入一行狀態訊息
    /// # 回傳
    /// - 成功時返回已轉換的檔案列表，失敗時返回對應種類的錯誤
    fn execute_conversion(
        &self,
        input: ConversionInput,
        out: &mut dyn Write,
    ) -> Result<ConversionOutput, ConvertError>;
}
