use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub work_dir: PathBuf,
}

// 單一檔案的轉換結果，僅記錄名稱，不含完整路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: OsString,
    pub destination: OsString,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub work_dir: PathBuf,
    pub converted: Vec<ConvertedFile>,
}
