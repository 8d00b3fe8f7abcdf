use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone)]
pub struct FileCollectInput {
    pub work_dir: PathBuf,
}

// 目錄項目名稱，依列出順序排列，保留作業系統原始編碼
#[derive(Debug)]
pub struct FileCollectOutput {
    pub names: Vec<OsString>,
}
