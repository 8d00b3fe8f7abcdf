use std::fs;
use log::debug;
use crate::error::ConvertError;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;

/// File 服務，列出單一層目錄的項目名稱並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConvertError> {
        let listing_error = |source| ConvertError::Listing {
            dir: input.work_dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&input.work_dir).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            names.push(entry.file_name());
        }
        debug!("目錄 {} 共有 {} 個項目", input.work_dir.display(), names.len());
        Ok(FileCollectOutput { names })
    }
}
