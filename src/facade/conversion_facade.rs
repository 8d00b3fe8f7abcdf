use std::io::Write;
use log::{debug, info};
use crate::error::ConvertError;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput, ConvertedFile};
use crate::models::file::FileCollectInput;
use crate::models::image::{ImageDecodeInput, ImageEncodeInput};
use crate::service::traits::i_service::{CodecServiceTrait, FileServiceTrait};
use crate::utils::utils::{derive_output_name, format_status_line, is_source_file};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    codec_service: Box<dyn CodecServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        codec_service: Box<dyn CodecServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            codec_service,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(
        &self,
        input: ConversionInput,
        out: &mut dyn Write,
    ) -> Result<ConversionOutput, ConvertError> {
        let work_dir = input.work_dir;
        info!("開始轉換，工作目錄：{}", work_dir.display());

        let file_output = self.file_service.collect_files(FileCollectInput {
            work_dir: work_dir.clone(),
        })?;

        let mut converted = Vec::new();
        for name in file_output.names {
            if !is_source_file(&name) {
                debug!("略過非 WEBP 項目：{}", name.to_string_lossy());
                continue;
            }

            let image = self.codec_service.decode(ImageDecodeInput {
                source_path: work_dir.join(&name),
            })?;

            let destination = derive_output_name(&name);
            self.codec_service.encode(ImageEncodeInput {
                image,
                destination_path: work_dir.join(&destination),
            })?;

            writeln!(out, "{}", format_status_line(&name, &destination))
                .map_err(ConvertError::Report)?;
            converted.push(ConvertedFile {
                source: name,
                destination,
            });
        }

        info!("轉換結束，共轉換 {} 個檔案", converted.len());
        Ok(ConversionOutput {
            work_dir,
            converted,
        })
    }
}
