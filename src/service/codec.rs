use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use log::info;
use crate::error::ConvertError;
use crate::models::image::{ImageDecodeInput, ImageEncodeInput};
use crate::service::traits::i_service::CodecServiceTrait;

/// 以 image crate 實作的編解碼服務：讀取時依檔案內容判斷格式，寫入時固定為 PNG
pub struct CodecService;

impl CodecService {
    pub fn new() -> Self {
        CodecService
    }
}

impl Default for CodecService {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecServiceTrait for CodecService {
    fn decode(&self, input: ImageDecodeInput) -> Result<DynamicImage, ConvertError> {
        let decode_error = |source| ConvertError::Decode {
            path: input.source_path.clone(),
            source,
        };

        let image = ImageReader::open(&input.source_path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)?;
        info!(
            "讀取圖片：{}，尺寸：{}x{}，色彩：{:?}",
            input.source_path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    fn encode(&self, input: ImageEncodeInput) -> Result<(), ConvertError> {
        let image = to_png_layout(input.image);
        image
            .save_with_format(&input.destination_path, ImageFormat::Png)
            .map_err(|source| ConvertError::Encode {
                path: input.destination_path.clone(),
                source,
            })?;
        info!("寫入 PNG：{}", input.destination_path.display());
        Ok(())
    }
}

// PNG 沒有浮點像素格式，浮點圖片先轉為 16 位元 RGBA
fn to_png_layout(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(image.to_rgba16())
        }
        other => other,
    }
}
