use std::path::PathBuf;
use image::DynamicImage;

#[derive(Clone)]
pub struct ImageDecodeInput {
    pub source_path: PathBuf,
}

pub struct ImageEncodeInput {
    pub image: DynamicImage,
    pub destination_path: PathBuf,
}
