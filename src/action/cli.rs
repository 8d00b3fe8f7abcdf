use std::io;
use clap::Parser;
use crate::config::config::{Cli, validate_input_path};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::ConvertError;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_args() -> Result<ConversionOutput, ConvertError> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = select_config_service(cli).get_config()?;
    log::info!("使用配置：{:?}", config);

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// 未提供目錄時掃描目前工作目錄
pub fn select_config_service(cli: Cli) -> ConfigService {
    let config_port: Box<dyn ConfigPort> = match cli.dir {
        Some(dir) => Box::new(CliConfigAdapter::new(dir)),
        None => {
            log::info!("未提供目錄參數，使用目前工作目錄");
            Box::new(DefaultConfigAdapter)
        }
    };
    ConfigService::new(config_port)
}

// CLI 配置適配器：掃描命令列指定的目錄
pub struct CliConfigAdapter {
    dir: String,
}

impl CliConfigAdapter {
    pub fn new(dir: String) -> Self {
        CliConfigAdapter { dir }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let work_dir = validate_input_path(&self.dir)?.to_path_buf();
        Ok(AppConfig { work_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_dir_uses_current_dir() {
        let config = select_config_service(cli(&["webp_to_png"])).get_config().unwrap();
        assert_eq!(config.work_dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_dir_argument_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let config = select_config_service(cli(&["webp_to_png", dir_str, "--log-level", "error"]))
            .get_config()
            .unwrap();
        assert_eq!(config.work_dir, dir.path());
    }

    #[test]
    fn test_missing_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let result = select_config_service(cli(&["webp_to_png", missing.to_str().unwrap()])).get_config();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
