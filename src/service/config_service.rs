use std::io;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責從選定的配置適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：掃描目前工作目錄
pub struct DefaultConfigAdapter;

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            work_dir: std::env::current_dir()?,
        })
    }
}
