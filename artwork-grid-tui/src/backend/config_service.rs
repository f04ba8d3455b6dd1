//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use artwork_grid_provider::{
    CatalogSettings, ARTIC_API_BASE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};

/// 应用目录名（位于系统配置目录下）
pub const APP_DIR_NAME: &str = "artwork-grid";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "artwork-grid.log";

/// 环境变量覆盖
pub const ENV_BASE_URL: &str = "ARTWORK_GRID_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "ARTWORK_GRID_PAGE_SIZE";
pub const ENV_LOG: &str = "ARTWORK_GRID_LOG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// `EnvFilter` directive, e.g. `info` or `artwork_grid_core=debug`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let catalog = CatalogSettings::default();
        Self {
            base_url: ARTIC_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_secs: catalog.connect_timeout_secs,
            request_timeout_secs: catalog.request_timeout_secs,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Settings handed to the catalog factory.
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }

    /// 应用环境变量覆盖，`lookup` 通常为 `std::env::var`
    ///
    /// 返回被忽略的覆盖项说明。
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) => self.page_size = size,
                Err(e) => warnings.push(format!("Ignoring {ENV_PAGE_SIZE}={raw:?}: {e}")),
            }
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        warnings
    }

    #[must_use]
    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

/// 加载结果
///
/// 配置在日志初始化之前加载，加载过程中的警告先收集起来，由调用方在日志
/// 就绪后输出。
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<LoadedConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录下的默认路径
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(app_dir()?.join(CONFIG_FILE_NAME)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置文件，不应用环境变量
    fn load_file(&self, warnings: &mut Vec<String>) -> Result<AppConfig> {
        if !self.path.exists() {
            let config = AppConfig::default();
            // 首次运行写出默认配置，便于用户编辑
            if let Err(e) = self.save(&config) {
                warnings.push(format!(
                    "Could not write default config to {}: {e:#}",
                    self.path.display()
                ));
            }
            return Ok(config);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", self.path.display()))
    }

    /// 加载配置，使用给定的环境变量查找函数
    pub fn load_with<F>(&self, lookup: F) -> Result<LoadedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let mut config = self.load_file(&mut warnings)?;
        warnings.extend(config.apply_overrides(lookup));
        Ok(LoadedConfig {
            config: config.normalized(),
            warnings,
        })
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<LoadedConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))
    }
}

/// `{config_dir}/artwork-grid`
pub fn app_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine the system config directory")
}

/// `{config_dir}/artwork-grid/artwork-grid.log`
pub fn log_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(LOG_FILE_NAME))
}
