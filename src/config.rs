use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::superheater::UnitKind;

/// 기본 설정 파일 경로.
pub const DEFAULT_SETTINGS_PATH: &str = "config.toml";

/// 과열기별 상수 파일 경로.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitFiles {
    pub platen: PathBuf,
    #[serde(rename = "final")]
    pub final_: PathBuf,
}

impl Default for UnitFiles {
    fn default() -> Self {
        Self {
            platen: PathBuf::from("config/platen_superheater.yaml"),
            final_: PathBuf::from("config/final_superheater.yaml"),
        }
    }
}

/// 계단 응답 계산 기본값. 기본 10분을 600개로 나눈다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseSettings {
    pub horizon_s: f64,
    pub samples: usize,
}

impl Default for ResponseSettings {
    fn default() -> Self {
        Self {
            horizon_s: 600.0,
            samples: 600,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RUST_LOG 가 없을 때 쓰는 tracing 필터
    pub log_filter: String,
    pub unit_files: UnitFiles,
    pub response: ResponseSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            unit_files: UnitFiles::default(),
            response: ResponseSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하고, 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 과열기 종류에 해당하는 상수 파일 경로.
    pub fn unit_file(&self, kind: UnitKind) -> &Path {
        match kind {
            UnitKind::Platen => &self.unit_files.platen,
            UnitKind::Final => &self.unit_files.final_,
        }
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
