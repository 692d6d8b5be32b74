use crate::error::{CheckerError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 결과 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// isbn-checker 사용자 설정
///
/// 설정 파일은 ~/.isbn-checker/config.toml에 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 컬러 출력 여부
    #[serde(default = "default_color")]
    pub color: bool,

    /// 기본 출력 형식 (text, json)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// 배치 결과 요약 출력 여부
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,

    /// 이 개수 이상이면 진행률 표시
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: usize,
}

fn default_color() -> bool {
    true
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_show_summary() -> bool {
    true
}

fn default_progress_threshold() -> usize {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            output_format: default_output_format(),
            show_summary: default_show_summary(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

impl Config {
    /// 기본 설정 파일 경로
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".isbn-checker")
            .join("config.toml")
    }

    /// 기본 경로에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// 지정한 경로에서 로드 (없으면 기본값 사용)
    ///
    /// # Examples
    /// ```
    /// use isbn_checker::config::Config;
    ///
    /// let config = Config::load_from(std::path::Path::new("/nonexistent/config.toml")).unwrap();
    /// assert_eq!(config, Config::default());
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CheckerError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// 지정한 경로에 저장 (디렉토리가 없으면 생성)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CheckerError::ConfigError(e.to_string()))?;

        fs::write(path, toml_string)?;

        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        let path = Self::default_path();
        Self::default().save_to(&path)?;
        Ok(path)
    }
}
