use thiserror::Error;

/// 실행 중 발생하는 운영 에러
///
/// ISBN 자체의 검증 실패는 에러가 아니라 `Verdict`로 반환됩니다.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prompt failed: {0}")]
    PromptError(String),
}

impl From<dialoguer::Error> for CheckerError {
    fn from(err: dialoguer::Error) -> Self {
        CheckerError::PromptError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
