//! 模拟器错误处理模块
//!
//! The combat engine itself cannot fail. These errors come from the pieces
//! around it: configuration, the battle log store and event serialization.

use thiserror::Error;

/// Errors raised outside the combat core
#[derive(Debug, Error)]
pub enum SimError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::SerializationError(err.to_string())
    }
}

/// Invalid settings picked up from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// 将错误转换为用户友好的消息
pub fn handle_error(error: &SimError) -> String {
    match error {
        SimError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Battle log location does not exist".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to write the battle log".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        SimError::Config(ConfigError::InvalidValue { key, .. }) => {
            format!("Check the {} setting: {}", key, error)
        }
        _ => error.to_string(),
    }
}
