//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum TechgapError {
    // 指纹编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type TgResult<T> = Result<T, TechgapError>;
