//! # 统一错误处理模块
//!
//! 定义 fitness-tracker 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/workout.rs` 的 WorkoutKind

use crate::models::WorkoutKind;
use thiserror::Error;

/// fitness-tracker 统一错误类型
#[derive(Error, Debug)]
pub enum TrackerError {
    // ─────────────────────────────────────────────────────────────
    // 训练数据错误（单条记录，批处理中跳过）
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown workout code: '{0}' (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutCode(String),

    #[error("{kind} expects {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind}: invalid value {value} for field '{field}'")]
    InvalidField {
        kind: WorkoutKind,
        field: &'static str,
        value: f64,
    },

    #[error("Division by zero while computing {quantity}")]
    DivisionByZero { quantity: &'static str },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse package file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TrackerError>;
