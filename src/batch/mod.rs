//! # 批量处理模块
//!
//! 提供统一的数据包批量处理能力。
//!
//! ## 功能
//! - 顺序处理，保持输入顺序
//! - 单条失败隔离
//! - 统计与失败汇总
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `dispatch.rs` 和 `models/`

pub mod runner;

pub use runner::ProcessResult;
