//! # 工具函数模块
//!
//! 提供美化输出和摘要导出工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, export

pub mod export;
pub mod output;
