//! # demo 命令实现
//!
//! 处理内置参考批次。
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `models/package.rs` 的参考批次

use crate::cli::summary::SummaryArgs;
use crate::commands::summary;
use crate::error::Result;
use crate::models::reference_packages;

/// 执行 demo 命令
pub fn execute(args: SummaryArgs) -> Result<()> {
    summary::emit_batch(&reference_packages(), &args, false)
}
