//! # run 子命令 CLI 定义
//!
//! 从文本文件读取数据包并批量处理
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::summary::SummaryArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Package file, one package per line (e.g. "RUN: 15000, 1, 75")
    pub input: PathBuf,

    /// Exit with an error if any package fails
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    #[command(flatten)]
    pub summary: SummaryArgs,
}
