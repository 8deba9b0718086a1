//! # calc 子命令 CLI 定义
//!
//! 处理命令行给出的单个数据包
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use super::summary::SummaryArgs;
use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Workout code: SWM, RUN or WLK
    pub code: String,

    /// Raw sensor values in package order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,

    #[command(flatten)]
    pub summary: SummaryArgs,
}
