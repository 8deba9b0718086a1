//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `batch/`, `utils/`
//! - 子模块: summary, demo, run, calc

pub mod calc;
pub mod demo;
pub mod run;
pub mod summary;

use crate::cli::summary::SummaryArgs;
use crate::cli::Commands;
use crate::error::Result;

/// 执行命令（无子命令时处理内置批次）
pub fn run(cmd: Option<Commands>) -> Result<()> {
    match cmd {
        Some(Commands::Demo(args)) => demo::execute(args),
        Some(Commands::Run(args)) => run::execute(args),
        Some(Commands::Calc(args)) => calc::execute(args),
        None => demo::execute(SummaryArgs::default()),
    }
}
