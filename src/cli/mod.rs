//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `demo`: 处理内置参考批次（无子命令时的默认行为）
//! - `run`: 处理数据包文件
//! - `calc`: 处理命令行给出的单个数据包
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: summary, run, calc

pub mod calc;
pub mod run;
pub mod summary;

use clap::{Parser, Subcommand};

/// fitness-tracker - 训练数据计算工具
#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(version)]
#[command(
    about = "Compute distance, mean speed and calories from workout sensor packages",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Process the built-in reference batch (SWM, RUN, WLK)
    Demo(summary::SummaryArgs),

    /// Process workout packages from a text file
    Run(run::RunArgs),

    /// Process a single workout package given on the command line
    Calc(calc::CalcArgs),
}
