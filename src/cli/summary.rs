//! # 摘要输出参数
//!
//! 各子命令共用的输出格式参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/run.rs`, `cli/calc.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 摘要输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// One summary line per workout
    #[default]
    Text,
    /// Terminal table
    Table,
    /// CSV data (stdout, or --output file)
    Csv,
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Table => write!(f, "table"),
            SummaryFormat::Csv => write!(f, "csv"),
        }
    }
}

/// 输出参数
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Output file for CSV format (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
