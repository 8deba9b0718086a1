//! # fitness-tracker - 训练数据计算工具
//!
//! 根据传感器数据包计算训练的距离、平均速度和消耗热量，并输出摘要。
//!
//! ## 子命令
//! - `demo` - 处理内置参考批次（默认）
//! - `run`  - 处理数据包文件
//! - `calc` - 处理单个数据包
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据包文件解析)
//!   │     ├── batch/     (顺序批处理)
//!   │     ├── dispatch   (代码 → 训练类型)
//!   │     └── models/    (训练计算模型)
//!   ├── utils/      (输出与导出)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod dispatch;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
