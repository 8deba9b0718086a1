//! # run 命令实现
//!
//! 读取数据包文件并批量处理。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `parsers/package.rs`
//! - 使用 `commands/summary.rs` 输出

use crate::cli::run::RunArgs;
use crate::commands::summary;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    let packages = parsers::parse_package_file(&args.input)?;
    output::print_info(&format!(
        "Read {} packages from '{}'",
        packages.len(),
        args.input.display()
    ));

    summary::emit_batch(&packages, &args.summary, args.strict)
}
