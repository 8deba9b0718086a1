//! # calc 命令实现
//!
//! 处理单个数据包，失败即为命令错误。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的参数
//! - 使用 `batch/runner.rs`

use crate::batch::runner;
use crate::cli::calc::CalcArgs;
use crate::commands::summary;
use crate::error::Result;
use crate::models::Package;

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    summary::check_args(&args.summary)?;

    let package = Package::new(1, args.code, args.values);
    let info = runner::process_package(&package)?;

    summary::emit_summaries(&[info], &args.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::summary::{SummaryArgs, SummaryFormat};
    use crate::error::TrackerError;

    fn calc_args(code: &str, values: Vec<f64>) -> CalcArgs {
        CalcArgs {
            code: code.to_string(),
            values,
            summary: SummaryArgs::default(),
        }
    }

    #[test]
    fn test_calc_valid_package() {
        assert!(execute(calc_args("RUN", vec![15000.0, 1.0, 75.0])).is_ok());
    }

    #[test]
    fn test_calc_errors_fail_the_command() {
        assert!(matches!(
            execute(calc_args("XYZ", vec![1.0, 2.0, 3.0])),
            Err(TrackerError::UnknownWorkoutCode(_))
        ));
        assert!(matches!(
            execute(calc_args("WLK", vec![9000.0, 1.0, 75.0])),
            Err(TrackerError::ArityMismatch { .. })
        ));
        assert!(matches!(
            execute(calc_args("WLK", vec![9000.0, 1.0, 75.0, 0.0])),
            Err(TrackerError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_calc_rejects_output_without_csv() {
        let mut args = calc_args("RUN", vec![15000.0, 1.0, 75.0]);
        args.summary = SummaryArgs {
            format: SummaryFormat::Text,
            output: Some(std::path::PathBuf::from("out.csv")),
        };
        assert!(matches!(
            execute(args),
            Err(TrackerError::InvalidArgument(_))
        ));
    }
}
