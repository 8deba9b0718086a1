//! # 摘要输出
//!
//! 批量处理数据包并按所选格式输出训练摘要。
//!
//! ## 输出约定
//! - text: 每条结果产生后立即输出一行
//! - table / csv: 全部处理完成后统一输出
//! - 失败的数据包在 stderr 报告并跳过
//!
//! ## 依赖关系
//! - 被 `commands/demo.rs`, `commands/run.rs`, `commands/calc.rs` 使用
//! - 使用 `batch/runner.rs`, `utils/output.rs`, `utils/export.rs`

use crate::batch::{runner, ProcessResult};
use crate::cli::summary::{SummaryArgs, SummaryFormat};
use crate::error::{Result, TrackerError};
use crate::models::{InfoMessage, Package};
use crate::utils::{export, output};

/// 校验输出参数组合
pub fn check_args(args: &SummaryArgs) -> Result<()> {
    if args.output.is_some() && args.format != SummaryFormat::Csv {
        return Err(TrackerError::InvalidArgument(format!(
            "--output is only supported with --format csv (got --format {})",
            args.format
        )));
    }
    Ok(())
}

/// 批量处理并输出
pub fn emit_batch(packages: &[Package], args: &SummaryArgs, strict: bool) -> Result<()> {
    check_args(args)?;

    if packages.is_empty() {
        output::print_warning("No workout packages to process.");
        return Ok(());
    }

    let result = runner::run(packages, |r| match r {
        ProcessResult::Success(info) => {
            if args.format == SummaryFormat::Text {
                output::print_summary(&info.message());
            }
        }
        ProcessResult::Failed(label, err) => {
            output::print_skip(&format!("{}: {}", label, err));
        }
    });

    if args.format != SummaryFormat::Text {
        emit_summaries(&result.summaries, args)?;
    }

    output::print_done(&format!(
        "{} packages processed: {} ok, {} failed",
        result.total(),
        result.success,
        result.failed
    ));

    if strict && result.failed > 0 {
        return Err(TrackerError::Other(format!(
            "{} of {} packages failed",
            result.failed,
            result.total()
        )));
    }

    Ok(())
}

/// 按所选格式输出已完成的摘要
pub fn emit_summaries(summaries: &[InfoMessage], args: &SummaryArgs) -> Result<()> {
    match args.format {
        SummaryFormat::Text => {
            for info in summaries {
                output::print_summary(&info.message());
            }
        }
        SummaryFormat::Table => {
            output::print_header(&format!("Workout Summary ({} workouts)", summaries.len()));
            output::print_summary(&export::render_table(summaries));
        }
        SummaryFormat::Csv => match &args.output {
            Some(path) => {
                export::to_csv(summaries, path)?;
                output::print_success(&format!("Summary saved to '{}'", path.display()));
            }
            None => export::write_csv(summaries, std::io::stdout().lock())?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_check_args() {
        assert!(check_args(&SummaryArgs::default()).is_ok());

        let csv = SummaryArgs {
            format: SummaryFormat::Csv,
            output: Some(PathBuf::from("out.csv")),
        };
        assert!(check_args(&csv).is_ok());

        let table = SummaryArgs {
            format: SummaryFormat::Table,
            output: Some(PathBuf::from("out.csv")),
        };
        assert!(matches!(
            check_args(&table),
            Err(TrackerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_strict_batch_fails_on_bad_package() {
        let packages = vec![
            Package::new(1, "RUN", vec![15000.0, 1.0, 75.0]),
            Package::new(2, "XYZ", vec![1.0, 2.0, 3.0]),
        ];
        let args = SummaryArgs::default();
        assert!(emit_batch(&packages, &args, false).is_ok());
        assert!(emit_batch(&packages, &args, true).is_err());
    }

    #[test]
    fn test_emit_summaries_table_and_csv_file() {
        let info = runner::process_package(&Package::new(1, "RUN", vec![15000.0, 1.0, 75.0]))
            .unwrap();

        let table = SummaryArgs {
            format: SummaryFormat::Table,
            output: None,
        };
        assert!(emit_summaries(&[info.clone()], &table).is_ok());

        let path = std::env::temp_dir().join(format!(
            "fitness_tracker_summary_{}.csv",
            std::process::id()
        ));
        let csv = SummaryArgs {
            format: SummaryFormat::Csv,
            output: Some(path.clone()),
        };
        emit_summaries(&[info], &csv).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.starts_with("training_type,"));
        assert!(text.contains("Running,1.000,9.750,9.750,699.750"));
    }

    #[test]
    fn test_empty_batch_is_ok() {
        assert!(emit_batch(&[], &SummaryArgs::default(), true).is_ok());
    }
}
