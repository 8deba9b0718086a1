//! # 批量执行器
//!
//! 按输入顺序逐条处理数据包：分发 → 计算 → 生成训练信息。
//!
//! ## 功能
//! - 单线程顺序执行，输出顺序与输入一致
//! - 单条记录失败不会中断整个批次
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `dispatch.rs` 构造训练

use crate::dispatch;
use crate::error::Result;
use crate::models::{InfoMessage, Package};

/// 单个数据包处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(InfoMessage),
    /// 处理失败
    Failed(String, String), // (数据包标签, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 成功的训练信息（输入顺序）
    pub summaries: Vec<InfoMessage>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(info) => {
                self.success += 1;
                self.summaries.push(info);
            }
            ProcessResult::Failed(label, err) => {
                self.failed += 1;
                self.failures.push((label, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 数据包标签，用于报告
pub fn package_label(package: &Package) -> String {
    format!("#{} {}", package.line, package.code)
}

/// 处理单个数据包
pub fn process_package(package: &Package) -> Result<InfoMessage> {
    dispatch::read_package(&package.code, &package.data)?.summarize()
}

/// 顺序处理数据包列表，每条结果产生后立即回调
pub fn run<F>(packages: &[Package], mut on_result: F) -> BatchResult
where
    F: FnMut(&ProcessResult),
{
    let mut batch_result = BatchResult::default();

    for package in packages {
        let result = match process_package(package) {
            Ok(info) => ProcessResult::Success(info),
            Err(e) => ProcessResult::Failed(package_label(package), e.to_string()),
        };

        on_result(&result);
        batch_result.merge(result);
    }

    batch_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference_packages;

    #[test]
    fn test_reference_batch() {
        let mut emitted = Vec::new();
        let result = run(&reference_packages(), |r| {
            if let ProcessResult::Success(info) = r {
                emitted.push(info.message());
            }
        });

        assert_eq!(result.total(), 3);
        assert_eq!(result.failed, 0);
        assert_eq!(
            emitted,
            vec![
                "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                 Avg. speed: 1.000 km/h; Calories burned: 336.000.",
                "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                 Avg. speed: 9.750 km/h; Calories burned: 699.750.",
                "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                 Avg. speed: 5.850 km/h; Calories burned: 157.500.",
            ]
        );
    }

    #[test]
    fn test_failures_do_not_stop_batch() {
        let packages = vec![
            Package::new(1, "XYZ", vec![1.0, 2.0, 3.0]),
            Package::new(2, "RUN", vec![15000.0, 1.0, 75.0]),
            Package::new(3, "WLK", vec![9000.0, 1.0, 75.0]),
            Package::new(4, "RUN", vec![15000.0, 0.0, 75.0]),
            Package::new(5, "SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];

        let mut order = Vec::new();
        let result = run(&packages, |r| {
            order.push(matches!(r, ProcessResult::Success(_)));
        });

        assert_eq!(order, vec![false, true, false, false, true]);
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 3);
        assert_eq!(result.summaries[0].training_type, "Running");
        assert_eq!(result.summaries[1].training_type, "Swimming");

        let (label, err) = &result.failures[0];
        assert_eq!(label, "#1 XYZ");
        assert!(err.contains("XYZ"));
        assert_eq!(result.failures[1].0, "#3 WLK");
        assert!(result.failures[2].1.contains("Division by zero"));
    }
}
