//! # 传感器数据包
//!
//! 一条原始数据包：训练代码 + 按位置排列的数值。
//!
//! ## 依赖关系
//! - 被 `parsers/package.rs` 生成
//! - 被 `batch/runner.rs`, `commands/` 使用

use serde::{Deserialize, Serialize};

/// 原始数据包
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// 来源行号（内置批次为序号）
    pub line: usize,
    /// 训练代码（SWM / RUN / WLK）
    pub code: String,
    /// 原始数值
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(line: usize, code: impl Into<String>, data: Vec<f64>) -> Self {
        Package {
            line,
            code: code.into(),
            data,
        }
    }
}

/// 内置参考批次
pub fn reference_packages() -> Vec<Package> {
    vec![
        Package::new(1, "SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new(2, "RUN", vec![15000.0, 1.0, 75.0]),
        Package::new(3, "WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
