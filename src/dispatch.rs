//! # 数据包分发
//!
//! 根据训练代码将传感器数据包构造为对应的训练。
//!
//! ## 支持的代码
//! - `SWM` → Swimming
//! - `RUN` → Running
//! - `WLK` → SportsWalking
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 调用
//! - 使用 `models/workout.rs`

use crate::error::{Result, TrackerError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// 读取传感器数据包，按位置构造训练
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind = code.parse::<WorkoutKind>()?;

    let expected = kind.field_names().len();
    if data.len() != expected {
        return Err(TrackerError::ArityMismatch {
            kind,
            expected,
            actual: data.len(),
        });
    }

    let workout = match kind {
        WorkoutKind::Running => Running::new(
            count_field(kind, 0, data[0])?,
            data[1],
            data[2],
        )
        .into(),
        WorkoutKind::SportsWalking => SportsWalking::new(
            count_field(kind, 0, data[0])?,
            data[1],
            data[2],
            int_field(kind, 3, data[3])?,
        )
        .into(),
        WorkoutKind::Swimming => Swimming::new(
            count_field(kind, 0, data[0])?,
            data[1],
            data[2],
            int_field(kind, 3, data[3])?,
            int_field(kind, 4, data[4])?,
        )
        .into(),
    };

    Ok(workout)
}

/// 整数字段：必须是有限的整数值
fn int_field(kind: WorkoutKind, index: usize, value: f64) -> Result<i64> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value >= i64::MAX as f64
        || value < i64::MIN as f64
    {
        return Err(invalid_field(kind, index, value));
    }
    Ok(value as i64)
}

/// 计数字段：非负整数
fn count_field(kind: WorkoutKind, index: usize, value: f64) -> Result<u64> {
    let n = int_field(kind, index, value)?;
    u64::try_from(n).map_err(|_| invalid_field(kind, index, value))
}

fn invalid_field(kind: WorkoutKind, index: usize, value: f64) -> TrackerError {
    TrackerError::InvalidField {
        kind,
        field: kind.field_names()[index],
        value,
    }
}
