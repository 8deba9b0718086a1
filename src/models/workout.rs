//! # 训练计算模型
//!
//! 定义训练计算的统一接口 `Training` 及三种训练类型：
//! 跑步 (Running)、竞走 (SportsWalking)、游泳 (Swimming)。
//!
//! ## 计算公式
//! - 距离 (km) = 动作次数 × 步长 / 1000
//! - 平均速度 (km/h) = 距离 / 时长（游泳按泳池长度 × 趟数计算）
//! - 消耗热量 (kcal) 由各训练类型分别实现
//!
//! ## 依赖关系
//! - 被 `dispatch.rs` 构造
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 使用 `models/message.rs` 的 InfoMessage

use crate::error::{Result, TrackerError};
use crate::models::InfoMessage;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 每公里米数
pub const M_IN_KM: f64 = 1000.0;

/// 每小时分钟数
pub const MIN_IN_HOUR: f64 = 60.0;

/// 默认步长 (m)
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// 训练类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// 全部训练类型
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// 传感器数据包中的训练代码
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// 从训练代码解析（区分大小写）
    pub fn from_code(code: &str) -> Option<Self> {
        WorkoutKind::ALL.into_iter().find(|k| k.code() == code)
    }

    /// 数据包字段（按位置顺序）
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::SportsWalking => write!(f, "SportsWalking"),
            WorkoutKind::Swimming => write!(f, "Swimming"),
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        WorkoutKind::from_code(s).ok_or_else(|| TrackerError::UnknownWorkoutCode(s.to_string()))
    }
}

/// 所有训练类型共有的传感器数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    /// 动作次数（步数或划水次数）
    pub action: u64,
    /// 时长 (h)
    pub duration: f64,
    /// 体重 (kg)
    pub weight: f64,
}

impl TrainingData {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        TrainingData {
            action,
            duration,
            weight,
        }
    }
}

/// 除法，分母为零时返回错误而不是 inf/NaN
fn checked_div(numerator: f64, denominator: f64, quantity: &'static str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(TrackerError::DivisionByZero { quantity });
    }
    Ok(numerator / denominator)
}

/// 训练计算接口
///
/// 每种训练必须实现 `spent_calories`；距离与平均速度有默认实现。
pub trait Training {
    /// 训练类型标签
    const KIND: WorkoutKind;

    /// 每个动作对应的距离 (m)
    const STEP_LENGTH_M: f64 = DEFAULT_STEP_LENGTH_M;

    /// 共有传感器数据
    fn data(&self) -> &TrainingData;

    /// 距离 (km)
    fn distance(&self) -> f64 {
        self.data().action as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// 平均速度 (km/h)
    fn mean_speed(&self) -> Result<f64> {
        checked_div(self.distance(), self.data().duration, "mean speed")
    }

    /// 消耗热量 (kcal)
    fn spent_calories(&self) -> Result<f64>;

    /// 生成训练信息
    fn summarize(&self) -> Result<InfoMessage> {
        Ok(InfoMessage {
            training_type: Self::KIND.to_string(),
            duration: self.data().duration,
            distance: self.distance(),
            speed: self.mean_speed()?,
            calories: self.spent_calories()?,
        })
    }
}

// ─────────────────────────────────────────────────────────────
// 跑步
// ─────────────────────────────────────────────────────────────

/// 跑步
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub data: TrainingData,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Running {
            data: TrainingData::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        Ok(
            (Self::CALORIES_SPEED_MULTIPLIER * speed - Self::CALORIES_SPEED_SHIFT)
                * self.data.weight
                / M_IN_KM
                * self.data.duration
                * MIN_IN_HOUR,
        )
    }
}

// ─────────────────────────────────────────────────────────────
// 竞走
// ─────────────────────────────────────────────────────────────

/// 竞走
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub data: TrainingData,
    /// 身高 (cm)
    pub height: i64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration: f64, weight: f64, height: i64) -> Self {
        SportsWalking {
            data: TrainingData::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        // 速度² / 身高 取整除 (floor)
        let speed_height_ratio =
            checked_div(speed.powi(2), self.height as f64, "walking calories")?.floor();
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * self.data.weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.data.weight)
            * self.data.duration
            * MIN_IN_HOUR)
    }
}

// ─────────────────────────────────────────────────────────────
// 游泳
// ─────────────────────────────────────────────────────────────

/// 游泳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub data: TrainingData,
    /// 泳池长度 (m)
    pub length_pool: i64,
    /// 游过的趟数
    pub count_pool: i64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: u64, duration: f64, weight: f64, length_pool: i64, count_pool: i64) -> Self {
        Swimming {
            data: TrainingData::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const STEP_LENGTH_M: f64 = 1.38;

    fn data(&self) -> &TrainingData {
        &self.data
    }

    /// 按泳池长度和趟数计算，与划水次数无关
    fn mean_speed(&self) -> Result<f64> {
        let pool_km = self.length_pool as f64 * self.count_pool as f64 / M_IN_KM;
        checked_div(pool_km, self.data.duration, "mean speed")
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        Ok((speed + Self::CALORIES_SPEED_SHIFT) * Self::CALORIES_WEIGHT_MULTIPLIER * self.data.weight)
    }
}

// ─────────────────────────────────────────────────────────────
// 训练（封闭的标签联合）
// ─────────────────────────────────────────────────────────────

/// 已构造的训练，由 `dispatch::read_package` 产生
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn summarize(&self) -> Result<InfoMessage> {
        match self {
            Workout::Running(w) => w.summarize(),
            Workout::SportsWalking(w) => w.summarize(),
            Workout::Swimming(w) => w.summarize(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
