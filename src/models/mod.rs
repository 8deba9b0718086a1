//! # 数据模型模块
//!
//! 定义传感器数据包、训练计算模型和训练信息消息。
//!
//! ## 依赖关系
//! - 被 `dispatch.rs`, `batch/` 和 `commands/` 使用
//! - 子模块: package, workout, message

pub mod message;
pub mod package;
pub mod workout;

pub use message::InfoMessage;
pub use package::{reference_packages, Package};
pub use workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};
