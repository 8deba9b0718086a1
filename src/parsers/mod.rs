//! # 解析器模块
//!
//! 提供传感器数据包文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: package

pub mod package;

pub use package::parse_package_file;
