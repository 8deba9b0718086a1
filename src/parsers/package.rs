//! # 数据包文件解析器
//!
//! 解析纯文本数据包文件，每行一条：
//!
//! ```text
//! # 注释
//! SWM: 720, 1, 80, 25, 40
//! RUN 15000 1 75
//! ```
//!
//! 训练代码在此只做词法检查，是否为已知代码由 `dispatch.rs` 判断。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `models/package.rs`
//! - 使用 `regex` crate

use crate::error::{Result, TrackerError};
use crate::models::Package;

use regex::Regex;
use std::fs;
use std::path::Path;

/// 解析数据包文件
pub fn parse_package_file(path: &Path) -> Result<Vec<Package>> {
    if !path.exists() {
        return Err(TrackerError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| TrackerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_package_content(&content, &path.display().to_string())
}

/// 解析数据包文本内容
pub fn parse_package_content(content: &str, source: &str) -> Result<Vec<Package>> {
    let line_re = Regex::new(r"^([A-Za-z]+)(?:\s*:\s*|\s+|$)(.*)$")
        .map_err(|e| TrackerError::Other(e.to_string()))?;
    let sep_re = Regex::new(r"[,\s]+").map_err(|e| TrackerError::Other(e.to_string()))?;

    let mut packages = Vec::new();

    for (i, raw_line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.trim();

        // 跳过空行和注释
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let caps = line_re.captures(line).ok_or_else(|| TrackerError::ParseError {
            path: source.to_string(),
            line: line_no,
            reason: format!("expected a workout code at the start of '{}'", line),
        })?;

        let code = caps[1].to_string();
        let data = sep_re
            .split(caps[2].trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>().map_err(|_| TrackerError::ParseError {
                    path: source.to_string(),
                    line: line_no,
                    reason: format!("'{}' is not a number", s),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(Package::new(line_no, code, data));
    }

    Ok(packages)
}
