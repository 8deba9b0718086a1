//! # 训练信息消息
//!
//! 保存一次训练的五个展示字段，并格式化为一行文本。
//!
//! ## 依赖关系
//! - 由 `models/workout.rs` 的 `Training::summarize` 生成
//! - 被 `commands/`, `utils/export.rs` 使用

use serde::{Deserialize, Serialize};

/// 训练信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// 训练类型名称
    pub training_type: String,
    /// 时长 (h)
    pub duration: f64,
    /// 距离 (km)
    pub distance: f64,
    /// 平均速度 (km/h)
    pub speed: f64,
    /// 消耗热量 (kcal)
    pub calories: f64,
}

impl InfoMessage {
    /// 格式化为单行摘要，数值保留 3 位小数
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; \
             Duration: {:.3} h.; \
             Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; \
             Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_message_template() {
        assert_eq!(
            sample().message(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 699.750."
        );
        assert_eq!(sample().to_string(), sample().message());
    }

    #[test]
    fn test_three_fraction_digits() {
        let info = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 0.3333333,
            distance: 123456.78951,
            speed: 0.0004,
            calories: 1e9,
        };
        let msg = info.message();
        let numbers: Vec<&str> = msg
            .split(|c: char| c != '.' && !c.is_ascii_digit())
            .map(|s| s.trim_end_matches('.'))
            .filter(|s| s.contains('.') && s.len() > 1)
            .collect();
        assert_eq!(numbers, vec!["0.333", "123456.790", "0.000", "1000000000.000"]);
        for n in numbers {
            let frac = n.split('.').nth(1).unwrap();
            assert_eq!(frac.len(), 3, "{} should have 3 fractional digits", n);
        }
    }
}
