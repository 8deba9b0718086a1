//! # 训练摘要导出
//!
//! 将训练信息渲染为终端表格或导出为 CSV。
//!
//! ## 支持格式
//! - 表格: 使用 `tabled` 渲染五个字段
//! - CSV: training_type, duration_h, distance_km, speed_kmh, calories_kcal
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/message.rs` 的 InfoMessage
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, TrackerError};
use crate::models::InfoMessage;

use std::io::Write;
use std::path::Path;
use tabled::{Table, Tabled};

/// CSV 表头
const CSV_HEADER: [&str; 5] = [
    "training_type",
    "duration_h",
    "distance_km",
    "speed_kmh",
    "calories_kcal",
];

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Training type")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Avg. speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
}

/// 数值字段，保留 3 位小数
fn format_fields(info: &InfoMessage) -> [String; 4] {
    [
        format!("{:.3}", info.duration),
        format!("{:.3}", info.distance),
        format!("{:.3}", info.speed),
        format!("{:.3}", info.calories),
    ]
}

/// 渲染为终端表格
pub fn render_table(summaries: &[InfoMessage]) -> String {
    let rows: Vec<SummaryRow> = summaries
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let [duration, distance, speed, calories] = format_fields(info);
            SummaryRow {
                index: i + 1,
                training_type: info.training_type.clone(),
                duration,
                distance,
                speed,
                calories,
            }
        })
        .collect();

    Table::new(&rows).to_string()
}

/// 写入 CSV 到任意 writer
pub fn write_csv<W: Write>(summaries: &[InfoMessage], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for info in summaries {
        let [duration, distance, speed, calories] = format_fields(info);
        wtr.write_record([
            info.training_type.as_str(),
            duration.as_str(),
            distance.as_str(),
            speed.as_str(),
            calories.as_str(),
        ])?;
    }

    wtr.flush()
        .map_err(|e| TrackerError::Other(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}

/// 导出 CSV 文件
pub fn to_csv(summaries: &[InfoMessage], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| TrackerError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(summaries, file)
}
