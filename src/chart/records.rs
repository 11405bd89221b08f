//! Literal chart inputs and the named configurations that carry them

use crate::chart::palette::Palette;
use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};

/// One pie slice: label, share in percent, absolute count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieRecord {
    pub label: String,
    pub percentage: f64,
    pub count: f64,
}

impl PieRecord {
    pub fn new(label: impl Into<String>, percentage: f64, count: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
            count,
        }
    }
}

/// One category of a bar+line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualAxisRecord {
    pub category: String,
    pub count: u64,
    pub percentage: f64,
}

impl DualAxisRecord {
    pub fn new(category: impl Into<String>, count: u64, percentage: f64) -> Self {
        Self {
            category: category.into(),
            count,
            percentage,
        }
    }
}

/// Pie chart inputs plus presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    pub title: String,
    /// Unit appended to counts in hover text and the detail table
    pub count_unit: String,
    pub palette: Palette,
    pub records: Vec<PieRecord>,
}

impl Default for PieChartConfig {
    /// Registered foreign residents by nationality
    fn default() -> Self {
        Self {
            title: "국적별 분포".to_string(),
            count_unit: "만명".to_string(),
            palette: Palette::greens(),
            records: vec![
                PieRecord::new("중국", 33.0, 45.0),
                PieRecord::new("베트남", 17.0, 22.8),
                PieRecord::new("네팔", 4.5, 6.0),
                PieRecord::new("우즈베키스탄", 4.1, 5.5),
                PieRecord::new("기타 국가", 41.4, 55.7),
            ],
        }
    }
}

/// Bar+line chart inputs plus presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualAxisChartConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y2_title: String,
    pub bar_name: String,
    pub line_name: String,
    pub palette: Palette,
    pub line_color: String,
    /// Fixed upper bound of the secondary (percentage) axis
    pub secondary_max: f64,
    pub records: Vec<DualAxisRecord>,
}

impl Default for DualAxisChartConfig {
    /// Foreign residents by visa family
    fn default() -> Self {
        Self {
            title: "비자 계열별 외국인 인원수와 비율".to_string(),
            x_title: "비자 계열".to_string(),
            y_title: "인원수 (명)".to_string(),
            y2_title: "비율 (%)".to_string(),
            bar_name: "인원수".to_string(),
            line_name: "비율 (%)".to_string(),
            palette: Palette::visa_bars(),
            line_color: "red".to_string(),
            secondary_max: 40.0,
            records: vec![
                DualAxisRecord::new("F계열(영주권, 결혼이민)", 517_399, 35.0),
                DualAxisRecord::new("E계열(취업)", 400_033, 27.0),
                DualAxisRecord::new("D계열(유학, 연수)", 250_374, 20.0),
                DualAxisRecord::new("H계열(워킹홀리데이, 방문취업)", 104_980, 10.0),
                DualAxisRecord::new("기타(Others)", 75_840, 5.0),
            ],
        }
    }
}

pub(crate) fn check_percentage(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(DashError::InvalidPercentage {
            label: label.to_string(),
            value,
        })
    }
}
