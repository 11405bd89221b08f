use crate::chart::records::{check_percentage, DualAxisChartConfig, DualAxisRecord};
use crate::error::{DashError, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// Bars on the primary axis and a line on a secondary axis, sharing
/// one categorical x axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualAxisSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub bars: BarTrace,
    pub line: LineTrace,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub y2_axis: AxisSpec,
    pub template: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
    pub text: Vec<String>,
    pub text_position: String,
    pub y_axis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub name: String,
    pub values: Vec<f64>,
    pub mode: String,
    pub text: Vec<String>,
    pub text_position: String,
    pub color: String,
    pub width: f64,
    pub marker_size: f64,
    pub y_axis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    pub show_grid: bool,
    /// Fixed `[min, max]`; `None` lets the renderer auto-scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl AxisSpec {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            side: None,
            overlaying: None,
            show_grid: false,
            range: None,
        }
    }
}

/// Build a bar+line spec with the default styling and a fixed
/// secondary axis range of `[0, secondary_max]`
pub fn build_dual_axis(records: &[DualAxisRecord], secondary_max: f64) -> Result<DualAxisSpec> {
    let config = DualAxisChartConfig {
        records: records.to_vec(),
        secondary_max,
        ..DualAxisChartConfig::default()
    };
    config.build()
}

impl DualAxisChartConfig {
    pub fn build(&self) -> Result<DualAxisSpec> {
        if self.records.is_empty() {
            return Err(DashError::EmptyInput {
                what: "bar/line records",
            });
        }
        if !self.secondary_max.is_finite() || self.secondary_max <= 0.0 {
            return Err(DashError::InvalidAxisRange {
                max: self.secondary_max,
            });
        }
        self.palette.validate()?;

        for record in &self.records {
            check_percentage(&record.category, record.percentage)?;
            if record.percentage > self.secondary_max {
                warn!(
                    target: "chart",
                    "'{}' at {}% is above the secondary axis maximum {}",
                    record.category,
                    record.percentage,
                    self.secondary_max
                );
            }
        }

        let categories: Vec<String> = self.records.iter().map(|r| r.category.clone()).collect();

        let bars = BarTrace {
            name: self.bar_name.clone(),
            values: self.records.iter().map(|r| r.count).collect(),
            colors: (0..self.records.len())
                .map(|i| self.palette.color_for(i).unwrap_or_default().to_string())
                .collect(),
            text: self.records.iter().map(|r| r.count.to_string()).collect(),
            text_position: "outside".to_string(),
            y_axis: "y".to_string(),
        };

        let line = LineTrace {
            name: self.line_name.clone(),
            values: self.records.iter().map(|r| r.percentage).collect(),
            mode: "lines+markers+text".to_string(),
            text: self.records.iter().map(|r| r.percentage.to_string()).collect(),
            text_position: "top center".to_string(),
            color: self.line_color.clone(),
            width: 2.0,
            marker_size: 8.0,
            y_axis: "y2".to_string(),
        };

        let y_axis = AxisSpec {
            side: Some("left".to_string()),
            show_grid: true,
            ..AxisSpec::titled(&self.y_title)
        };

        let y2_axis = AxisSpec {
            side: Some("right".to_string()),
            overlaying: Some("y".to_string()),
            show_grid: false,
            range: Some([0.0, self.secondary_max]),
            ..AxisSpec::titled(&self.y2_title)
        };

        debug!(
            target: "chart",
            "Built dual-axis chart '{}' with {} categories",
            self.title,
            categories.len()
        );

        Ok(DualAxisSpec {
            title: self.title.clone(),
            categories,
            bars,
            line,
            x_axis: AxisSpec::titled(&self.x_title),
            y_axis,
            y2_axis,
            template: "simple_white".to_string(),
            width: 950,
            height: 700,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DualAxisRecord> {
        vec![
            DualAxisRecord::new("F", 517_399, 35.0),
            DualAxisRecord::new("E", 400_033, 27.0),
        ]
    }

    #[test]
    fn test_series_share_categories() {
        let spec = build_dual_axis(&records(), 40.0).unwrap();

        assert_eq!(spec.categories, vec!["F", "E"]);
        assert_eq!(spec.bars.values, vec![517_399, 400_033]);
        assert_eq!(spec.bars.text, vec!["517399", "400033"]);
        assert_eq!(spec.line.values, vec![35.0, 27.0]);
        assert_eq!(spec.line.text, vec!["35", "27"]);
        assert_eq!(spec.bars.y_axis, "y");
        assert_eq!(spec.line.y_axis, "y2");
    }

    #[test]
    fn test_secondary_axis_is_fixed() {
        let spec = build_dual_axis(&records(), 40.0).unwrap();

        assert_eq!(spec.y2_axis.range, Some([0.0, 40.0]));
        assert_eq!(spec.y2_axis.overlaying.as_deref(), Some("y"));
        assert_eq!(spec.y2_axis.side.as_deref(), Some("right"));
        assert!(!spec.y2_axis.show_grid);
        assert_eq!(spec.y_axis.range, None);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            build_dual_axis(&[], 40.0),
            Err(DashError::EmptyInput { .. })
        ));
        assert!(matches!(
            build_dual_axis(&records(), 0.0),
            Err(DashError::InvalidAxisRange { .. })
        ));
        assert!(matches!(
            build_dual_axis(&[DualAxisRecord::new("x", 1, -3.0)], 40.0),
            Err(DashError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_line_above_axis_is_accepted() {
        let spec = build_dual_axis(&[DualAxisRecord::new("x", 1, 55.0)], 40.0).unwrap();
        assert_eq!(spec.line.values, vec![55.0]);
    }
}
