//! Chart specifications built from literal record tables
//!
//! Builders are pure: they validate their input and return a
//! serializable description that any rendering layer can draw.

pub mod dual_axis;
pub mod palette;
pub mod pie;
pub mod records;

pub use dual_axis::{build_dual_axis, DualAxisSpec};
pub use palette::Palette;
pub use pie::{build_pie, PieSpec};
pub use records::{DualAxisChartConfig, DualAxisRecord, PieChartConfig, PieRecord};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieSpec),
    DualAxis(DualAxisSpec),
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_tagged() {
        let spec = ChartSpec::Pie(PieChartConfig::default().build().unwrap());
        let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();

        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"][0]["label"], "중국");
        assert_eq!(json["slices"][0]["color"], "#008060");
    }

    #[test]
    fn test_dual_axis_json_range() {
        let spec = ChartSpec::DualAxis(DualAxisChartConfig::default().build().unwrap());
        let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();

        assert_eq!(json["kind"], "dual_axis");
        assert_eq!(json["y2_axis"]["range"][1], 40.0);
        assert!(json["y_axis"].get("range").is_none());
    }
}
