use crate::chart::records::{check_percentage, PieChartConfig, PieRecord};
use crate::error::{DashError, Result};
use serde::Serialize;
use tracing::debug;

/// Renderer-neutral description of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSpec {
    pub trace_type: String,
    pub title: String,
    pub hole: f64,
    pub text_position: String,
    pub text_info: String,
    pub hover_template: String,
    pub count_unit: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    /// Slice weight; drawn angle is proportional to value / sum(values)
    pub value: f64,
    /// Inside annotation, label plus literal percentage
    pub text: String,
    /// Count shown on hover
    pub custom_data: f64,
    pub color: String,
}

/// One line of the side table shown next to the pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieDetailRow {
    pub label: String,
    pub percentage: String,
    pub count: String,
}

impl PieSpec {
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn colors(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.color.as_str()).collect()
    }

    /// Share of the full circle each slice covers
    pub fn fractions(&self) -> Vec<f64> {
        let total: f64 = self.slices.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices.iter().map(|s| s.value / total).collect()
    }

    pub fn detail_rows(&self) -> Vec<PieDetailRow> {
        self.slices
            .iter()
            .map(|s| PieDetailRow {
                label: s.label.clone(),
                percentage: format!("{:.1}%", s.value),
                count: format!("{:.1}{}", s.custom_data, self.count_unit),
            })
            .collect()
    }
}

/// Build a pie spec from records using the default styling
pub fn build_pie(records: &[PieRecord]) -> Result<PieSpec> {
    let config = PieChartConfig {
        records: records.to_vec(),
        ..PieChartConfig::default()
    };
    config.build()
}

impl PieChartConfig {
    pub fn build(&self) -> Result<PieSpec> {
        if self.records.is_empty() {
            return Err(DashError::EmptyInput { what: "pie records" });
        }
        self.palette.validate()?;
        for record in &self.records {
            check_percentage(&record.label, record.percentage)?;
        }

        let slices = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| PieSlice {
                label: record.label.clone(),
                value: record.percentage,
                text: format!("{} {:.1}%", record.label, record.percentage),
                custom_data: record.count,
                color: self.palette.color_for(i).unwrap_or_default().to_string(),
            })
            .collect::<Vec<_>>();

        debug!(target: "chart", "Built pie '{}' with {} slices", self.title, slices.len());

        Ok(PieSpec {
            trace_type: "pie".to_string(),
            title: self.title.clone(),
            hole: 0.0,
            text_position: "inside".to_string(),
            text_info: "label+percent".to_string(),
            hover_template: format!(
                "<b>%{{label}}</b><br>비율: %{{percent:.1%}}<br>인원수: %{{customdata}}{}",
                self.count_unit
            ),
            count_unit: self.count_unit.clone(),
            slices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::Palette;

    #[test]
    fn test_two_slice_pie() {
        let spec = build_pie(&[
            PieRecord::new("중국", 33.0, 45.0),
            PieRecord::new("베트남", 17.0, 22.8),
        ])
        .unwrap();

        assert_eq!(spec.labels(), vec!["중국", "베트남"]);
        assert_eq!(spec.slices[0].text, "중국 33.0%");
        assert_eq!(spec.slices[1].custom_data, 22.8);

        let fractions = spec.fractions();
        assert!((fractions[0] - 0.66).abs() < 1e-9);
        assert!((fractions[1] - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_palette_wraps_by_input_order() {
        let config = PieChartConfig {
            palette: Palette::new(["#111111", "#222222"]).unwrap(),
            records: vec![
                PieRecord::new("a", 10.0, 1.0),
                PieRecord::new("b", 20.0, 2.0),
                PieRecord::new("c", 30.0, 3.0),
            ],
            ..PieChartConfig::default()
        };
        let spec = config.build().unwrap();
        assert_eq!(spec.colors(), vec!["#111111", "#222222", "#111111"]);
    }

    #[test]
    fn test_empty_records() {
        assert!(matches!(
            build_pie(&[]),
            Err(DashError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_out_of_range_percentage() {
        let err = build_pie(&[PieRecord::new("x", 120.0, 1.0)]).unwrap_err();
        assert!(matches!(err, DashError::InvalidPercentage { label, .. } if label == "x"));
    }

    #[test]
    fn test_detail_rows_and_hover() {
        let spec = PieChartConfig::default().build().unwrap();
        let rows = spec.detail_rows();

        assert_eq!(rows[0].percentage, "33.0%");
        assert_eq!(rows[0].count, "45.0만명");
        assert_eq!(
            spec.hover_template,
            "<b>%{label}</b><br>비율: %{percent:.1%}<br>인원수: %{customdata}만명"
        );
    }
}
