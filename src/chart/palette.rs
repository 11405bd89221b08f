use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};

/// Ordered colour list applied to chart elements by input position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette = Self(colors.into_iter().map(Into::into).collect());
        palette.validate()?;
        Ok(palette)
    }

    /// Greens used for the nationality pie
    pub fn greens() -> Self {
        Self::from_static(&["#008060", "#06D6A0", "#A7F3D0", "#4CBB17", "#B7E4C7"])
    }

    /// Bar colours for the visa-family chart
    pub fn visa_bars() -> Self {
        Self::from_static(&["#504A8F", "#2A6777", "#2B8C81", "#82C45D", "#9CD670"])
    }

    fn from_static(colors: &[&str]) -> Self {
        Self(colors.iter().map(|c| c.to_string()).collect())
    }

    /// A palette read from config may be empty
    pub fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DashError::EmptyInput {
                what: "palette colors",
            });
        }
        Ok(())
    }

    /// Colour for element `index`, cycling through the palette
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(index % self.0.len()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
