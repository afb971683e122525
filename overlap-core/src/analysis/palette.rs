use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PALETTE: [&str; 10] = [
    "#FF0000",
    "#00FF00",
    "#0000FF",
    "#FFFF00",
    "#FF00FF",
    "#00FFFF",
    "#FFA500",
    "#800080",
    "#008000",
    "#000080",
];

/// Non-empty, ordered list of group colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Palette, ConfigError> {
        if colors.is_empty() {
            Err(ConfigError::EmptyPalette)
        } else {
            Ok(Palette(colors))
        }
    }

    /// Color for the `idx`-th component, cycling through the palette.
    pub fn color(&self, idx: usize) -> &str {
        &self.0[idx % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;
    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

/// Component members with the color assigned to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Colored<'a> {
    pub members: Vec<usize>,
    pub color: &'a str,
}

/// Colors every component with at least 2 members by its position among *all* components (singletons included),
/// so a component's color depends only on discovery order. Singletons are dropped.
pub fn color_components(components: Vec<Vec<usize>>, palette: &Palette) -> Vec<Colored<'_>> {
    components
        .into_iter()
        .enumerate()
        .filter(|(_, members)| members.len() > 1)
        .map(|(idx, members)| Colored { members, color: palette.color(idx) })
        .collect()
}
