//! Item categories inferred from names.

use std::fmt;
use std::str::FromStr;

/// Which update rule an item follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    #[default]
    Normal,
    /// e.g. "Aged Brie". Gains quality with age.
    AgesWell,
    /// e.g. legendary "Sulfuras". Quality never changes.
    NeverDegrades,
    /// e.g. "Backstage passes". Worthless once the date passes.
    TimeLimited,
    /// e.g. "Conjured" items. Twice the normal rate.
    DegradesFast,
}

/// Name prefixes in match priority order; first hit wins.
const PREFIXES: [(&str, Category); 4] = [
    ("Backstage pass", Category::TimeLimited),
    ("Aged", Category::AgesWell),
    ("Sulfuras", Category::NeverDegrades),
    ("Conjured", Category::DegradesFast),
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::AgesWell,
        Category::NeverDegrades,
        Category::TimeLimited,
        Category::DegradesFast,
    ];

    /// Classify by name prefix. Anything unrecognised is `Normal`.
    pub fn from_name(name: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map_or(Category::Normal, |&(_, category)| category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::AgesWell => "AgesWell",
            Category::NeverDegrades => "NeverDegrades",
            Category::TimeLimited => "TimeLimited",
            Category::DegradesFast => "DegradesFast",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category label that names no known category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown item category: {label:?}")]
pub struct ParseCategoryError {
    pub label: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts variant names in any case, ignoring `_`, `-` and spaces
    /// (`"AgesWell"`, `"ages_well"`, `"ages-well"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseCategoryError { label: s.to_owned() })
    }
}
