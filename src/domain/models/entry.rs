use serde::{Deserialize, Serialize};

/// One navigable menu item.
///
/// Both fields default to empty strings: an entry missing `name` renders as
/// an empty row and an entry missing `url` clicks through to a blank target,
/// but neither poisons the rest of the payload. Order in the source array is
/// visual order; duplicates are permitted and never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}
