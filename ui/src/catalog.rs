//! The static catalog of portfolio examples listed on the home page.

use serde::Deserialize;
use serde::Serialize;

/// Describes one portfolio entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDescriptor {
    /// Display label. Empty for the "no example open" state.
    pub title: String,
    /// Human-readable summary shown on the entry's card.
    pub description: String,
    /// Route the example is served under. Unique within the catalog.
    pub path: String,
    /// External link offered by the header while this entry is open.
    pub url: Option<String>,
}

impl ExampleDescriptor {
    /// An empty `title` is the sentinel for "no example open"; there is
    /// no separate flag.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Every example the home page links to, in display order. The order is
/// the declaration order and stays stable across renders.
pub fn examples() -> Vec<ExampleDescriptor> {
    vec![ExampleDescriptor {
        title: "إلي أصدقائي".into(),
        description: "3D art gallery".into(),
        path: "/examples/art-shelf".into(),
        url: None,
    }]
}
