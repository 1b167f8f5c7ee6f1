use crate::component::{AntoineCoefficients, Component};
use crate::error::{FluidError, FluidResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub antoine: AntoineCoefficients,
}

impl CatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return false;
        }

        self.canonical_id.eq_ignore_ascii_case(&query)
            || self.display_name.eq_ignore_ascii_case(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(&query))
    }

    pub fn component(&self) -> Component {
        // Catalog names and constants are static and already valid.
        Component::from_catalog(self.canonical_id, self.antoine)
    }
}

const BUILTIN_CATALOG: [CatalogEntry; 2] = [
    CatalogEntry {
        canonical_id: "n-hexane",
        display_name: "n-Hexane",
        aliases: &["hexane", "nhexane", "c6h14"],
        antoine: AntoineCoefficients {
            a: 6.8763,
            b: 1171.53,
            c: 224.0,
        },
    },
    CatalogEntry {
        canonical_id: "n-heptane",
        display_name: "n-Heptane",
        aliases: &["heptane", "nheptane", "c7h16"],
        antoine: AntoineCoefficients {
            a: 6.893,
            b: 1260.0,
            c: 216.0,
        },
    },
];

pub fn builtin_catalog() -> &'static [CatalogEntry] {
    &BUILTIN_CATALOG
}

/// Look up a built-in component by id, display name or alias (case-insensitive).
pub fn find_component(name: &str) -> FluidResult<Component> {
    builtin_catalog()
        .iter()
        .find(|entry| entry.matches_query(name))
        .map(CatalogEntry::component)
        .ok_or_else(|| FluidError::UnknownComponent {
            name: name.to_string(),
        })
}

/// The default light component.
pub fn n_hexane() -> Component {
    BUILTIN_CATALOG[0].component()
}

/// The default heavy component.
pub fn n_heptane() -> Component {
    BUILTIN_CATALOG[1].component()
}
