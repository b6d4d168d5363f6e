use crate::error::{CatalogError, Result};
use crate::types::{Category, Term};
use serde::Deserialize;
use std::collections::HashSet;

/// The static catalog definition compiled into the binary.
static CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Fixed id -> display-name table for the category listing. Unmapped ids fall
/// back to the raw id.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("react", "React"),
    ("webdev", "Web Development"),
];

pub fn display_name_for(id: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, display)| *display)
        .unwrap_or(id)
}

/// Category summary as exposed by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: String,
    pub display_name: String,
    pub count: usize,
}

#[derive(Deserialize)]
struct CatalogDef {
    categories: Vec<Category>,
}

/// The complete, immutable term catalog. Built once at startup and shared
/// read-only for the life of the process; no mutation path exists.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    // Flattened copy in category-declaration order, then per-category order.
    // Every query operates on this view.
    all_terms: Vec<Term>,
}

impl Catalog {
    /// Build the catalog from the embedded definition. A structurally invalid
    /// definition (missing field, unknown difficulty, duplicate id) is fatal:
    /// the caller must not start serving.
    pub fn load() -> Result<Catalog> {
        let catalog = Self::from_json_str(CATALOG_JSON)?;
        log::info!(
            "Catalog loaded: {} terms in {} categories",
            catalog.all_terms.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog definition.
    pub fn from_json_str(raw: &str) -> Result<Catalog> {
        let def: CatalogDef = serde_json::from_str(raw)?;
        if def.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &def.categories {
            for term in &category.terms {
                if !seen.insert(term.id.as_str()) {
                    return Err(CatalogError::DuplicateId(term.id.clone()));
                }
            }
        }

        let all_terms = def
            .categories
            .iter()
            .flat_map(|category| category.terms.iter().cloned())
            .collect();

        Ok(Catalog {
            categories: def.categories,
            all_terms,
        })
    }

    /// Ordered category summaries with resolved display names.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.categories
            .iter()
            .map(|category| CategoryInfo {
                id: category.id.clone(),
                display_name: display_name_for(&category.id).to_string(),
                count: category.terms.len(),
            })
            .collect()
    }

    /// Category ids in declaration order.
    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// The flattened, order-preserving view of every term.
    pub fn all_terms(&self) -> &[Term] {
        &self.all_terms
    }

    /// Terms of one category, or an empty slice for an unknown name.
    pub fn terms_of(&self, category: &str) -> &[Term] {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .map(|c| c.terms.as_slice())
            .unwrap_or(&[])
    }
}
