use lexicon_catalog::{Catalog, Difficulty, Term};

/// Parameters of a term-listing query.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// When set and not the literal "all", the working set becomes exactly the
    /// named category's terms. This replaces the whole-catalog view rather
    /// than intersecting with it, so a category filter and a catalog-wide
    /// search cannot both apply; the remaining filters run inside the
    /// category. Unknown names yield an empty working set, not an error.
    pub category: Option<String>,

    /// Strict equality match. An unrecognized value matches nothing.
    pub difficulty: Option<String>,

    /// Free-text needle, trimmed and lowercased, matched as a substring of the
    /// name, localized label, description, or any tag.
    pub search: Option<String>,

    pub limit: usize,
    pub offset: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            difficulty: None,
            search: None,
            limit: 50,
            offset: 0,
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone)]
pub struct TermListPage {
    pub terms: Vec<Term>,
    /// Filtered count before pagination.
    pub total: usize,
    pub has_more: bool,
}

enum DifficultyFilter {
    All,
    Level(Difficulty),
    Unrecognized,
}

fn difficulty_filter(raw: Option<&str>) -> DifficultyFilter {
    match raw {
        None | Some("all") => DifficultyFilter::All,
        Some(other) => match Difficulty::parse(other) {
            Some(level) => DifficultyFilter::Level(level),
            None => DifficultyFilter::Unrecognized,
        },
    }
}

/// Filter and paginate the catalog. Filtering never reorders: the page
/// preserves catalog (or selected-category) declaration order.
pub fn list_terms(catalog: &Catalog, query: &ListQuery) -> TermListPage {
    let working: &[Term] = match query.category.as_deref() {
        Some(category) if category != "all" => catalog.terms_of(category),
        _ => catalog.all_terms(),
    };

    let difficulty = difficulty_filter(query.difficulty.as_deref());
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let filtered: Vec<&Term> = working
        .iter()
        .filter(|term| match difficulty {
            DifficultyFilter::All => true,
            DifficultyFilter::Level(level) => term.difficulty == level,
            DifficultyFilter::Unrecognized => false,
        })
        .filter(|term| match &needle {
            Some(needle) => matches_search(term, needle),
            None => true,
        })
        .collect();

    let total = filtered.len();
    let has_more = query.offset.saturating_add(query.limit) < total;
    let terms: Vec<Term> = filtered
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();

    log::debug!(
        "list_terms: category={:?} difficulty={:?} search={:?} -> total={}, page={}",
        query.category,
        query.difficulty,
        query.search,
        total,
        terms.len()
    );

    TermListPage {
        terms,
        total,
        has_more,
    }
}

/// OR across fields. The needle arrives lowercased; the localized label is
/// compared raw since ASCII lowercasing does not apply to it.
fn matches_search(term: &Term, needle: &str) -> bool {
    term.name.to_lowercase().contains(needle)
        || term.localized_label.contains(needle)
        || term.description.to_lowercase().contains(needle)
        || term.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
