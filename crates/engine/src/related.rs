use crate::error::{EngineError, Result};
use lexicon_catalog::{Catalog, Term};
use serde::{Deserialize, Serialize};

/// Cap on the related-term list.
pub const MAX_RELATED: usize = 5;

/// Slim projection of a related term, enough to render a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTerm {
    pub id: String,
    pub name: String,
    pub localized_label: String,
}

impl From<&Term> for RelatedTerm {
    fn from(term: &Term) -> Self {
        Self {
            id: term.id.clone(),
            name: term.name.clone(),
            localized_label: term.localized_label.clone(),
        }
    }
}

/// A term together with its computed related terms.
#[derive(Debug, Clone)]
pub struct TermDetail {
    pub term: Term,
    pub related: Vec<RelatedTerm>,
}

/// Look up a term by id and collect up to [`MAX_RELATED`] related terms.
///
/// A candidate is related when its tag set intersects the source term's, or
/// when one of the source's related-name hints is a substring of the
/// candidate's name (partial matches count; the hints are free text, not
/// foreign keys). Candidates are taken in catalog order with no ranking
/// between the two match kinds. The source term itself is never included.
pub fn resolve(catalog: &Catalog, id: &str) -> Result<TermDetail> {
    let term = catalog
        .all_terms()
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| EngineError::TermNotFound(id.to_string()))?;

    let related: Vec<RelatedTerm> = catalog
        .all_terms()
        .iter()
        .filter(|candidate| candidate.id != term.id)
        .filter(|candidate| shares_tag(term, candidate) || hinted_by_name(term, candidate))
        .take(MAX_RELATED)
        .map(RelatedTerm::from)
        .collect();

    log::debug!("resolve: id={id} -> {} related", related.len());

    Ok(TermDetail {
        term: term.clone(),
        related,
    })
}

fn shares_tag(source: &Term, candidate: &Term) -> bool {
    source.tags.iter().any(|tag| candidate.tags.contains(tag))
}

fn hinted_by_name(source: &Term, candidate: &Term) -> bool {
    source
        .related_term_names
        .iter()
        .any(|hint| candidate.name.contains(hint.as_str()))
}
