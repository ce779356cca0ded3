use std::collections::BTreeMap;

use serde::Serialize;

/// A single glossary entry. `related_terms` holds display names of other
/// entries; the references are weak and resolved by lookup at render time.
#[derive(Debug, Clone, Serialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    pub category: String,
    pub related_terms: Vec<String>,
}

impl GlossaryTerm {
    pub fn new(
        term: &str,
        definition: &str,
        category: &str,
        related_terms: &[&str],
    ) -> Self {
        Self {
            term: term.to_string(),
            definition: definition.to_string(),
            category: category.to_string(),
            related_terms: related_terms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// First letter of the display name, uppercased, for alphabetical
    /// grouping.
    pub fn initial(&self) -> char {
        self.term
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('#')
    }
}

/// Filter terms by free text (name or definition, case-insensitive) and an
/// optional exact category. An empty query matches everything.
pub fn filter_terms<'a>(
    terms: &'a [GlossaryTerm],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a GlossaryTerm> {
    let needle = query.to_lowercase();
    terms
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.term.to_lowercase().contains(&needle)
                || t.definition.to_lowercase().contains(&needle)
        })
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}

/// Group terms by initial letter, sorting within each group by name.
pub fn group_by_letter<'a>(terms: &[&'a GlossaryTerm]) -> BTreeMap<char, Vec<&'a GlossaryTerm>> {
    let mut groups: BTreeMap<char, Vec<&GlossaryTerm>> = BTreeMap::new();
    for term in terms {
        groups.entry(term.initial()).or_default().push(term);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.term.cmp(&b.term));
    }
    groups
}

/// Distinct categories in order of first appearance.
pub fn categories(terms: &[GlossaryTerm]) -> Vec<&str> {
    let mut seen = Vec::new();
    for term in terms {
        if !seen.contains(&term.category.as_str()) {
            seen.push(term.category.as_str());
        }
    }
    seen
}

/// Resolve a term's related-term names to actual entries. Dangling names
/// are silently omitted; resolution never fails.
pub fn resolve_related<'a>(
    term: &GlossaryTerm,
    terms: &'a [GlossaryTerm],
) -> Vec<&'a GlossaryTerm> {
    term.related_terms
        .iter()
        .filter_map(|name| terms.iter().find(|t| &t.term == name))
        .collect()
}
