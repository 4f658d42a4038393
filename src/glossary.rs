use crate::models::{GlossaryData, Term, TermCreate, TermListResponse, TermUpdate};

pub fn next_id(data: &GlossaryData) -> u64 {
    data.terms.iter().map(|term| term.id).max().unwrap_or(0) + 1
}

pub fn create_term(data: &mut GlossaryData, draft: TermCreate) -> Term {
    let term = Term {
        id: next_id(data),
        term: draft.term,
        definition: draft.definition,
        category: draft.category,
        related_terms: draft.related_terms.unwrap_or_default(),
    };
    data.terms.push(term.clone());
    term
}

pub fn find_term(data: &GlossaryData, id: u64) -> Option<&Term> {
    data.terms.iter().find(|term| term.id == id)
}

// Newest terms first; the page window is applied after filtering and
// ordering, so `total` counts every match, not just the visible page.
pub fn list_terms(
    data: &GlossaryData,
    page: u32,
    per_page: u32,
    search: Option<&str>,
) -> TermListResponse {
    let needle = search
        .filter(|query| !query.is_empty())
        .map(str::to_lowercase);

    let mut terms: Vec<Term> = data
        .terms
        .iter()
        .filter(|term| match &needle {
            Some(query) => contains_ci(&term.term, query) || contains_ci(&term.definition, query),
            None => true,
        })
        .cloned()
        .collect();
    terms.sort_by(|a, b| b.id.cmp(&a.id));

    let total = terms.len();
    let start = (page as usize).saturating_sub(1) * per_page as usize;
    let terms = terms
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    TermListResponse {
        terms,
        total,
        page,
        per_page,
    }
}

pub fn update_term(data: &mut GlossaryData, id: u64, update: TermUpdate) -> Option<Term> {
    let term = data.terms.iter_mut().find(|term| term.id == id)?;
    if let Some(name) = update.term {
        term.term = name;
    }
    if let Some(definition) = update.definition {
        term.definition = definition;
    }
    // An explicit null arrives as Some(None) and clears the field.
    if let Some(category) = update.category {
        term.category = category;
    }
    if let Some(related) = update.related_terms {
        term.related_terms = related.unwrap_or_default();
    }
    Some(term.clone())
}

pub fn delete_term(data: &mut GlossaryData, id: u64) -> bool {
    let before = data.terms.len();
    data.terms.retain(|term| term.id != id);
    data.terms.len() != before
}

// The dedicated search also matches on category, unlike the list filter.
pub fn search_terms(data: &GlossaryData, query: &str) -> Vec<Term> {
    let needle = query.to_lowercase();
    data.terms
        .iter()
        .filter(|term| {
            contains_ci(&term.term, &needle)
                || contains_ci(&term.definition, &needle)
                || term
                    .category
                    .as_deref()
                    .is_some_and(|category| contains_ci(category, &needle))
        })
        .cloned()
        .collect()
}

fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn term(id: u64, name: &str, definition: &str, category: Option<&str>) -> Term {
        Term {
            id,
            term: name.to_string(),
            definition: definition.to_string(),
            category: category.map(str::to_string),
            related_terms: Vec::new(),
        }
    }

    fn draft(name: &str, definition: &str) -> TermCreate {
        TermCreate {
            term: name.to_string(),
            definition: definition.to_string(),
            category: None,
            related_terms: None,
        }
    }

    #[test]
    fn ids_start_at_one_and_follow_the_maximum() {
        let mut data = GlossaryData::default();
        let first = create_term(&mut data, draft("API", "interface"));
        assert_eq!(first.id, 1);

        data.terms.push(term(10, "Cache", "fast storage", None));
        let next = create_term(&mut data, draft("Queue", "fifo"));
        assert_eq!(next.id, 11);
    }

    #[test]
    fn listing_orders_newest_first_and_pages() {
        let mut data = GlossaryData::default();
        for i in 1..=5 {
            data.terms
                .push(term(i, &format!("term-{i}"), "definition", None));
        }

        let page = list_terms(&data, 1, 2, None);
        assert_eq!(page.total, 5);
        assert_eq!(page.terms.len(), 2);
        assert_eq!(page.terms[0].id, 5);
        assert_eq!(page.terms[1].id, 4);

        let last = list_terms(&data, 3, 2, None);
        assert_eq!(last.terms.len(), 1);
        assert_eq!(last.terms[0].id, 1);
    }

    #[test]
    fn listing_past_the_end_is_empty_but_keeps_total() {
        let mut data = GlossaryData::default();
        data.terms.push(term(1, "API", "interface", None));

        let page = list_terms(&data, 7, 10, None);
        assert!(page.terms.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.page, 7);
    }

    #[test]
    fn list_filter_covers_term_and_definition_only() {
        let mut data = GlossaryData::default();
        data.terms.push(term(1, "REST", "style of API", None));
        data.terms.push(term(2, "Cache", "fast lookup", Some("rest")));

        let by_name = list_terms(&data, 1, 10, Some("rest"));
        assert_eq!(by_name.total, 1);
        assert_eq!(by_name.terms[0].id, 1);

        let empty = list_terms(&data, 1, 10, Some(""));
        assert_eq!(empty.total, 2);
    }

    #[test]
    fn dedicated_search_also_matches_category() {
        let mut data = GlossaryData::default();
        data.terms.push(term(1, "REST", "style of API", None));
        data.terms.push(term(2, "Cache", "fast lookup", Some("Rest")));

        let results = search_terms(&data, "rest");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn create_accepts_null_for_optional_fields() {
        let mut data = GlossaryData::default();
        let draft: TermCreate = serde_json::from_value(json!({
            "term": "Кэш",
            "definition": "быстрое хранилище",
            "category": null,
            "related_terms": null
        }))
        .expect("null optional fields deserialize");

        let created = create_term(&mut data, draft);
        assert_eq!(created.category, None);
        assert!(created.related_terms.is_empty());
    }

    #[test]
    fn update_applies_only_provided_fields() {
        let mut data = GlossaryData::default();
        data.terms
            .push(term(1, "API", "interface", Some("architecture")));

        let updated = update_term(
            &mut data,
            1,
            TermUpdate {
                definition: Some("application programming interface".to_string()),
                ..TermUpdate::default()
            },
        )
        .expect("term exists");

        assert_eq!(updated.term, "API");
        assert_eq!(updated.definition, "application programming interface");
        assert_eq!(updated.category.as_deref(), Some("architecture"));
        assert!(update_term(&mut data, 99, TermUpdate::default()).is_none());
    }

    #[test]
    fn update_clears_fields_given_an_explicit_null() {
        let mut data = GlossaryData::default();
        data.terms.push(Term {
            related_terms: vec!["HTTP".to_string()],
            ..term(1, "REST", "стиль", Some("архитектура"))
        });

        let absent: TermUpdate = serde_json::from_value(json!({
            "definition": "архитектурный стиль"
        }))
        .expect("payload deserializes");
        let updated = update_term(&mut data, 1, absent).expect("term exists");
        assert_eq!(updated.category.as_deref(), Some("архитектура"));
        assert_eq!(updated.related_terms, vec!["HTTP".to_string()]);

        let nulled: TermUpdate = serde_json::from_value(json!({
            "category": null,
            "related_terms": null
        }))
        .expect("payload deserializes");
        let updated = update_term(&mut data, 1, nulled).expect("term exists");
        assert_eq!(updated.category, None);
        assert!(updated.related_terms.is_empty());
    }

    #[test]
    fn delete_reports_whether_a_term_was_removed() {
        let mut data = GlossaryData::default();
        data.terms.push(term(1, "API", "interface", None));

        assert!(delete_term(&mut data, 1));
        assert!(data.terms.is_empty());
        assert!(!delete_term(&mut data, 1));
    }
}
