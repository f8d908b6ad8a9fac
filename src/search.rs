use std::rc::Rc;

use crate::content::ContentRecord;

/// Case-insensitive substring match against the title or any tag.
pub fn matches(record: &ContentRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Records matching `query`, in catalog order. No ranking is applied.
pub fn filter(records: &[Rc<ContentRecord>], query: &str) -> Vec<Rc<ContentRecord>> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .cloned()
        .collect()
}

/// What the projects listing shows for a query.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// Nothing matched; the listing shows the contact prompt instead.
    NoMatches,
    Grid(Vec<Rc<ContentRecord>>),
}

impl ResultsView {
    pub fn from_results(results: Vec<Rc<ContentRecord>>) -> Self {
        if results.is_empty() {
            ResultsView::NoMatches
        } else {
            ResultsView::Grid(results)
        }
    }
}

/// The raw query of the projects listing. Stored exactly as typed;
/// whitespace is not trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn results(&self, records: &[Rc<ContentRecord>]) -> Vec<Rc<ContentRecord>> {
        filter(records, &self.0)
    }

    pub fn view(&self, records: &[Rc<ContentRecord>]) -> ResultsView {
        ResultsView::from_results(self.results(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, tags: &[&str]) -> Rc<ContentRecord> {
        Rc::new(ContentRecord {
            id,
            title: title.to_string(),
            description: format!("About {}", title),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            link: None,
        })
    }

    fn catalog() -> Vec<Rc<ContentRecord>> {
        vec![
            record(1, "Verve Photography", &["Portfolio", "Booking"]),
            record(2, "PocketLend", &["Fintech", "Onboarding"]),
            record(3, "Harbor Health", &["Healthcare", "Accessibility"]),
        ]
    }

    fn titles(records: &[Rc<ContentRecord>]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let records = catalog();
        let results = SearchQuery::default().results(&records);
        assert_eq!(
            titles(&results),
            vec!["Verve Photography", "PocketLend", "Harbor Health"]
        );
    }

    #[test]
    fn narrows_as_query_grows() {
        let records = catalog();
        let po = filter(&records, "po");
        assert_eq!(titles(&po), vec!["Verve Photography", "PocketLend"]);

        let pock = filter(&records, "pock");
        assert_eq!(titles(&pock), vec!["PocketLend"]);

        assert!(filter(&records, "zzz").is_empty());
    }

    #[test]
    fn longer_queries_return_subsets() {
        let records = catalog();
        let query = "healthcare";
        for end in 1..=query.len() {
            let shorter = filter(&records, &query[..end - 1]);
            let longer = filter(&records, &query[..end]);
            assert!(longer.iter().all(|r| shorter.iter().any(|s| Rc::ptr_eq(r, s))));
        }
    }

    #[test]
    fn matches_tags_case_insensitively() {
        let records = catalog();
        assert_eq!(titles(&filter(&records, "FINTECH")), vec!["PocketLend"]);
        assert_eq!(titles(&filter(&records, "access")), vec!["Harbor Health"]);
    }

    #[test]
    fn description_is_not_searched() {
        let records = catalog();
        assert!(filter(&records, "about").is_empty());
    }

    #[test]
    fn whitespace_query_is_literal() {
        let records = catalog();
        let spaces = SearchQuery::new("   ");
        assert_eq!(spaces.as_str(), "   ");
        assert!(!spaces.is_empty());
        assert!(spaces.results(&records).is_empty());

        let single = filter(&records, " ");
        assert_eq!(titles(&single), vec!["Verve Photography", "Harbor Health"]);
    }

    #[test]
    fn filtering_is_repeatable() {
        let records = catalog();
        let query = SearchQuery::new("o");
        assert_eq!(query.results(&records), query.results(&records));
    }

    #[test]
    fn unmatched_query_shows_no_results_state() {
        let records = catalog();
        assert_eq!(SearchQuery::new("zzz").view(&records), ResultsView::NoMatches);
        assert_eq!(SearchQuery::new("   ").view(&records), ResultsView::NoMatches);
    }

    #[test]
    fn matching_query_shows_grid_in_catalog_order() {
        let records = catalog();
        match SearchQuery::default().view(&records) {
            ResultsView::Grid(shown) => assert_eq!(shown, records),
            ResultsView::NoMatches => panic!("empty query hid the catalog"),
        }
        match SearchQuery::new("pock").view(&records) {
            ResultsView::Grid(shown) => assert_eq!(titles(&shown), vec!["PocketLend"]),
            ResultsView::NoMatches => panic!("expected PocketLend"),
        }
    }

    #[test]
    fn empty_catalog_has_nothing_to_show() {
        assert_eq!(SearchQuery::default().view(&[]), ResultsView::NoMatches);
    }
}
