use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

pub const MAX_TAGS: usize = 3;

const BUNDLED_CATALOG: &str = include_str!("content/catalog.json");

/// One catalog item. Optional media and links are explicit `Option`s so
/// views check presence instead of probing for fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },
    #[error("record {id} in {list} has {count} tags, at most 3 allowed")]
    TooManyTags {
        list: &'static str,
        id: u32,
        count: usize,
    },
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    services: Vec<ContentRecord>,
    #[serde(default)]
    philosophy: Vec<ContentRecord>,
    #[serde(default)]
    projects: Vec<ContentRecord>,
    #[serde(default)]
    companies: Vec<ContentRecord>,
    #[serde(default)]
    testimonials: Vec<ContentRecord>,
    #[serde(default)]
    legal: Vec<ContentRecord>,
}

/// Immutable site content. Records are shared with views and modals
/// through `Rc`, never cloned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub services: Vec<Rc<ContentRecord>>,
    pub philosophy: Vec<Rc<ContentRecord>>,
    pub projects: Vec<Rc<ContentRecord>>,
    pub companies: Vec<Rc<ContentRecord>>,
    pub testimonials: Vec<Rc<ContentRecord>>,
    pub legal: Vec<Rc<ContentRecord>>,
}

impl Catalog {
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(data)?;
        Ok(Self {
            services: load_list("services", raw.services)?,
            philosophy: load_list("philosophy", raw.philosophy)?,
            projects: load_list("projects", raw.projects)?,
            companies: load_list("companies", raw.companies)?,
            testimonials: load_list("testimonials", raw.testimonials)?,
            legal: load_list("legal", raw.legal)?,
        })
    }
}

fn load_list(
    list: &'static str,
    records: Vec<ContentRecord>,
) -> Result<Vec<Rc<ContentRecord>>, CatalogError> {
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(CatalogError::DuplicateId { list, id: record.id });
        }
        if record.tags.len() > MAX_TAGS {
            return Err(CatalogError::TooManyTags {
                list,
                id: record.id,
                count: record.tags.len(),
            });
        }
    }
    Ok(records.into_iter().map(Rc::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().expect("bundled catalog should parse");
        assert!(!catalog.services.is_empty());
        assert!(!catalog.philosophy.is_empty());
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.companies.is_empty());
        assert!(!catalog.testimonials.is_empty());
        assert_eq!(catalog.legal.len(), 2);
    }

    #[test]
    fn projects_keep_authored_order() {
        let catalog = Catalog::bundled().unwrap();
        let titles: Vec<&str> = catalog.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles[0], "Verve Photography");
        assert_eq!(titles[1], "PocketLend");
    }

    #[test]
    fn optional_fields_default_to_none() {
        let catalog = Catalog::from_json(
            r#"{"projects": [{"id": 1, "title": "Bare", "description": "No media"}]}"#,
        )
        .unwrap();
        let bare = &catalog.projects[0];
        assert!(bare.tags.is_empty());
        assert!(bare.image.is_none());
        assert!(bare.link.is_none());
        assert!(catalog.services.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_json(
            r#"{"services": [
                {"id": 4, "title": "A", "description": ""},
                {"id": 4, "title": "B", "description": ""}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { list: "services", id: 4 }));
    }

    #[test]
    fn same_id_allowed_across_lists() {
        let catalog = Catalog::from_json(
            r#"{
                "services": [{"id": 1, "title": "A", "description": ""}],
                "projects": [{"id": 1, "title": "B", "description": ""}]
            }"#,
        );
        assert!(catalog.is_ok());
    }

    #[test]
    fn rejects_more_than_three_tags() {
        let err = Catalog::from_json(
            r#"{"projects": [
                {"id": 9, "title": "Busy", "description": "", "tags": ["a", "b", "c", "d"]}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooManyTags { list: "projects", id: 9, count: 4 }
        ));
        assert_eq!(
            err.to_string(),
            "record 9 in projects has 4 tags, at most 3 allowed"
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
