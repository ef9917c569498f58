use ideaforge_scholar::core_api::{normalize_results, normalize_work, RawWork};
use proptest::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Strategies for arbitrary upstream records
// ---------------------------------------------------------------------------

fn arb_optional_string() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(".{0,40}")
}

fn arb_raw_record() -> impl Strategy<Value = serde_json::Value> {
    (
        arb_optional_string(),
        proptest::option::of(proptest::collection::vec(arb_optional_string(), 0..4)),
        proptest::option::of(1900i32..2100),
        arb_optional_string(),
        arb_optional_string(),
        arb_optional_string(),
    )
        .prop_map(|(title, authors, year, abstract_text, download_url, doi)| {
            let mut record = serde_json::Map::new();
            if let Some(title) = title {
                record.insert("title".into(), json!(title));
            }
            if let Some(authors) = authors {
                let authors: Vec<_> = authors
                    .into_iter()
                    .map(|name| match name {
                        Some(name) => json!({ "name": name }),
                        None => json!({}),
                    })
                    .collect();
                record.insert("authors".into(), json!(authors));
            }
            if let Some(year) = year {
                record.insert("yearPublished".into(), json!(year));
            }
            if let Some(abstract_text) = abstract_text {
                record.insert("abstract".into(), json!(abstract_text));
            }
            if let Some(download_url) = download_url {
                record.insert("downloadUrl".into(), json!(download_url));
            }
            if let Some(doi) = doi {
                record.insert("doi".into(), json!(doi));
            }
            serde_json::Value::Object(record)
        })
}

proptest! {
    /// Normalization is total: any combination of missing optional fields
    /// parses and normalizes, with each absent field replaced by its
    /// placeholder.
    #[test]
    fn normalization_is_total(record in arb_raw_record()) {
        let work: RawWork = serde_json::from_value(record.clone()).unwrap();
        let reference = normalize_work(work);

        if record.get("title").is_none() {
            prop_assert_eq!(&reference.title, "Untitled");
        }
        if record.get("abstract").is_none() {
            prop_assert_eq!(&reference.abstract_text, "Abstract not available");
        }
        if record.get("authors").is_none() {
            prop_assert!(reference.authors.is_empty());
        }
        if record.get("downloadUrl").is_none() && record.get("doi").is_none() {
            prop_assert_eq!(&reference.url, "");
        }
        prop_assert!(reference.year >= 1900);
    }

    /// Normalizing a whole `results` array never fails, regardless of how
    /// many records are well-formed.
    #[test]
    fn result_arrays_never_fail(records in proptest::collection::vec(arb_raw_record(), 0..8)) {
        let body = json!({ "results": records.clone() });
        let refs = normalize_results(&body);
        prop_assert_eq!(refs.len(), records.len());
    }

    /// Normalization is idempotent: feeding a normalized reference back
    /// through as a raw record is a fixed point.
    #[test]
    fn normalization_is_idempotent(record in arb_raw_record()) {
        let work: RawWork = serde_json::from_value(record).unwrap();
        let first = normalize_work(work);

        let as_record = json!({
            "title": first.title,
            "authors": first.authors.iter().map(|name| json!({"name": name})).collect::<Vec<_>>(),
            "yearPublished": first.year,
            "abstract": first.abstract_text,
            "downloadUrl": first.url,
        });
        let work: RawWork = serde_json::from_value(as_record).unwrap();
        let second = normalize_work(work);

        prop_assert_eq!(&first.title, &second.title);
        prop_assert_eq!(&first.authors, &second.authors);
        prop_assert_eq!(first.year, second.year);
        prop_assert_eq!(&first.abstract_text, &second.abstract_text);
        prop_assert_eq!(&first.url, &second.url);
    }
}
