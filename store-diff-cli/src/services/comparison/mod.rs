// Comparison service: the mock vs prod store pipeline
//
// Fetches both sources concurrently, then runs the synchronous
// normalize -> diff -> reconcile steps. Either a full FinalResult or an error
// comes out, never a partial result.

mod error;

pub use error::CompareError;

use log::{error, info, warn};
use std::collections::HashSet;

use crate::api::{RawDocument, SourceClient, SourceLabel};
use crate::config::SourceLocations;
use crate::diff::{
    FinalResult, IdentifierIndex, StoreSummary, diff_fields, diff_one_sided, merge_store_diffs,
    normalize, retain_stores,
};

/// Fetch both sources and compare them
pub async fn compare_sources(
    client: &SourceClient,
    locations: &SourceLocations,
) -> Result<FinalResult, CompareError> {
    let (mock, prod) = tokio::join!(
        client.fetch(SourceLabel::Mock, &locations.mock),
        client.fetch(SourceLabel::Prod, &locations.prod)
    );

    let (mock, prod) = match (mock, prod) {
        (Ok(mock), Ok(prod)) => (mock, prod),
        (Err(mock_err), Err(prod_err)) => {
            error!("Both sources are unavailable; {}", prod_err);
            return Err(mock_err.into());
        }
        (Err(err), _) | (_, Err(err)) => return Err(err.into()),
    };

    compare_documents(&mock, &prod)
}

/// Compare two already-fetched documents
pub fn compare_documents(
    mock: &RawDocument,
    prod: &RawDocument,
) -> Result<FinalResult, CompareError> {
    let mock_stores = summarize(SourceLabel::Mock, mock)?;
    let prod_stores = summarize(SourceLabel::Prod, prod)?;

    let mock_ids = IdentifierIndex::from_summaries(&mock_stores);
    let prod_ids = IdentifierIndex::from_summaries(&prod_stores);

    let mock_diff = diff_one_sided(&mock_stores, &mock_ids, &prod_ids, SourceLabel::Mock);
    let prod_diff = diff_one_sided(&prod_stores, &prod_ids, &mock_ids, SourceLabel::Prod);

    let stores = merge_store_diffs(&mock_diff.missing, &prod_diff.missing);
    let prod_fields: HashSet<String> = prod_diff.all_fields.iter().cloned().collect();
    let fields = diff_fields(&mock_diff.all_fields, &prod_fields);

    info!(
        "Compared {} mock stores with {} prod stores: {} mock-only, {} prod-only, {} mock-only fields",
        mock_stores.len(),
        prod_stores.len(),
        mock_diff.missing.len(),
        prod_diff.missing.len(),
        fields.len()
    );

    Ok(FinalResult { stores, fields })
}

fn summarize(source: SourceLabel, document: &RawDocument) -> Result<Vec<StoreSummary>, CompareError> {
    let normalized = normalize(&document.data)
        .map_err(|error| CompareError::MalformedEntry { source, error })?;
    let stores = retain_stores(normalized);

    let index = IdentifierIndex::from_summaries(&stores);
    if index.len() != stores.len() {
        warn!(
            "{} source has {} duplicate store ids; they will be reported once per occurrence",
            source,
            stores.len() - index.len()
        );
    }

    Ok(stores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientConfig;
    use crate::api::models::StoreId;
    use crate::diff::models::MissingStore;
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::time::Duration;

    fn document(value: Value) -> RawDocument {
        serde_json::from_value(value).unwrap()
    }

    fn missing(id: &str, from: SourceLabel) -> MissingStore {
        MissingStore {
            store_id: StoreId::from(id),
            missing_from: from,
        }
    }

    #[test]
    fn test_disjoint_stores_and_fields() {
        let mock = document(json!({ "data": [
            { "id": 1, "type": "stores", "attributes": { "x": 1, "y": 2 } }
        ]}));
        let prod = document(json!({ "data": [
            { "id": 2, "type": "stores", "attributes": { "y": 1, "z": 2 } }
        ]}));

        let result = compare_documents(&mock, &prod).unwrap();

        assert_eq!(
            result.stores,
            vec![missing("1", SourceLabel::Prod), missing("2", SourceLabel::Mock)]
        );
        assert_eq!(result.fields, vec!["x"]);
    }

    #[test]
    fn test_identical_sources() {
        let data = json!({ "data": [
            { "id": "a", "type": "stores", "attributes": { "name": "A", "city": "Gent" } },
            { "id": "b", "type": "stores", "attributes": { "name": "B", "city": "Leuven" } }
        ]});

        let result = compare_documents(&document(data.clone()), &document(data)).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_mock_source() {
        let mock = document(json!({ "data": [] }));
        let prod = document(json!({ "data": [
            { "id": "p1", "type": "stores", "attributes": { "name": "P" } }
        ]}));

        let result = compare_documents(&mock, &prod).unwrap();

        assert_eq!(result.stores, vec![missing("p1", SourceLabel::Mock)]);
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_non_store_entries_are_ignored() {
        let mock = document(json!({ "data": [
            { "id": "1", "type": "stores", "attributes": { "name": "A" } },
            { "id": "99", "type": "regions", "attributes": { "region_only": true } }
        ]}));
        let prod = document(json!({ "data": [
            { "id": "1", "type": "stores", "attributes": { "name": "A" } }
        ]}));

        let result = compare_documents(&mock, &prod).unwrap();

        assert!(result.stores.is_empty());
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_fields_only_one_direction() {
        let mock = document(json!({ "data": [
            { "id": "1", "type": "stores", "attributes": { "name": "A" } },
            { "id": "2", "type": "stores", "attributes": { "name": "B", "mock_extra": 1 } }
        ]}));
        let prod = document(json!({ "data": [
            { "id": "1", "type": "stores", "attributes": { "name": "A", "prod_extra": 1 } },
            { "id": "2", "type": "stores", "attributes": { "name": "B" } }
        ]}));

        let result = compare_documents(&mock, &prod).unwrap();

        assert!(result.stores.is_empty());
        assert_eq!(result.fields, vec!["mock_extra"]);
    }

    #[test]
    fn test_integral_float_and_integer_ids_match() {
        let mock = document(json!({ "data": [
            { "id": 1.0, "type": "stores", "attributes": { "name": "A" } },
            { "id": "2", "type": "stores", "attributes": { "name": "B" } }
        ]}));
        let prod = document(json!({ "data": [
            { "id": 1, "type": "stores", "attributes": { "name": "A" } },
            { "id": 2.0, "type": "stores", "attributes": { "name": "B" } }
        ]}));

        let result = compare_documents(&mock, &prod).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_repeatable() {
        let mock = document(json!({ "data": [
            { "id": "1", "type": "stores", "attributes": { "a": 1, "b": 2 } },
            { "id": "3", "type": "stores", "attributes": { "c": 1 } }
        ]}));
        let prod = document(json!({ "data": [
            { "id": "2", "type": "stores", "attributes": { "b": 1 } }
        ]}));

        let first = compare_documents(&mock, &prod).unwrap();
        let second = compare_documents(&mock, &prod).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_entry_names_source_and_id() {
        let mock = document(json!({ "data": [] }));
        let prod = document(json!({ "data": [
            { "id": 42, "type": "stores" }
        ]}));

        let err = compare_documents(&mock, &prod).unwrap_err();

        assert_eq!(err.source_label(), SourceLabel::Prod);
        assert_eq!(
            err.to_string(),
            "prod source has a malformed store entry 0 (id 42): missing attributes"
        );
    }

    #[test]
    fn test_bundled_sample_data() {
        let mock: RawDocument =
            serde_json::from_str(include_str!("../../../data/mockStore.json")).unwrap();
        let prod: RawDocument =
            serde_json::from_str(include_str!("../../../data/prodStore.json")).unwrap();

        let result = compare_documents(&mock, &prod).unwrap();

        assert_eq!(
            result.stores,
            vec![missing("1004", SourceLabel::Prod), missing("1003", SourceLabel::Mock)]
        );
        assert_eq!(result.fields, vec!["click_and_collect", "parking_spots"]);
    }

    fn client() -> SourceClient {
        SourceClient::new(ClientConfig {
            base_location: String::new(),
            query: BTreeMap::new(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_compare_sources_from_files() {
        let mut mock = tempfile::NamedTempFile::new().unwrap();
        write!(
            mock,
            r#"{{ "data": [ {{ "id": "1", "type": "stores", "attributes": {{ "x": 1 }} }} ] }}"#
        )
        .unwrap();
        let mut prod = tempfile::NamedTempFile::new().unwrap();
        write!(prod, r#"{{ "data": [] }}"#).unwrap();

        let locations = SourceLocations {
            mock: mock.path().to_string_lossy().to_string(),
            prod: prod.path().to_string_lossy().to_string(),
        };

        let result = compare_sources(&client(), &locations).await.unwrap();

        assert_eq!(result.stores, vec![missing("1", SourceLabel::Prod)]);
        assert_eq!(result.fields, vec!["x"]);
    }

    #[tokio::test]
    async fn test_unavailable_source_aborts() {
        let mut mock = tempfile::NamedTempFile::new().unwrap();
        write!(mock, r#"{{ "data": [] }}"#).unwrap();

        let locations = SourceLocations {
            mock: mock.path().to_string_lossy().to_string(),
            prod: "/no/such/prod.json".to_string(),
        };

        let err = compare_sources(&client(), &locations).await.unwrap_err();

        assert!(matches!(err, CompareError::SourceUnavailable(_)));
        assert_eq!(err.source_label(), SourceLabel::Prod);
        assert_eq!(
            err.to_string(),
            "prod source unavailable: failed to read /no/such/prod.json"
        );

        // The io cause appears exactly once in the rendered chain
        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain.matches("os error").count(), 1);
    }

    #[tokio::test]
    async fn test_both_unavailable_reports_mock() {
        let locations = SourceLocations {
            mock: "/no/such/mock.json".to_string(),
            prod: "/no/such/prod.json".to_string(),
        };

        let err = compare_sources(&client(), &locations).await.unwrap_err();

        assert_eq!(err.source_label(), SourceLabel::Mock);
    }
}
