use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of a list request.
///
/// `total` counts every record matching the query, not only the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome<T> {
    Loaded { records: Vec<T>, total: usize },
    Failed { reason: String },
}

impl<T> ListOutcome<T> {
    pub fn empty() -> Self {
        ListOutcome::Loaded {
            records: Vec::new(),
            total: 0,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ListOutcome::Failed {
            reason: reason.into(),
        }
    }
}

impl<T: DeserializeOwned> ListOutcome<T> {
    /// Decode a list body.
    ///
    /// Accepts a bare array or a `{data, total?}` envelope. Records that fail
    /// to decode are skipped. Any other shape becomes an empty page.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Array(items) => {
                let records = decode_records(items);
                let total = records.len();
                ListOutcome::Loaded { records, total }
            }
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => {
                    let records = decode_records(items);
                    let total = map
                        .get("total")
                        .and_then(Value::as_u64)
                        .map(|t| t as usize)
                        .unwrap_or(records.len());
                    ListOutcome::Loaded { records, total }
                }
                _ => Self::empty(),
            },
            _ => Self::empty(),
        }
    }
}

fn decode_records<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    fn loaded(outcome: ListOutcome<Row>) -> (Vec<String>, usize) {
        match outcome {
            ListOutcome::Loaded { records, total } => {
                (records.into_iter().map(|r| r.id).collect(), total)
            }
            ListOutcome::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[test]
    fn test_bare_array_counts_records() {
        let (ids, total) = loaded(ListOutcome::from_json(json!([{"id": "a"}, {"id": "b"}])));
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_envelope_uses_server_total() {
        let body = json!({"data": [{"id": "a"}], "page": 3, "pageSize": 1, "total": 42});
        let (ids, total) = loaded(ListOutcome::from_json(body));
        assert_eq!(ids, vec!["a"]);
        assert_eq!(total, 42);
    }

    #[test]
    fn test_envelope_without_total() {
        let (_, total) = loaded(ListOutcome::from_json(json!({"data": [{"id": "a"}]})));
        assert_eq!(total, 1);
    }

    #[test]
    fn test_malformed_shapes_become_empty() {
        for body in [json!(null), json!("oops"), json!({"data": "x"}), json!({"items": []})] {
            assert_eq!(loaded(ListOutcome::from_json(body)), (vec![], 0));
        }
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let (ids, total) = loaded(ListOutcome::from_json(json!([{"id": "a"}, 17, {"name": "x"}])));
        assert_eq!(ids, vec!["a"]);
        assert_eq!(total, 1);
    }
}
