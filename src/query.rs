use crate::fieldset::FieldSet;
use serde::Serialize;
use smol_str::SmolStr;

// ─── Query ───────────────────────────────────────────────────────────────────

/// The query payload of one sparse-fieldset fetch: the requested fields plus
/// an optional comma-separated `include` of related resources. Absent parts
/// are omitted from the serialized payload entirely. Turning the payload
/// into a URL is the transport's job, not ours.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<SmolStr>,
}

impl Query {
    pub fn new(fields: Option<FieldSet>, include: Option<&str>) -> Self {
        Self {
            fields,
            include: include.map(SmolStr::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> FieldSet {
        FieldSet::try_from(pairs).expect("valid field set")
    }

    #[test]
    fn test_query_with_fields() {
        let query = Query::new(Some(fields(&[("post", "name")])), None);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "fields": { "post": "name" } })
        );
    }

    #[test]
    fn test_query_with_fields_and_include() {
        let query = Query::new(
            Some(fields(&[("post", "name"), ("comments", "title")])),
            Some("comments"),
        );
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "fields": { "post": "name", "comments": "title" },
                "include": "comments",
            })
        );
    }

    #[test]
    fn test_empty_query_serializes_to_nothing() {
        let query = Query::default();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
    }
}
