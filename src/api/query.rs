//! Filter objects to query parameters.

use serde::Serialize;
use serde_json::Value;

use super::error::ServiceError;

/// Query parameters in the order they will be sent.
pub type QueryParams = Vec<(String, String)>;

/// Flatten a filter object into query pairs, dropping fields that
/// carry no constraint.
///
/// Absent (`None`) fields and strings that are empty after trimming are
/// omitted. Booleans and numbers are rendered with their JSON spelling.
/// Keys come out in lexicographic order.
pub fn clean_filter_params<F: Serialize>(filters: &F) -> Result<QueryParams, ServiceError> {
    let value = serde_json::to_value(filters)
        .map_err(|e| ServiceError::InvalidRequest(format!("unserializable filters: {}", e)))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ServiceError::InvalidRequest(format!(
                "filters must be an object, got {}",
                other
            )))
        }
    };

    let mut params = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    continue;
                }
                trimmed.to_string()
            }
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ServiceError::InvalidRequest(format!(
                    "filter '{}' is not a scalar",
                    name
                )))
            }
        };
        params.push((name, rendered));
    }
    params.sort();
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        name: Option<String>,
        is_active: Option<bool>,
        page: Option<u32>,
        min_stock: Option<i32>,
    }

    #[test]
    fn drops_empty_and_missing_fields() {
        let filters = Filters {
            name: Some(String::new()),
            is_active: Some(true),
            page: Some(0),
            min_stock: None,
        };

        let params = clean_filter_params(&filters).unwrap();
        assert_eq!(
            params,
            vec![
                ("isActive".to_string(), "true".to_string()),
                ("page".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_only_text_is_no_constraint() {
        let filters = Filters {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(clean_filter_params(&filters).unwrap().is_empty());
    }

    #[test]
    fn keeps_zero_and_false() {
        let filters = Filters {
            is_active: Some(false),
            min_stock: Some(0),
            ..Default::default()
        };
        let params = clean_filter_params(&filters).unwrap();
        assert!(params.contains(&("isActive".to_string(), "false".to_string())));
        assert!(params.contains(&("minStock".to_string(), "0".to_string())));
    }

    #[test]
    fn rejects_nested_values() {
        #[derive(Serialize)]
        struct Nested {
            ids: Vec<u32>,
        }
        let err = clean_filter_params(&Nested { ids: vec![1, 2] }).unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }
}
