use std::collections::BTreeMap;

/// Options for a request that carries a payload.
///
/// Only the query string, extra headers and the JSON body are recognized. Authentication
/// headers are added by the client and do not belong here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_each_field() {
        let options = RequestOptions::new()
            .with_query("type", "Sale")
            .with_header("X-Trace", "1")
            .with_json(json!({ "amount": 10 }));

        assert_eq!(options.query.get("type").map(String::as_str), Some("Sale"));
        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("1"));
        assert_eq!(options.body, Some(json!({ "amount": 10 })));
    }

    #[test]
    fn default_is_empty() {
        let options = RequestOptions::default();
        assert!(options.query.is_empty());
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }
}
