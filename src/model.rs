//! Mock endpoint definitions as stored on disk and exchanged with the frontend.

use axum::http::Method;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP verb a mock endpoint answers to. Stored and rendered uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Put => "PUT",
            ApiMethod::Delete => "DELETE",
        }
    }

    /// Exact match against the inbound request verb.
    pub fn matches(&self, method: &Method) -> bool {
        self.as_str() == method.as_str()
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethod(pub String);

impl fmt::Display for UnsupportedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported method: {} (expected GET, POST, PUT or DELETE)", self.0)
    }
}

impl std::error::Error for UnsupportedMethod {}

impl FromStr for ApiMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(ApiMethod::Get),
            "POST" => Ok(ApiMethod::Post),
            "PUT" => Ok(ApiMethod::Put),
            "DELETE" => Ok(ApiMethod::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

/// One user-defined mock endpoint. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub id: String,
    pub endpoint: String,
    pub method: ApiMethod,
    /// Canned payload: either an item array or an object with an optional `mockData` array.
    pub response: Value,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
}

/// ISO-8601 UTC with exactly three fractional digits (`2024-05-01T10:00:00.000Z`).
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl ApiConfig {
    /// New record with a fresh UUID v4 id, stamped now (millisecond precision).
    pub fn new(endpoint: String, method: ApiMethod, response: Value) -> Self {
        ApiConfig {
            id: uuid::Uuid::new_v4().to_string(),
            endpoint,
            method,
            response,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Body of `POST /api/create`. The method is parsed leniently; see [`ApiMethod::from_str`].
#[derive(Clone, Debug, Deserialize)]
pub struct CreateApiRequest {
    pub endpoint: String,
    pub method: String,
    pub response: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<ApiMethod>().unwrap(), ApiMethod::Get);
        assert_eq!("Delete".parse::<ApiMethod>().unwrap(), ApiMethod::Delete);
        assert!("PATCH".parse::<ApiMethod>().is_err());
    }

    #[test]
    fn method_matches_request_verb_exactly() {
        assert!(ApiMethod::Put.matches(&Method::PUT));
        assert!(!ApiMethod::Put.matches(&Method::POST));
        assert!(!ApiMethod::Get.matches(&Method::HEAD));
    }

    #[test]
    fn serializes_camel_case_with_millis() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let config = ApiConfig {
            id: "abc".into(),
            endpoint: "users".into(),
            method: ApiMethod::Post,
            response: json!([{ "id": 1 }]),
            created_at,
        };
        let v = serde_json::to_value(&config).unwrap();
        assert_eq!(v["method"], "POST");
        assert_eq!(v["createdAt"], "2024-05-01T10:00:00.123Z");
        let back: ApiConfig = serde_json::from_value(v).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn whole_seconds_keep_three_fraction_digits() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let config = ApiConfig {
            id: "abc".into(),
            endpoint: "users".into(),
            method: ApiMethod::Get,
            response: json!({}),
            created_at,
        };
        let v = serde_json::to_value(&config).unwrap();
        assert_eq!(v["createdAt"], "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = ApiConfig::new("a".into(), ApiMethod::Get, json!({}));
        let b = ApiConfig::new("a".into(), ApiMethod::Get, json!({}));
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
