//! National-records search for `/api/npd`: query parameters and payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Search parameters for the national-records endpoint.
///
/// Unlike the other endpoints this one takes a mapping of named fields that
/// is passed through as the query string. At least one parameter must be
/// set. Build with the `with_*` methods:
///
/// ```
/// use osintcat_sdk::types::NpdSearchParams;
///
/// let params = NpdSearchParams::new()
///     .with_first_name("John")
///     .with_last_name("Doe")
///     .with_state("TX");
/// assert_eq!(params.state.as_deref(), Some("TX"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NpdSearchParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub ssn: Option<String>,
    pub dob: Option<String>,
    pub phone1: Option<String>,
    /// Comma-separated source filter.
    pub sources: Option<String>,
    /// Free-form extra parameters forwarded verbatim.
    pub extra: Vec<(String, String)>,
}

impl NpdSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn with_zip(mut self, value: impl Into<String>) -> Self {
        self.zip = Some(value.into());
        self
    }

    pub fn with_ssn(mut self, value: impl Into<String>) -> Self {
        self.ssn = Some(value.into());
        self
    }

    pub fn with_dob(mut self, value: impl Into<String>) -> Self {
        self.dob = Some(value.into());
        self
    }

    pub fn with_phone1(mut self, value: impl Into<String>) -> Self {
        self.phone1 = Some(value.into());
        self
    }

    pub fn with_sources(mut self, value: impl Into<String>) -> Self {
        self.sources = Some(value.into());
        self
    }

    /// Forward an extra named parameter not covered by the typed fields.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Flatten into wire query pairs, skipping unset fields.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let named: [(&str, &Option<String>); 10] = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("ssn", &self.ssn),
            ("dob", &self.dob),
            ("phone1", &self.phone1),
            ("sources", &self.sources),
        ];
        for (key, value) in named {
            if let Some(v) = value {
                query.push((key.to_string(), v.clone()));
            }
        }
        for (key, value) in &self.extra {
            query.push((key.clone(), value.clone()));
        }
        query
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpdResult {
    pub success: bool,
    pub credit: Option<String>,
    pub service: Option<String>,
    pub search_parameters: Option<NpdEchoedParams>,
    #[serde(default)]
    pub results: Vec<NpdEntry>,
}

/// The parameters the server echoes back with a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpdEchoedParams {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub ssn: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub phone1: Option<String>,
    #[serde(default)]
    pub sources: Option<String>,
}

/// One matched record. Columns vary by source; the recurring identity
/// columns are typed and the remainder lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpdEntry {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub middlename: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub st: Option<String>,
    pub zip: Option<serde_json::Value>,
    pub phone1: Option<String>,
    pub ssn: Option<String>,
    pub dob: Option<String>,
    pub source_name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_flatten_in_wire_order() {
        let params = NpdSearchParams::new()
            .with_first_name("John")
            .with_last_name("Doe")
            .with_state("TX")
            .with_param("middleName", "Q");

        let query = params.to_query();
        assert_eq!(
            query,
            vec![
                ("firstName".to_string(), "John".to_string()),
                ("lastName".to_string(), "Doe".to_string()),
                ("state".to_string(), "TX".to_string()),
                ("middleName".to_string(), "Q".to_string()),
            ]
        );
    }

    #[test]
    fn default_params_are_empty() {
        assert!(NpdSearchParams::new().is_empty());
        assert!(!NpdSearchParams::new().with_zip("78701").is_empty());
    }

    #[test]
    fn entry_keeps_unknown_columns() {
        let json = r#"{
            "firstname": "JOHN",
            "lastname": "DOE",
            "st": "TX",
            "zip": 78701,
            "county_name": "TRAVIS"
        }"#;
        let entry: NpdEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.firstname.as_deref(), Some("JOHN"));
        assert_eq!(entry.zip, Some(serde_json::json!(78701)));
        assert_eq!(entry.extra["county_name"], serde_json::json!("TRAVIS"));
    }
}
