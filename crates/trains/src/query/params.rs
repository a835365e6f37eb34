use std::{error::Error, fs, path::Path};

use route_graph::types::BoundKind;
use serde::{Deserialize, Serialize};

/// Inclusivity of the limits used by the counting queries.
///
/// The same kind decides whether a route is extended with another loop and
/// whether it is counted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Bound for `--max-stops`.
    pub stop_bound: BoundKind,
    /// Bound for `--max-distance`.
    pub weight_bound: BoundKind,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            stop_bound: BoundKind::Inclusive,
            weight_bound: BoundKind::Exclusive,
        }
    }
}

impl QueryParams {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn read(path: &Path) -> Result<Self, Box<dyn Error>> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use route_graph::types::BoundKind;

    use super::QueryParams;

    #[test]
    fn defaults() {
        let params = QueryParams::default();
        assert_eq!(params.stop_bound, BoundKind::Inclusive);
        assert_eq!(params.weight_bound, BoundKind::Exclusive);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params = QueryParams::from_json(r#"{ "weight_bound": "inclusive" }"#).unwrap();
        assert_eq!(params.stop_bound, BoundKind::Inclusive);
        assert_eq!(params.weight_bound, BoundKind::Inclusive);
    }

    #[test]
    fn unknown_kind() {
        assert!(QueryParams::from_json(r#"{ "stop_bound": "sometimes" }"#).is_err());
    }
}
