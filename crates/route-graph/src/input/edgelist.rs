use std::{error::Error, fmt::Display, vec::IntoIter};

use log::debug;
use rustc_hash::FxHashSet;

/// Separator between edges in the textual edge list.
pub const EDGE_SEPARATOR: char = ',';

#[derive(Debug)]
pub struct EdgeList<V, EV> {
    edges: Vec<(V, V, EV)>,
}

impl<V, EV> EdgeList<V, EV> {
    pub fn new(edges: Vec<(V, V, EV)>) -> Self {
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = &(V, V, EV)> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> IntoIter<(V, V, EV)> {
        self.edges.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListError {
    Empty,
    Malformed(String),
    SelfLoop(String),
    InvalidWeight(String),
    Duplicate(String),
}

impl Error for EdgeListError {}

impl Display for EdgeListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no edges given, expected e.g. 'AB5, BC4, CD8'"),
            Self::Malformed(token) => {
                write!(f, "invalid input '{}': expected <from><to><weight>", token)
            }
            Self::SelfLoop(token) => write!(f, "invalid input '{}': self loop", token),
            Self::InvalidWeight(token) => {
                write!(f, "invalid input '{}': weight must be a positive integer", token)
            }
            Self::Duplicate(token) => write!(f, "invalid input '{}': duplicate edge", token),
        }
    }
}

impl EdgeList<String, u32> {
    /// Reads edges like `AB5` from comma separated `parts`.
    ///
    /// Every part may hold several edges, empty tokens are skipped.
    pub fn parse<S: AsRef<str>>(parts: &[S]) -> Result<Self, EdgeListError> {
        let mut seen = FxHashSet::default();
        let mut result = vec![];

        parts
            .iter()
            .flat_map(|part| part.as_ref().split(EDGE_SEPARATOR))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| -> Result<(), EdgeListError> {
                if !seen.insert(token) {
                    return Err(EdgeListError::Duplicate(token.to_owned()));
                }
                result.push(parse_edge(token)?);
                Ok(())
            })?;

        if result.is_empty() {
            return Err(EdgeListError::Empty);
        }

        debug!("Parsed {} edges", result.len());

        Ok(EdgeList::new(result))
    }
}

impl TryFrom<&str> for EdgeList<String, u32> {
    type Error = EdgeListError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EdgeList::parse(&[value])
    }
}

fn parse_edge(token: &str) -> Result<(String, String, u32), EdgeListError> {
    let mut chars = token.chars();
    let (Some(source), Some(target)) = (chars.next(), chars.next()) else {
        return Err(EdgeListError::Malformed(token.to_owned()));
    };
    if !source.is_alphanumeric() || !target.is_alphanumeric() {
        return Err(EdgeListError::Malformed(token.to_owned()));
    }

    let value = chars.as_str();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(EdgeListError::InvalidWeight(token.to_owned()));
    }
    let value = value
        .parse::<u32>()
        .ok()
        .filter(|weight| *weight > 0)
        .ok_or_else(|| EdgeListError::InvalidWeight(token.to_owned()))?;

    if source == target {
        return Err(EdgeListError::SelfLoop(token.to_owned()));
    }

    Ok((source.to_string(), target.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::{EdgeList, EdgeListError};

    #[test]
    fn edgelist_from_string() {
        let edge_list = EdgeList::try_from("AB5, BC4,CD8 ,AE17").unwrap();

        assert_eq!(edge_list.len(), 4);
        assert_eq!(
            edge_list
                .edges()
                .map(|(s, t, v)| (s.as_str(), t.as_str(), *v))
                .collect::<Vec<(&str, &str, u32)>>(),
            vec![("A", "B", 5), ("B", "C", 4), ("C", "D", 8), ("A", "E", 17)]
        );
    }

    #[test]
    fn edgelist_from_parts() {
        let edge_list = EdgeList::parse(&["AB5,", "BC4,", "CD8"]).unwrap();
        assert_eq!(edge_list.len(), 3);
    }

    #[test]
    fn parallel_edges_with_different_weights() {
        let edge_list = EdgeList::try_from("AB5, AB6").unwrap();
        assert_eq!(edge_list.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(EdgeList::parse::<&str>(&[]).unwrap_err(), EdgeListError::Empty);
        assert_eq!(EdgeList::try_from(" , ").unwrap_err(), EdgeListError::Empty);
    }

    #[test]
    fn self_loop() {
        assert_eq!(
            EdgeList::try_from("AA2").unwrap_err(),
            EdgeListError::SelfLoop("AA2".to_string())
        );
    }

    #[test]
    fn invalid_weight() {
        for token in ["AET", "AB", "AB0", "AB-3", "AB99999999999"] {
            assert_eq!(
                EdgeList::try_from(token).unwrap_err(),
                EdgeListError::InvalidWeight(token.to_string()),
                "token {token}"
            );
        }
    }

    #[test]
    fn malformed() {
        assert_eq!(
            EdgeList::try_from("A").unwrap_err(),
            EdgeListError::Malformed("A".to_string())
        );
        assert_eq!(
            EdgeList::try_from("A-5").unwrap_err(),
            EdgeListError::Malformed("A-5".to_string())
        );
    }

    #[test]
    fn duplicate() {
        assert_eq!(
            EdgeList::try_from("AB5, BC4, AB5").unwrap_err(),
            EdgeListError::Duplicate("AB5".to_string())
        );
    }
}
