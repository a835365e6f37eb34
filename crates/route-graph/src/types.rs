use serde::{Deserialize, Serialize};

/// Whether a limit itself is still within its bound.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    /// `value <= limit`
    #[default]
    Inclusive,
    /// `value < limit`
    Exclusive,
}

impl BoundKind {
    pub fn admits<T: PartialOrd>(self, value: T, limit: T) -> bool {
        match self {
            BoundKind::Inclusive => value <= limit,
            BoundKind::Exclusive => value < limit,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Bound<T> {
    pub limit: T,
    pub kind: BoundKind,
}

impl<T: PartialOrd + Copy> Bound<T> {
    pub fn new(limit: T, kind: BoundKind) -> Self {
        Self { limit, kind }
    }

    pub fn inclusive(limit: T) -> Self {
        Self::new(limit, BoundKind::Inclusive)
    }

    pub fn exclusive(limit: T) -> Self {
        Self::new(limit, BoundKind::Exclusive)
    }

    pub fn admits(&self, value: T) -> bool {
        self.kind.admits(value, self.limit)
    }
}

/// Limit on how far a route may be extended with loops.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Budget<EV> {
    /// Number of edges traversed.
    Stops(Bound<usize>),
    /// Sum of traversed edge weights.
    Distance(Bound<EV>),
}
