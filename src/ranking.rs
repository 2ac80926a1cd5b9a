//! Ranked-list response entries.
//!
//! Several ProductLayer endpoints return ranked lists (top products, reviews,
//! users, images). Each list element is a [`RankingEntry`] binding the domain
//! object to its position and score in the externally computed ordering.

use serde::{Deserialize, Serialize};

/// Marker for types belonging to the ProductLayer domain-object family.
///
/// The API's entity types (products, reviews, users, images, ...) implement
/// this marker so generic containers like [`RankingEntry`] can be bounded to
/// the entity hierarchy without dispatching on the concrete type.
///
/// # Examples
///
/// ```
/// use productlayer::DomainObject;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Product {
///     gtin: String,
///     name: String,
/// }
///
/// impl DomainObject for Product {}
/// ```
pub trait DomainObject {}

/// One element of a ranked-list API response.
///
/// Pairs a domain object with its rank (position in the ordering) and score
/// (numeric strength). Both are assigned by the producing service and are
/// opaque here: ranks need not be contiguous or zero-based, and score scale
/// and direction are endpoint-defined. Either may be absent when the endpoint
/// does not supply them.
///
/// On the wire the fields use the hyphenated keys `pl-rank`, `pl-score`, and
/// `pl-entity`, which existing API consumers and producers rely on.
///
/// # Examples
///
/// ```
/// use productlayer::{DomainObject, RankingEntry};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Product {
///     name: String,
/// }
///
/// impl DomainObject for Product {}
///
/// let entry = RankingEntry::new(Product { name: "Club-Mate".to_string() })
///     .with_rank(1)
///     .with_score(982);
///
/// let json = serde_json::to_string(&entry).unwrap();
/// assert_eq!(json, r#"{"pl-rank":1,"pl-score":982,"pl-entity":{"name":"Club-Mate"}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry<T: DomainObject> {
    /// Position in the ranked ordering.
    #[serde(rename = "pl-rank", default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,

    /// Ranking score; semantics defined by the producing endpoint.
    #[serde(rename = "pl-score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    /// The ranked domain object.
    #[serde(rename = "pl-entity")]
    pub entity: T,
}

impl<T: DomainObject> RankingEntry<T> {
    /// Creates an entry wrapping `entity`, with rank and score unset.
    pub fn new(entity: T) -> Self {
        Self {
            rank: None,
            score: None,
            entity,
        }
    }

    /// Sets the rank.
    #[must_use]
    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Sets the score.
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Maps the wrapped entity to a different domain object, keeping the
    /// rank and score.
    pub fn map<U, F>(self, f: F) -> RankingEntry<U>
    where
        U: DomainObject,
        F: FnOnce(T) -> U,
    {
        RankingEntry {
            rank: self.rank,
            score: self.score,
            entity: f(self.entity),
        }
    }
}
