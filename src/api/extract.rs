//! Request extractors shared by the API and web handlers.

use axum::extract::{FromRequestParts, Query};
use axum::extract::rejection::QueryRejection;
use axum::http::request::Parts;

/// The `q` search parameter of a request.
///
/// `None` when the query string has no `q` at all, `Some("")` for `?q=` or a
/// bare `?q`. When `q` is repeated the last occurrence wins. The value is
/// passed on exactly as decoded, never trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(pub Option<String>);

impl SearchQuery {
    const PARAM: &'static str = "q";

    /// Picks the search term out of decoded query-string pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self(
            pairs
                .into_iter()
                .filter(|(key, _)| key == Self::PARAM)
                .map(|(_, value)| value)
                .next_back(),
        )
    }
}

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;
        Ok(Self::from_pairs(pairs))
    }
}
