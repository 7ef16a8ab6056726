//! Product request types.

use serde::Deserialize;

/// Query string of `GET /api/products`.
///
/// `limit` is kept as raw text so that unparseable values reach the service,
/// which treats them as absent instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub limit: Option<String>,
}
