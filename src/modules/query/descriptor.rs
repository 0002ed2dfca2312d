use serde::{Deserialize, Serialize};

/// Which remote operation a composed request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    SearchQuery,
    TopList,
    SeasonalList,
    DetailAggregate,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::SearchQuery => "search",
            RequestKind::TopList => "top",
            RequestKind::SeasonalList => "seasonal",
            RequestKind::DetailAggregate => "detail",
        }
    }
}

/// Canonical description of a single remote request.
///
/// `identity` is the cache key: kind plus the sorted `key=value` join of
/// the parameters, so two descriptors for the same semantic request hash
/// identically regardless of construction order.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub kind: RequestKind,
    pub params: Vec<(String, String)>,
    pub identity: String,
}

impl RequestDescriptor {
    pub fn new(kind: RequestKind, params: Vec<(String, String)>) -> Self {
        let identity = Self::identity_for(kind, &params);
        Self {
            kind,
            params,
            identity,
        }
    }

    /// Descriptor for a detail aggregate; the entity id is the identity.
    pub fn detail(mal_id: i64) -> Self {
        Self {
            kind: RequestKind::DetailAggregate,
            params: Vec::new(),
            identity: mal_id.to_string(),
        }
    }

    fn identity_for(kind: RequestKind, params: &[(String, String)]) -> String {
        let mut pairs: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        pairs.sort();
        format!("{}:{}", kind.as_str(), pairs.join("&"))
    }
}
