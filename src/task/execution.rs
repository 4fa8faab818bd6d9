use crate::core::search::SearchClient;

/// One search, tagged with the input generation it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub generation: u64,
}

impl FetchRequest {
    pub fn new(query: impl Into<String>, generation: u64) -> Self {
        Self {
            query: query.into(),
            generation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub query: String,
    pub generation: u64,
    /// `None` when the search failed; the failure has already been logged.
    pub candidates: Option<Vec<String>>,
}

pub fn execute_fetch(client: &SearchClient, request: FetchRequest) -> FetchCompletion {
    let candidates = client.search(&request.query);
    FetchCompletion {
        query: request.query,
        generation: request.generation,
        candidates,
    }
}
