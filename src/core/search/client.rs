use crate::config::Config;
use crate::error::SearchError;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const CHARACTERS_PATH: &str = "/api/characters";

/// Blocking GET returning the response body.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, SearchError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<String, SearchError> {
        let response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => SearchError::Status(code),
            ureq::Error::Transport(transport) => SearchError::Transport(transport.to_string()),
        })?;
        Ok(response.into_string()?)
    }
}

#[derive(Clone)]
pub struct SearchClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.endpoint.trim(),
            Arc::new(UreqTransport::new(config.timeout())),
        )
    }

    pub fn request_url(&self, query: &str) -> String {
        format!(
            "{}{}?name={}",
            self.base_url,
            CHARACTERS_PATH,
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        )
    }

    /// Names matching `query`, in backend order.
    ///
    /// Never fails: transport and decoding problems are logged and reported
    /// as `None`.
    pub fn search(&self, query: &str) -> Option<Vec<String>> {
        match self.try_search(query) {
            Ok(names) => Some(names),
            Err(err) => {
                warn!(query, error = %err, "character search failed");
                None
            }
        }
    }

    pub fn try_search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.request_url(query);
        debug!(%url, "searching characters");
        let body = self.transport.get(&url)?;
        decode_names(&body)
    }
}

/// Records without a string `name` are dropped rather than failing the batch.
pub fn decode_names(body: &str) -> Result<Vec<String>, SearchError> {
    let records: Vec<JsonValue> = serde_json::from_str(body)?;
    let total = records.len();

    let names: Vec<String> = records
        .iter()
        .filter_map(|record| record.get("name").and_then(JsonValue::as_str))
        .map(str::to_string)
        .collect();

    if names.len() < total {
        warn!(
            dropped = total - names.len(),
            total, "ignoring records without a name"
        );
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::{SearchClient, Transport, decode_names};
    use crate::error::SearchError;
    use std::sync::{Arc, Mutex};

    struct StubTransport {
        reply: Result<&'static str, u16>,
        urls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn replying(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(body),
                urls: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                urls: Mutex::new(Vec::new()),
            })
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str) -> Result<String, SearchError> {
            self.urls.lock().expect("urls").push(url.to_string());
            match self.reply {
                Ok(body) => Ok(body.to_string()),
                Err(status) => Err(SearchError::Status(status)),
            }
        }
    }

    #[test]
    fn request_url_embeds_plain_query() {
        let client = SearchClient::new("http://localhost:5173/", StubTransport::replying("[]"));
        assert_eq!(
            client.request_url("Targa"),
            "http://localhost:5173/api/characters?name=Targa"
        );
    }

    #[test]
    fn request_url_percent_encodes_query() {
        let client = SearchClient::new("http://h", StubTransport::replying("[]"));
        assert_eq!(
            client.request_url("Jon Snow&x=1"),
            "http://h/api/characters?name=Jon%20Snow%26x%3D1"
        );
        assert_eq!(
            client.request_url("Brienne ö"),
            "http://h/api/characters?name=Brienne%20%C3%B6"
        );
    }

    #[test]
    fn search_maps_names_in_backend_order() {
        let transport = StubTransport::replying(
            r#"[{"name":"Rhaegar Targaryen","house":"Targaryen"},{"name":"Aerys Targaryen"}]"#,
        );
        let client = SearchClient::new("http://h", transport.clone());

        let names = client.search("targ").expect("names");
        assert_eq!(names, vec!["Rhaegar Targaryen", "Aerys Targaryen"]);
        assert_eq!(
            *transport.urls.lock().expect("urls"),
            vec!["http://h/api/characters?name=targ".to_string()]
        );
    }

    #[test]
    fn records_without_name_are_dropped() {
        let names = decode_names(r#"[{"name":"Hodor"},{"title":"Maester"},{"name":7},{"name":"Osha"}]"#)
            .expect("names");
        assert_eq!(names, vec!["Hodor", "Osha"]);
    }

    #[test]
    fn undecodable_body_is_an_error() {
        assert!(matches!(decode_names("{\"name\":\"x\"}"), Err(SearchError::Decode(_))));
        assert!(matches!(decode_names("<html>"), Err(SearchError::Decode(_))));
    }

    #[test]
    fn failures_resolve_to_none() {
        let client = SearchClient::new("http://h", StubTransport::failing(503));
        assert!(client.search("Stark").is_none());
        assert!(matches!(client.try_search("Stark"), Err(SearchError::Status(503))));

        let client = SearchClient::new("http://h", StubTransport::replying("not json"));
        assert!(client.search("Stark").is_none());
    }

    #[test]
    fn empty_array_is_an_empty_result() {
        let client = SearchClient::new("http://h", StubTransport::replying("[]"));
        assert_eq!(client.search("Maester"), Some(Vec::new()));
    }
}
