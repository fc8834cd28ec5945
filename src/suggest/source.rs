use super::{SuggestError, Suggestion, SuggestionSource};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Suggestions served by an HTTP endpoint returning a JSON array.
///
/// The query is only forwarded when `query_param` is set; otherwise the full
/// list is fetched every time and filtering happens client-side.
pub struct HttpSource {
    client: Client,
    endpoint: String,
    query_param: Option<String>,
}

impl HttpSource {
    pub fn new(
        endpoint: impl Into<String>,
        query_param: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SuggestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            query_param,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SuggestionSource for HttpSource {
    fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(param) = self.query_param.as_deref().filter(|_| !query.is_empty()) {
            request = request.query(&[(param, query)]);
        }

        debug!(endpoint = %self.endpoint, query, "fetching suggestions");
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Suggestion>>()?)
    }
}

/// Fixed suggestion list, loaded from a JSON file or built in memory.
/// Ignores the query like an unfiltering backend would.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    suggestions: Vec<Suggestion>,
}

impl FixtureSource {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }

    pub fn from_file(path: &Path) -> Result<Self, SuggestError> {
        let content = std::fs::read_to_string(path)?;
        let suggestions = serde_json::from_str(&content)?;
        Ok(Self { suggestions })
    }
}

impl SuggestionSource for FixtureSource {
    fn fetch(&self, _query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        Ok(self.suggestions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "name": "rent", "category": "housing", "value": 900}}]"#
        )
        .unwrap();

        let source = FixtureSource::from_file(file.path()).unwrap();
        let fetched = source.fetch("anything").unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].name, "rent");
    }

    #[test]
    fn test_fixture_missing_file() {
        let result = FixtureSource::from_file(Path::new("/nonexistent/suggestions.json"));
        assert!(matches!(result, Err(SuggestError::Io(_))));
    }

    #[test]
    fn test_fixture_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = FixtureSource::from_file(file.path());
        assert!(matches!(result, Err(SuggestError::Decode(_))));
    }

    #[test]
    fn test_http_source_unreachable_endpoint_errors() {
        let source = HttpSource::new(
            "http://127.0.0.1:9/autocomplete",
            None,
            Duration::from_millis(200),
        )
        .unwrap();
        assert!(matches!(source.fetch(""), Err(SuggestError::Http(_))));
    }
}
