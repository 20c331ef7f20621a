use crate::error::{Error, Result};
use crate::record::Record;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

/// Filters of the search form. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub start_year: String,
    pub end_year: String,
    pub price: String,
    pub kind: String,
}

impl SearchParams {
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let fields = vec![
            ("startYear", &self.start_year),
            ("endYear", &self.end_year),
            ("price", &self.price),
            ("type", &self.kind),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key, value.as_str()))
            .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// Where records come from.
pub trait RecordSource {
    fn fetch_all(&self) -> Result<Vec<Record>>;

    fn search(&self, params: &SearchParams) -> Result<Vec<Record>>;
}

pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<ApiClient> {
        let mut base = Url::parse(base_url).map_err(|e| Error::Url(format!("{}: {}", base_url, e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(ApiClient { base, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Url(format!("{}: {}", path, e)))
    }

    pub fn all_url(&self) -> Result<Url> {
        self.endpoint("api")
    }

    pub fn search_url(&self, params: &SearchParams) -> Result<Url> {
        let mut url = self.endpoint("api/search")?;
        url.query_pairs_mut().extend_pairs(params.pairs());
        Ok(url)
    }
}

impl RecordSource for ApiClient {
    fn fetch_all(&self) -> Result<Vec<Record>> {
        let url = self.all_url()?;
        debug!("GET {}", url);
        let records: Vec<Record> = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()?
            .error_for_status()?
            .json()?;
        info!("fetched {} records", records.len());
        Ok(records)
    }

    fn search(&self, params: &SearchParams) -> Result<Vec<Record>> {
        let url = self.search_url(params)?;
        debug!("GET {}", url);
        let records: Vec<Record> = self.http.get(url).send()?.error_for_status()?.json()?;
        info!("search returned {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod test {
    use super::{ApiClient, SearchParams};
    use crate::error::Error;
    use std::time::Duration;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_only_type() {
        let params = SearchParams {
            kind: "西瓜(無子)".to_string(),
            ..Default::default()
        };
        let url = client("http://localhost:3000").search_url(&params).unwrap();
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "type");
        assert_eq!(pairs[0].1, "西瓜(無子)");
        assert!(url.query().unwrap().starts_with("type="));
        assert!(!url.query().unwrap().contains('&'));
    }

    #[test]
    fn test_all_params() {
        let params = SearchParams {
            start_year: "2004".to_string(),
            end_year: "2010".to_string(),
            price: "20".to_string(),
            kind: "".to_string(),
        };
        let url = client("http://localhost:3000").search_url(&params).unwrap();
        assert_eq!(url.path(), "/api/search");
        assert_eq!(url.query(), Some("startYear=2004&endYear=2010&price=20"));
    }

    #[test]
    fn test_no_params() {
        let params = SearchParams::default();
        assert!(params.is_empty());
        let url = client("http://localhost:3000").search_url(&params).unwrap();
        assert_eq!(url.query().unwrap_or(""), "");
    }

    #[test]
    fn test_base_with_path() {
        let client = client("http://example.com/prices");
        assert_eq!(
            client.all_url().unwrap().as_str(),
            "http://example.com/prices/api"
        );
    }

    #[test]
    fn test_invalid_base() {
        match ApiClient::new("not a url", Duration::from_secs(1)) {
            Err(Error::Url(_)) => {}
            _ => panic!("expected url error"),
        }
    }
}
