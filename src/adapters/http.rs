use crate::config::toml_config::AdminConfig;
use crate::domain::model::{City, FestivalStatistics};
use crate::domain::ports::AdminApi;
use crate::utils::error::{FormsError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const LOAD_CITIES_PATH: &str = "admin/festival/festivalregistration/ajax/load-cities/";
const STATISTICS_PATH: &str = "admin/festival/festivalregistration/statistics/";

/// `AdminApi` over the Django admin's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
    session_id: Option<String>,
}

impl HttpAdminApi {
    pub fn new(base_url: &str) -> Result<Self> {
        // 確保以 / 結尾，join 才不會吃掉最後一段路徑
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(&normalized)?,
            timeout: None,
            session_id: None,
        })
    }

    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        let base_url =
            crate::utils::validation::validate_required_field("admin.base_url", &config.base_url)?;
        let mut api = Self::new(base_url)?.with_timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(session_id) = &config.session_id {
            api = api.with_session_id(session_id.clone());
        }
        Ok(api)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Admin views need a staff session; this is sent as the `sessionid` cookie.
    pub fn with_session_id(mut self, session_id: String) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn prepare(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(session_id) = &self.session_id {
            request = request.header(reqwest::header::COOKIE, format!("sessionid={}", session_id));
        }
        request
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("Making admin request to: {}", url);
        let response = self.prepare(self.client.get(url.clone())).send().await?;

        tracing::debug!("Admin response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FormsError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn load_cities(&self, province_id: u64) -> Result<Vec<City>> {
        let mut url = self.endpoint(LOAD_CITIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("province_id", &province_id.to_string());
        self.get_json(url).await
    }

    async fn load_statistics(&self) -> Result<FestivalStatistics> {
        let url = self.endpoint(STATISTICS_PATH)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_keep_base_path() {
        let api = HttpAdminApi::new("https://festival.example/panel").unwrap();
        assert_eq!(
            api.endpoint(STATISTICS_PATH).unwrap().as_str(),
            "https://festival.example/panel/admin/festival/festivalregistration/statistics/"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpAdminApi::new("not a url"),
            Err(FormsError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_config_requires_base_url() {
        let config = AdminConfig {
            base_url: None,
            ..Default::default()
        };
        assert!(matches!(
            HttpAdminApi::from_config(&config),
            Err(FormsError::MissingConfigError { .. })
        ));
    }
}
