//! Icon asset resolution: probe whether a local icon exists for a weather
//! code and fall back to plain text when it does not.

use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Resolves weather-code icons against a static asset host.
#[derive(Debug, Clone)]
pub struct IconResolver {
    client: Client,
    probe_base_url: String,
}

impl IconResolver {
    /// Create a resolver probing under `probe_base_url`.
    pub fn new(probe_base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            probe_base_url: probe_base_url.into(),
        })
    }

    /// Markup for a weather code: an `<img>` when the icon asset exists,
    /// otherwise a `<p>` carrying the fallback text.
    ///
    /// The probe is a HEAD request; no body is fetched. Transport errors and
    /// missing assets both fall back to text, so this never fails.
    pub async fn icon_html(&self, weather_code: &str, weather_status: &str) -> String {
        let img_url = format!(
            "{}/weather_icon/{}.svg",
            self.probe_base_url, weather_code
        );

        match self.client.head(&img_url).send().await {
            Ok(response) if response.status().is_success() => {
                format!(
                    r#"<img src="{}" class="card-img-top" alt="{}">"#,
                    img_url, weather_status
                )
            }
            Ok(response) => {
                tracing::debug!(
                    "Icon probe for {} returned status {}",
                    weather_code,
                    response.status()
                );
                format!(r#"<p class="m-0">{}</p>"#, weather_status)
            }
            Err(e) => {
                tracing::debug!("Icon probe for {} failed: {}", weather_code, e);
                format!(r#"<p class="m-0">{}</p>"#, weather_status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_icon_html_when_asset_exists() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/weather_icon/100.svg"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let resolver = IconResolver::new(server.uri()).unwrap();
        let html = resolver.icon_html("100", "晴れ").await;
        assert!(html.starts_with("<img"));
        assert!(html.contains("weather_icon/100.svg"));
        assert!(html.contains(r#"alt="晴れ""#));
    }

    #[tokio::test]
    async fn test_icon_html_falls_back_on_404() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/weather_icon/999.svg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resolver = IconResolver::new(server.uri()).unwrap();
        let html = resolver.icon_html("999", "くもり").await;
        assert_eq!(html, r#"<p class="m-0">くもり</p>"#);
    }

    #[tokio::test]
    async fn test_icon_html_falls_back_on_transport_error() {
        // Nothing listens on this port
        let resolver = IconResolver::new("http://127.0.0.1:1").unwrap();
        let html = resolver.icon_html("100", "雨").await;
        assert_eq!(html, r#"<p class="m-0">雨</p>"#);
    }
}
