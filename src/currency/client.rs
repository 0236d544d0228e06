//! Exchange-rate HTTP client
//!
//! Talks to an ExchangeRate-API style pair endpoint:
//! `{base_url}/{api_key}/pair/{FROM}/{TO}/{AMOUNT}`.

use serde::Deserialize;

use super::error::{CurrencyError, CurrencyResult};
use super::RateProvider;
use crate::config::CurrencyConfig;

/// Body of a pair-conversion response
#[derive(Debug, Deserialize)]
struct PairResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_result: Option<f64>,
}

/// Extract the converted amount from a pair response
///
/// Service-reported errors take precedence over the HTTP status, since the
/// service explains failures in the body even on 4xx responses.
pub fn parse_pair_response(status: u16, body: &str) -> CurrencyResult<f64> {
    let success = (200..300).contains(&status);

    let parsed: PairResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !success => return Err(CurrencyError::Status { status }),
        Err(e) => return Err(CurrencyError::InvalidResponse(e.to_string())),
    };

    if parsed.result.as_deref() == Some("error") {
        let kind = parsed.error_type.unwrap_or_else(|| "unknown-error".to_string());
        return Err(CurrencyError::Api(kind));
    }

    if !success {
        return Err(CurrencyError::Status { status });
    }

    parsed
        .conversion_result
        .ok_or(CurrencyError::MissingField("conversion_result"))
}

/// Blocking client for the exchange-rate service
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    config: CurrencyConfig,
}

impl ExchangeRateClient {
    pub fn new(config: CurrencyConfig) -> Self {
        Self { config }
    }

    fn pair_url(&self, api_key: &str, from: &str, to: &str, amount: f64) -> String {
        format!(
            "{}/{}/pair/{}/{}/{}",
            self.config.base_url, api_key, from, to, amount
        )
    }
}

/// Whether a base URL points at this machine; such requests bypass proxies
fn targets_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|host| matches!(host, "localhost" | "127.0.0.1" | "[::1]")))
        .unwrap_or(false)
}

impl RateProvider for ExchangeRateClient {
    fn convert(&self, amount: f64, from: &str, to: &str) -> CurrencyResult<f64> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CurrencyError::MissingApiKey)?;

        // Built per call so the client's internal runtime is created and
        // dropped on the thread doing the blocking work.
        let mut builder = reqwest::blocking::Client::builder().timeout(self.config.timeout);
        if targets_loopback(&self.config.base_url) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        tracing::debug!("Requesting exchange rate {} -> {} for {}", from, to, amount);

        // The request path carries the API key, so reqwest errors lose their URL.
        let response = http
            .get(self.pair_url(api_key, from, to, amount))
            .send()
            .map_err(|e| CurrencyError::Http(e.without_url()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CurrencyError::Http(e.without_url()))?;

        let result = parse_pair_response(status, &body);
        match &result {
            Ok(converted) => tracing::debug!("{} {} = {} {}", amount, from, converted, to),
            Err(e) => tracing::warn!("Currency conversion {} -> {} failed: {}", from, to, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;
    use std::time::Duration;

    /// Serve one canned HTTP response and hand back the request line
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v6", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    fn client_for(base_url: String) -> ExchangeRateClient {
        ExchangeRateClient::new(CurrencyConfig {
            api_key: Some("test-key".to_string()),
            base_url,
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{"result":"success","base_code":"USD","target_code":"EUR","conversion_rate":0.92,"conversion_result":92.0}"#;
        assert_eq!(parse_pair_response(200, body).unwrap(), 92.0);
    }

    #[test]
    fn test_parse_zero_amount_is_success() {
        let body = r#"{"result":"success","conversion_rate":0.92,"conversion_result":0.0}"#;
        assert_eq!(parse_pair_response(200, body).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"result":"error","error-type":"unsupported-code"}"#;
        match parse_pair_response(404, body) {
            Err(CurrencyError::Api(kind)) => assert_eq!(kind, "unsupported-code"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_field() {
        let body = r#"{"result":"success","conversion_rate":0.92}"#;
        assert!(matches!(
            parse_pair_response(200, body),
            Err(CurrencyError::MissingField("conversion_result"))
        ));
    }

    #[test]
    fn test_parse_non_json() {
        assert!(matches!(
            parse_pair_response(200, "<html>oops</html>"),
            Err(CurrencyError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_pair_response(502, "Bad Gateway"),
            Err(CurrencyError::Status { status: 502 })
        ));
    }

    #[test]
    fn test_pair_url() {
        let client = client_for("https://example.test/v6".to_string());
        assert_eq!(
            client.pair_url("k", "USD", "JPY", 12.5),
            "https://example.test/v6/k/pair/USD/JPY/12.5"
        );
    }

    #[test]
    fn test_targets_loopback() {
        assert!(targets_loopback("http://127.0.0.1:8080/v6"));
        assert!(targets_loopback("http://localhost/v6"));
        assert!(!targets_loopback("https://v6.exchangerate-api.com/v6"));
        assert!(!targets_loopback("not a url"));
    }

    #[test]
    fn test_missing_api_key_fails_without_request() {
        let client = ExchangeRateClient::new(CurrencyConfig::default());
        assert!(matches!(
            client.convert(1.0, "USD", "EUR"),
            Err(CurrencyError::MissingApiKey)
        ));
    }

    #[test]
    fn test_convert_against_local_server() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"result":"success","conversion_rate":1.5,"conversion_result":15.0}"#,
        );
        let client = client_for(base_url);

        assert_eq!(client.convert(10.0, "USD", "CAD").unwrap(), 15.0);
        let request_line = server.join().unwrap();
        assert_eq!(request_line, "GET /v6/test-key/pair/USD/CAD/10 HTTP/1.1");
    }

    #[test]
    fn test_convert_surfaces_service_error() {
        let (base_url, server) = serve_once(
            "403 Forbidden",
            r#"{"result":"error","error-type":"invalid-key"}"#,
        );
        let client = client_for(base_url);

        let err = client.convert(10.0, "USD", "CAD").unwrap_err();
        assert!(matches!(err, CurrencyError::Api(ref kind) if kind == "invalid-key"));
        server.join().unwrap();
    }

    #[test]
    fn test_convert_connection_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(format!("http://127.0.0.1:{}/v6", port));

        let err = client.convert(1.0, "USD", "EUR").unwrap_err();
        assert!(matches!(err, CurrencyError::Http(_)));
        assert!(!err.to_string().contains("test-key"), "key leaked: {}", err);
        assert!(!format!("{:?}", err).contains("test-key"));

        let surfaced = crate::conversion::ConversionError::from(err).to_string();
        assert!(!surfaced.contains("test-key"));
    }
}
