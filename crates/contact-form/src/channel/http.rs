//! HTTP channel posting to a hosted form endpoint

use crate::channel::{ChannelResponse, SubmissionChannel};
use crate::config::EndpointConfig;
use crate::error::TransportError;
use crate::payload::SubmissionPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// POSTs form-encoded payloads with reqwest
#[derive(Clone)]
pub struct HttpChannel {
    client: Client,
    endpoint: String,
    accept: String,
    timeout: Option<Duration>,
}

impl HttpChannel {
    /// Create a channel for the configured endpoint
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
            accept: config.accept.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: reqwest::Error) -> TransportError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => TransportError::Timeout(timeout),
            _ => TransportError::Connection {
                endpoint: self.endpoint.clone(),
                reason: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl SubmissionChannel for HttpChannel {
    async fn send(&self, payload: &SubmissionPayload) -> Result<ChannelResponse, TransportError> {
        if self.endpoint.trim().is_empty() {
            return Err(TransportError::MissingEndpoint);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, self.accept.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(payload.to_form_body())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        // An unreadable body is no worse than an unparseable one
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(status, error = %e, "could not read response body");
                String::new()
            }
        };

        Ok(ChannelResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldNames, MessageConfig};
    use crate::form::SubmissionAttempt;
    use contact_form_validation::FieldId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::build(
            &SubmissionAttempt::new(vec![(FieldId::FirstName, "Alice".to_string())], ""),
            &MessageConfig::default(),
            &FieldNames::default(),
        )
    }

    fn endpoint(url: String, timeout_secs: Option<u64>) -> EndpointConfig {
        EndpointConfig {
            url,
            timeout_secs,
            ..EndpointConfig::default()
        }
    }

    /// Read one request: headers plus `content-length` bytes of body
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Local server that answers a single request with `reply` and hands
    /// back the raw request it received
    async fn serve_once(reply: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (url, handle)
    }

    #[tokio::test]
    async fn test_posts_form_body_with_headers() {
        let (url, server) =
            serve_once("HTTP/1.1 200 OK\r\ncontent-length: 4\r\nconnection: close\r\n\r\nnope").await;
        let channel = HttpChannel::new(&endpoint(url, Some(5))).unwrap();

        let response = channel.send(&payload()).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.is_accepted());
        assert_eq!(response.body, "nope");
        assert!(response.json().is_none());

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /f/contact"));
        assert!(request.contains("accept: application/json"));
        assert!(request.contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.contains("firstname=alice"));
        assert!(request.contains("_subject=new%20contact%20form%20submission"));
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_detail() {
        let (url, server) = serve_once(
            "HTTP/1.1 422 Unprocessable Entity\r\ncontent-type: application/json\r\ncontent-length: 21\r\nconnection: close\r\n\r\n{\"error\":\"bad email\"}",
        )
        .await;
        let channel = HttpChannel::new(&endpoint(url, None)).unwrap();

        let response = channel.send(&payload()).await.unwrap();
        assert_eq!(response.status, 422);
        assert!(!response.is_accepted());
        assert_eq!(response.error_detail().as_deref(), Some("bad email"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_hung_endpoint_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
        let _server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        let channel = HttpChannel::new(&endpoint(url, Some(1))).unwrap();

        let err = channel.send(&payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout(d) if d == Duration::from_secs(1)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
        drop(listener);
        let channel = HttpChannel::new(&endpoint(url.clone(), Some(5))).unwrap();

        let err = channel.send(&payload()).await.unwrap_err();
        match err {
            TransportError::Connection { endpoint, .. } => assert_eq!(endpoint, url),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_a_transport_error() {
        let channel = HttpChannel::new(&EndpointConfig::default()).unwrap();

        let err = channel.send(&payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::MissingEndpoint));
    }

    #[test]
    fn test_channel_keeps_endpoint() {
        let config = EndpointConfig {
            url: "https://formspree.io/f/abcd1234".to_string(),
            timeout_secs: Some(10),
            ..EndpointConfig::default()
        };
        let channel = HttpChannel::new(&config).unwrap();
        assert_eq!(channel.endpoint(), "https://formspree.io/f/abcd1234");
        assert_eq!(channel.name(), "http");
    }
}
