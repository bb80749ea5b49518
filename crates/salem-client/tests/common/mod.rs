//! Common test utilities for salem-client integration tests.

use salem_client::CultureConfig;
use salem_core::{Nutrition, Recipe, RecipeId};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request captured by [`OneShotServer`].
#[derive(Debug)]
pub struct CapturedRequest {
    /// Request line, e.g. `POST /v1/messages HTTP/1.1`
    pub request_line: String,
    /// Lowercased header names with their values
    pub headers: Vec<(String, String)>,
    /// Raw body
    pub body: String,
}

impl CapturedRequest {
    /// Value of a header, by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serves exactly one canned HTTP response and hands back the request.
pub struct OneShotServer {
    /// URL of the messages endpoint on this server
    pub endpoint: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    /// Starts a server that replies with `status` and a JSON `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let captured = read_request(&mut stream).await;

            let response = format!(
                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            captured
        });

        Self {
            endpoint: format!("http://{addr}/v1/messages"),
            handle,
        }
    }

    /// Waits for the server task and returns the captured request.
    pub async fn request(self) -> CapturedRequest {
        self.handle.await.unwrap()
    }
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers ended");
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buffer, b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buffer.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body ended");
        buffer.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buffer[body_start..body_start + content_length]).to_string();
    CapturedRequest {
        request_line,
        headers,
        body,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// A client config pointed at `endpoint` with a test key.
pub fn config_for(endpoint: &str) -> CultureConfig {
    CultureConfig {
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
        ..CultureConfig::default()
    }
    .with_overrides(Some("sk-test-key".into()), None)
}

/// A minimal recipe for prompting.
pub fn shakshuka() -> Recipe {
    Recipe {
        id: RecipeId::new(1),
        title: "Shakshuka".into(),
        category: "Breakfast".into(),
        cuisine: "North African".into(),
        difficulty: "Easy".into(),
        base_servings: 2,
        prep_time: String::new(),
        cook_time: String::new(),
        ingredients: vec![],
        nutrition: Nutrition::default(),
        instructions: vec![],
        tips: vec![],
        dietary: vec![],
        image: None,
        story: String::new(),
    }
}
