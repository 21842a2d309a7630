#![cfg(test)]

use crate::github::types::RepositorySummary;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub fn make_summary(name: &str, description: Option<&str>, stars: u64) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: description.map(String::from),
        html_url: format!("https://github.com/octo/{name}"),
        stargazers_count: stars,
        forks_count: stars / 2,
        watchers_count: stars,
    }
}

pub fn repo_json(name: &str, description: Option<&str>, stars: u64) -> String {
    serde_json::json!({
        "id": stars + 1,
        "name": name,
        "full_name": format!("octo/{name}"),
        "description": description,
        "html_url": format!("https://github.com/octo/{name}"),
        "stargazers_count": stars,
        "forks_count": stars / 2,
        "watchers_count": stars,
        "private": false,
    })
    .to_string()
}

#[derive(Clone, Debug)]
pub struct MockRoute {
    pub path: String,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockRoute {
    pub fn ok(path: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            status,
            body: r#"{"message":"mock error"}"#.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Minimal HTTP/1.1 responder for the routes given. Unknown paths get 404.
/// Returns the base URL to hand to `GitHubClient::new`.
pub async fn spawn_mock_api(routes: Vec<MockRoute>) -> String {
    spawn_counting_mock_api(routes).await.0
}

/// Like `spawn_mock_api`, also counting accepted connections.
pub async fn spawn_counting_mock_api(routes: Vec<MockRoute>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(serve_connection(stream, Arc::clone(&routes)));
        }
    });

    (format!("http://{addr}"), hits)
}

/// A local URL nothing is listening on.
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve_connection(mut stream: TcpStream, routes: Arc<Vec<MockRoute>>) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|target| target.split('?').next())
        .unwrap_or("/")
        .to_string();

    let (status, body, delay) = match routes.iter().find(|r| r.path == path) {
        Some(route) => (route.status, route.body.clone(), route.delay),
        None => (404, r#"{"message":"Not Found"}"#.to_string(), None),
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

pub fn line_text(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
