use std::sync::Arc;

use axum::http::{HeaderMap, Method, Uri};
use tokio::sync::Mutex;

/// A request as received by the mock backend.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// First value of `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Number of headers named `name`.
    pub fn header_count(&self, name: &str) -> usize {
        self.headers.get_all(name).iter().count()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Running mock backend.
///
/// The server task lives for the remainder of the test runtime.
pub struct MockBackend {
    /// Origin to use as the proxy's backend URL, e.g. `http://127.0.0.1:41234`.
    pub url: String,
    pub(crate) requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// All requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().await.last().cloned()
    }
}
