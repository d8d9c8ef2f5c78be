use crate::error::AppError;

const USER_AGENT: &str = concat!("sightstone/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking GET seam between the API client and the network.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse, AppError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse, AppError> {
        let mut request = self.agent.get(url).set("User-Agent", USER_AGENT);
        for (name, value) in query {
            request = request.query(name, value);
        }

        match request.call() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| AppError::Http(e.to_string()))?;
                Ok(RawResponse { status, body })
            }
            Err(ureq::Error::Status(status, resp)) => Ok(RawResponse {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            // ureq's Display for transport errors includes the full URL, which
            // carries the api key; only the kind and message are kept.
            Err(ureq::Error::Transport(transport)) => {
                let detail = match transport.message() {
                    Some(message) => format!("{}: {}", transport.kind(), message),
                    None => transport.kind().to_string(),
                };
                Err(AppError::Http(detail))
            }
        }
    }
}

#[cfg(test)]
pub use fake::FakeTransport;

#[cfg(test)]
mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// A request seen by [`FakeTransport`]: url plus query pairs.
    pub type RecordedRequest = (String, Vec<(String, String)>);

    /// Scripted transport. Unrouted urls answer 404.
    #[derive(Default)]
    pub struct FakeTransport {
        routes: HashMap<String, RawResponse>,
        failing: Vec<String>,
        requests: RefCell<Vec<RecordedRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn route(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
            self.routes.insert(
                url.into(),
                RawResponse {
                    status,
                    body: body.into(),
                },
            );
            self
        }

        /// Makes `url` fail at the transport level (no response at all).
        pub fn unreachable(mut self, url: impl Into<String>) -> Self {
            self.failing.push(url.into());
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self, url: &str) -> usize {
            self.requests.borrow().iter().filter(|(u, _)| u == url).count()
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse, AppError> {
            self.requests.borrow_mut().push((
                url.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));

            if self.failing.iter().any(|u| u == url) {
                return Err(AppError::Http("Network Error: connection refused".to_string()));
            }

            Ok(self.routes.get(url).cloned().unwrap_or_else(|| RawResponse {
                status: 404,
                body: r#"{"status":{"message":"Data not found","status_code":404}}"#.to_string(),
            }))
        }
    }
}
