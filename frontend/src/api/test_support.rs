#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<Received>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: Option<MockResponse>,
    }

    #[derive(Clone, Debug)]
    pub struct Received {
        pub method: Method,
        pub path: String,
        pub body: Option<Vec<u8>>,
    }

    impl Received {
        pub fn json_body(&self) -> Option<Value> {
            self.body
                .as_deref()
                .and_then(|bytes| serde_json::from_slice(bytes).ok())
        }
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        /// Later registrations for the same route win.
        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = if then.transport_error {
                None
            } else {
                Some(MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ))
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .count()
        }

        pub fn hits_for_method(&self, method: Method) -> usize {
            self.received().iter().filter(|r| r.method == method).count()
        }

        pub fn last_json_body(&self, method: Method, path: &str) -> Option<Value> {
            self.received()
                .iter()
                .rev()
                .find(|r| r.method == method && r.path == path)
                .and_then(Received::json_body)
        }

        pub fn received(&self) -> Vec<Received> {
            self.inner.lock().expect("mock lock").received.clone()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(Received {
                method: method.clone(),
                path: path.to_string(),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .map(|bytes| bytes.to_vec()),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned()
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))?;

            route.response.ok_or_else(|| {
                ApiError::request_failed(format!("Request failed: connection refused ({})", path))
            })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        transport_error: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn transport_error(&mut self) -> &mut Self {
            self.transport_error = true;
            self
        }
    }
}
