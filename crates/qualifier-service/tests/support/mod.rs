#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use qualifier_service::HttpSettings;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

/// Local stand-in for a remote endpoint. Answers every request with the same
/// status and body and records what it received.
pub struct MockServer {
    pub url: String,
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    join: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    pub fn start(status: u16, body: &str) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock server ip addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let server_for_thread = Arc::clone(&server);
        let requests_for_thread = Arc::clone(&requests);
        let body = body.to_string();
        let join = thread::spawn(move || {
            for mut request in server_for_thread.incoming_requests() {
                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let recorded = RecordedRequest {
                    method: request.method().to_string(),
                    path: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body: received,
                };
                requests_for_thread
                    .lock()
                    .expect("lock requests")
                    .push(recorded);
                let response = tiny_http::Response::from_string(body.clone()).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://{addr}"),
            server,
            requests,
            join: Some(join),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("lock requests").clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Accepts connections and never answers them.
pub struct SilentServer {
    pub url: String,
}

impl SilentServer {
    pub fn start(hold: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind silent server");
        let addr = listener.local_addr().expect("silent server addr");
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                thread::spawn(move || {
                    thread::sleep(hold);
                    drop(stream);
                });
            }
        });
        Self {
            url: format!("http://{addr}"),
        }
    }
}

/// URL on a port nothing listens on.
pub fn closed_endpoint(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}{path}")
}

pub fn fast_settings() -> HttpSettings {
    HttpSettings {
        connect_timeout: Duration::from_millis(500),
        read_timeout: Duration::from_millis(500),
    }
}

pub fn client() -> reqwest::blocking::Client {
    qualifier_service::build_http_client(&fast_settings()).expect("build client")
}
