use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const PREDICTION_BODY: &str = r#"{"request_id":"r1","file_name":"data.csv","n_rows":3,"target":[10,20,30],"summary":{"target_mean":20,"target_median":20,"target_min":10,"target_max":30}}"#;

/// One-shot HTTP server on `127.0.0.1:0`.
pub struct FakeService {
    pub base_url: String,
    requests: mpsc::Receiver<String>,
}

impl FakeService {
    /// Answer the first request with `status` and a JSON `body`.
    pub fn json(status: &str, body: &str) -> Self {
        Self::raw(format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
    }

    /// Answer the first request with a plain-text body.
    pub fn text(status: &str, body: &str) -> Self {
        Self::raw(format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
    }

    fn raw(response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake service");
        let addr = listener.local_addr().expect("fake service addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
                let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Raw text of the request the service received.
    pub fn received(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("fake service saw no request")
    }
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let Ok(read) = stream.read(&mut buf) else {
            break;
        };
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
        let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&request[..head_end]).to_ascii_lowercase();
        if head.contains("transfer-encoding: chunked") {
            if request.ends_with(b"0\r\n\r\n") {
                break;
            }
            continue;
        }
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if request.len() >= head_end + 4 + body_len {
            break;
        }
    }
    request
}
