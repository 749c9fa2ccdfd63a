//! Shared HTTP client configuration and bounded response helpers.

use std::io::{self, Read};

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_LENGTH;

use crate::config::ApiSettings;

/// Build a blocking client honoring the configured timeouts.
///
/// The overall timeout bounds the whole upload round trip, so an
/// unresponsive server ends in an error instead of an endless wait.
pub fn build_client(settings: &ApiSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(settings.connect_timeout())
        .timeout(settings.request_timeout())
        .user_agent(concat!("income-lens/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Read a response into memory, enforcing a maximum byte size.
pub fn read_response_bytes(response: Response, max_bytes: usize) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

fn check_content_length(response: &Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
    else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;

    fn client() -> Client {
        build_client(&ApiSettings::default()).unwrap()
    }

    #[test]
    fn rejects_content_length_over_max() {
        let (url, _rx) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nok".to_string(),
        );
        let response = client().get(&url).send().unwrap();
        let err = read_response_bytes(response, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_unsized_body_over_max() {
        let body = "a".repeat(32);
        let (url, _rx) = serve_once(format!("HTTP/1.0 200 OK\r\n\r\n{body}"));
        let response = client().get(&url).send().unwrap();
        let err = read_response_bytes(response, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn accepts_body_under_limit() {
        let (url, _rx) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello".to_string(),
        );
        let response = client().get(&url).send().unwrap();
        let bytes = read_response_bytes(response, 16).unwrap();
        assert_eq!(bytes, b"hello");
    }
}
