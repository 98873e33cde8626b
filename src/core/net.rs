// src/core/net.rs

// Blocking HTTPS GET. Jonas serves over TLS only, so this sits on
// reqwest/rustls rather than a raw TcpStream.

use std::sync::OnceLock;
use std::time::Duration;

use crate::config::consts::{ACCEPT_LANGUAGE, REQUEST_TIMEOUT_SECS, USER_AGENT};

static CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

fn client() -> &'static reqwest::blocking::Client {
    CLIENT.get_or_init(|| {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("reqwest client")
    })
}

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let resp = client()
        .get(url)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
