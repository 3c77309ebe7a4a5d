//! Minimal blocking GET example.
//!
//! ```bash
//! cargo run --no-default-features --features blocking,rustls --example blocking_get
//! # or: cargo run --no-default-features --features blocking,native-tls --example blocking_get
//! ```
//!
//! Env vars:
//! - `API_URL` (default: `https://httpbin.org`)
//! - `API_TOKEN` (optional, sent as `Authorization: Bearer <token>`)

use http_adapter::blocking;

fn main() -> anyhow::Result<()> {
    let base_url = env_or("API_URL", "https://httpbin.org");
    let token = env_opt("API_TOKEN");

    let doc: serde_json::Value =
        blocking::get_with_token(&format!("{base_url}/headers"), token.as_deref())?;
    println!("{doc:#}");

    let probe = blocking::get_envelope(&format!("{base_url}/status/503"))?;
    println!(
        "probe: status={}, success={}",
        probe.status_code,
        probe.is_success()
    );

    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
