//! Minimal async typed-GET example.
//!
//! ```bash
//! cargo run --example typed_get
//! ```
//!
//! Env vars:
//! - `API_URL` (default: `https://httpbin.org`)
//! - `API_TOKEN` (optional, sent as `Authorization: Bearer <token>`)

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = env_or("API_URL", "https://httpbin.org");
    let token = env_opt("API_TOKEN");

    // plain typed GET
    let doc: serde_json::Value = http_adapter::get(&format!("{base_url}/json")).await?;
    println!("{doc:#}");

    // same, with the token attached when one is configured
    let echo: serde_json::Value =
        http_adapter::get_with_token(&format!("{base_url}/headers"), token.as_deref()).await?;
    println!("{echo:#}");

    // query string goes out exactly as written
    let args: serde_json::Value =
        http_adapter::get_with_query(&format!("{base_url}/get"), "q=rust&lang=en").await?;
    println!("{args:#}");

    // probe an endpoint without failing on a non-success status
    let probe = http_adapter::get_envelope(&format!("{base_url}/status/503")).await?;
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
