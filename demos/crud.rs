//! End-to-end async write-path demo against an echo service.
//!
//! ```bash
//! cargo run --example crud
//! ```
//!
//! Env vars:
//! - `API_URL` (default: `https://httpbin.org`)
//! - `API_TOKEN` (optional, sent as `Authorization: Bearer <token>` on
//!   the authenticated calls)

use http_adapter::Content;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = env_or("API_URL", "https://httpbin.org");
    let token = env_opt("API_TOKEN");

    // create
    let created = http_adapter::post(
        &format!("{base_url}/post"),
        Content::json(&json!({ "name": "demo", "size": 3 }))?,
    )
    .await?;
    println!("POST   -> {} ({} bytes)", created.status, created.body.len());

    // replace (authenticated when a token is configured)
    let replaced = http_adapter::put(
        &format!("{base_url}/put"),
        Content::text("name=demo&size=4"),
        token.as_deref(),
    )
    .await?;
    println!("PUT    -> {} ({} bytes)", replaced.status, replaced.body.len());

    // partial update, as a real PATCH request
    let patched = http_adapter::patch_with_token(
        &format!("{base_url}/patch"),
        Content::json(&json!({ "size": 5 }))?,
        token.as_deref(),
    )
    .await?;
    println!("PATCH  -> {} ({} bytes)", patched.status, patched.body.len());

    // delete
    let deleted = http_adapter::delete(&format!("{base_url}/delete"), token.as_deref()).await?;
    println!("DELETE -> {} ({} bytes)", deleted.status, deleted.body.len());

    // non-success statuses come back as responses, not errors
    let missing = http_adapter::post(
        &format!("{base_url}/status/404"),
        Content::text("ignored"),
    )
    .await?;
    println!("404    -> success={}", missing.is_success());

    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
