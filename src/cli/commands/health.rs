use anyhow::Context;

/// `canticle health` - hit a running server's liveness endpoint and exit
/// nonzero unless it reports ok.
pub async fn handle(base_url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/health", base_url.trim_end_matches('/'));

    let res = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = res.status();
    let body = res
        .json::<serde_json::Value>()
        .await
        .context("health endpoint did not return JSON")?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        anyhow::bail!("server degraded: {}", status);
    }
    Ok(())
}
