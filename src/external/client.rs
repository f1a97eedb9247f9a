use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every outbound request, e.g. `notify-line/0.1.0`
pub fn user_agent() -> String {
    format!("notify-line/{}", crate::pkg_version())
}

/// Global HTTP client instance
///
/// Initialized lazily on first access and shared by every provider, so
/// concurrent sends reuse pooled connections to the LINE endpoint.
///
/// Only the connect phase is bounded. The request itself has no overall
/// deadline: a send waits for the remote answer for as long as the
/// transport allows.
///
/// # Example
/// ```ignore
/// use notify_line::external::HTTP_CLIENT;
///
/// async fn ping() -> Result<u16, reqwest::Error> {
///     let response = HTTP_CLIENT.get("https://notify-api.line.me/api/status").send().await?;
///     Ok(response.status().as_u16())
/// }
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(user_agent())
        .build()
        // Building only fails when the TLS backend cannot initialize
        .unwrap_or_else(|_| reqwest::Client::new())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        let _ = &*HTTP_CLIENT;
    }

    #[test]
    fn test_user_agent_carries_version() {
        let ua = user_agent();
        assert!(ua.starts_with("notify-line/"));
        assert!(ua.ends_with(crate::pkg_version()));
    }
}
