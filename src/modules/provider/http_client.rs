use std::num::NonZeroU32;
use std::time::Duration;

use governor::{
    clock::DefaultClock, middleware::NoOpMiddleware, state::direct::NotKeyed,
    state::InMemoryState, Quota, RateLimiter,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::shared::errors::{AppError, AppResult};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Rate-limited JSON GET client shared by all catalog endpoints.
///
/// The token bucket is sized to the remote API's published policy and
/// waited on before every request. A 429 from the server is still mapped to
/// `RateLimited` and surfaced verbatim; retrying is a user decision.
pub struct HttpClient {
    client: Client,
    limiter: DirectRateLimiter,
}

impl HttpClient {
    pub fn new(
        requests_per_second: f64,
        burst: u32,
        timeout_secs: u64,
        user_agent: &str,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            limiter: Self::create_rate_limiter(requests_per_second, burst),
        })
    }

    fn create_rate_limiter(requests_per_second: f64, burst: u32) -> DirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(1)
        };

        let burst = NonZeroU32::new(burst.max(1)).expect("burst is at least 1");
        let quota = Quota::with_period(period)
            .expect("period is non-zero")
            .allow_burst(burst);

        RateLimiter::direct(quota)
    }

    /// Issue a GET and deserialize the JSON body.
    pub async fn get_json<T>(&self, url: &str, query: &[(String, String)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.limiter.until_ready().await;

        debug!("GET {} ({} params)", url, query.len());
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        if status.as_u16() == 429 {
            warn!("Rate limited by remote API on {}", url);
            return Err(AppError::RateLimited);
        }
        if status.as_u16() == 404 {
            return Err(AppError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Transport {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Serialization(format!("Failed to parse response: {}", e)))
    }
}
