use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::PikaApiError;

/// Literal body the stats backends return while throttling a client.
pub(crate) const RATE_LIMIT_SENTINEL: &str = "Too many requests";

const INITIAL_BACKOFF: Duration = Duration::from_millis(700);
const BACKOFF_STEP: Duration = Duration::from_millis(100);

/// Fetch `url` and parse the body as JSON, retrying for as long as the
/// server answers with the rate-limit sentinel.
///
/// The backoff is linear: 700 ms before the first retry, 100 ms more for
/// each retry after that, with no upper bound. The loop only ever looks at
/// the body text, never at the status code. Every endpoint method funnels
/// through here; nothing else in the crate touches the network.
pub(crate) async fn queue(http: &Client, url: &str) -> Result<Value, PikaApiError> {
    let mut body = http.get(url).send().await?.text().await?;
    let mut delay = INITIAL_BACKOFF;
    while body == RATE_LIMIT_SENTINEL {
        tokio::time::sleep(delay).await;
        delay += BACKOFF_STEP;
        body = http.get(url).send().await?.text().await?;
    }
    serde_json::from_str(&body).map_err(|_| PikaApiError::MalformedResponse(body))
}
