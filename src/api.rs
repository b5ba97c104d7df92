use anyhow::{Context, Result, bail};
use tracing::debug;
use url::Url;

use crate::ACTIVITY_PATH;
use crate::types::{Activity, ActivityResponse};

/// Fetch one page of activity history for the given user address.
///
/// Hits `GET {base}/activity?user=<addr>&limit=..&offset=..` and normalizes
/// the response (bare array or `{data: [...]}` envelope) to a plain list.
pub async fn fetch_user_activity(
    client: &reqwest::Client,
    base_url: &Url,
    user: &str,
    limit: i32,
    offset: i32,
) -> Result<Vec<Activity>> {
    let url = base_url
        .join(ACTIVITY_PATH)
        .context("invalid data API base URL")?;

    let resp = client
        .get(url)
        .query(&[
            ("user", user),
            ("limit", &limit.to_string()),
            ("offset", &offset.to_string()),
        ])
        .send()
        .await
        .context("activity request failed")?;

    let status = resp.status();
    if !status.is_success() {
        bail!("data API returned {status} for user {user}");
    }

    let body: ActivityResponse = resp
        .json()
        .await
        .context("failed to decode activity response")?;
    let records = body.into_records();
    debug!("Fetched {} activity record(s) at offset {}", records.len(), offset);
    Ok(records)
}

/// Fetch the full activity history for a user, paginating in pages of 100
/// until a short page signals the end.
pub async fn fetch_all_activity(
    client: &reqwest::Client,
    base_url: &Url,
    user: &str,
) -> Result<Vec<Activity>> {
    let mut all = Vec::new();
    let mut offset: i32 = 0;
    let page_size: i32 = 100;

    loop {
        let page = fetch_user_activity(client, base_url, user, page_size, offset).await?;
        let count = page.len() as i32;
        all.extend(page);

        if count < page_size {
            break;
        }
        offset += page_size;
    }

    debug!("Fetched {} activity record(s) total", all.len());
    Ok(all)
}
