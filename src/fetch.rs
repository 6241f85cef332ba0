use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reqwest::Client;
use url::Url;

use crate::errors::{Error, Result};
use crate::snapshots;
use crate::structs::Reply;

pub const QUESTIONS_ENDPOINT: &str = "https://api.stackexchange.com/2.2/questions";
pub const PAGE_SIZE: usize = 100;

pub struct PageQuery<'a> {
  pub page: usize,
  pub tag: &'a str,
  pub from: DateTime<Utc>,
  pub to: DateTime<Utc>,
  pub key: Option<&'a str>,
}

pub fn build_page_url(endpoint: &Url, query: &PageQuery) -> Url {
  let mut request_url = endpoint.clone();
  request_url
    .query_pairs_mut()
    .append_pair("page", &query.page.to_string())
    .append_pair("pagesize", &PAGE_SIZE.to_string())
    .append_pair("fromdate", &query.from.timestamp().to_string())
    .append_pair("todate", &query.to.timestamp().to_string())
    .append_pair("order", "desc")
    .append_pair("sort", "activity")
    .append_pair("tagged", query.tag)
    .append_pair("site", "stackoverflow");
  if let Some(key) = query.key {
    request_url.query_pairs_mut().append_pair("key", key);
  }
  return request_url;
}

pub fn page_filename(tag_dir: &Path, page: usize) -> PathBuf {
  return tag_dir.join(format!("so{:03}.json", page));
}

/// The url with the api key stripped, for logs and errors.
pub fn redact_key(url: &Url) -> Url {
  let mut redacted = url.clone();
  let pairs: Vec<(String, String)> = url.query_pairs().into_owned().filter(|(name, _)| name != "key").collect();
  redacted.query_pairs_mut().clear().extend_pairs(pairs);
  return redacted;
}

async fn http_request_text(http_client: &Client, url: &Url) -> Result<String> {
  let redacted_url = redact_key(url);
  log::info!("http_request_text: url = {}", redacted_url);
  let response = http_client.get(url.clone()).send().await?;
  let response_status = response.status();
  log::info!("response status: {}", response_status);
  if !response_status.is_success() {
    return Err(Error::HttpStatus {
      url: redacted_url.to_string(),
      status: response_status.as_u16(),
    });
  }
  let stringified_response_body = response.text().await?;
  return Ok(stringified_response_body);
}

/// Replaces `base_dir/tag` with freshly fetched pages. Returns the number of pages written.
pub async fn fetch_tag(
  http_client: &Client,
  endpoint: &Url,
  base_dir: &Path,
  tag: &str,
  from: DateTime<Utc>,
  to: DateTime<Utc>,
  key: Option<&str>,
) -> Result<usize> {
  let dir = snapshots::tag_dir(base_dir, tag);
  if dir.exists() {
    tokio::fs::remove_dir_all(&dir).await.map_err(|err| Error::io(&dir, err))?;
  }
  tokio::fs::create_dir_all(&dir).await.map_err(|err| Error::io(&dir, err))?;
  log::info!("fetching tag '{}' to dir '{}'", tag, dir.display());
  let mut page = 1;
  loop {
    let query = PageQuery { page, tag, from, to, key };
    let request_url = build_page_url(endpoint, &query);
    let body = http_request_text(http_client, &request_url).await?;
    // keep the raw page, the analysis reads these files later
    let filename = page_filename(&dir, page);
    tokio::fs::write(&filename, &body).await.map_err(|err| Error::io(&filename, err))?;
    log::info!("wrote {}", filename.display());
    let reply: Reply = serde_json::from_str(&body).map_err(|err| Error::parse(&filename, err))?;
    log::debug!("page = {} num_items = {} quota_remaining = {}", page, reply.items.len(), reply.quota_remaining);
    if !reply.has_more {
      return Ok(page);
    }
    page += 1;
  }
}

pub async fn fetch_tags(
  endpoint: &Url,
  base_dir: &Path,
  tags: &[String],
  from: DateTime<Utc>,
  to: DateTime<Utc>,
  key: Option<&str>,
) -> Result<()> {
  tokio::fs::create_dir_all(base_dir).await.map_err(|err| Error::io(base_dir, err))?;
  let http_client = Client::builder().gzip(true).build()?;
  for tag in tags {
    let num_pages = fetch_tag(&http_client, endpoint, base_dir, tag, from, to, key).await?;
    log::info!("tag = {} num_pages = {}", tag, num_pages);
  }
  return Ok(());
}
