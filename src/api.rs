use gloo::net::http::{Request, Response};
use urlencoding::encode;

use crate::board::Backend;
use crate::error::{ApiError, Result};
use crate::model::{Catalog, ServerReply};

/// Thin client for the activities backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// An empty base means same-origin requests (`/activities`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }

    pub fn unregister_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }
}

impl Backend for ApiClient {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let resp = Request::get(&self.activities_url()).send().await?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(resp.json::<Catalog>().await?)
    }

    /// Returns the server's success message, if it sent one.
    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let resp = Request::post(&self.signup_url(activity, email)).send().await?;
        read_response(resp).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let resp = Request::delete(&self.unregister_url(activity, email))
            .send()
            .await?;
        read_response(resp).await
    }
}

async fn read_response(resp: Response) -> Result<Option<String>> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await?;
    read_reply(ok, status, &body)
}

async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    let detail = resp.json::<ServerReply>().await.ok().and_then(|r| r.detail);
    ApiError::Rejected { status, detail }
}

/// The body is parsed before the status is looked at, so an error page that
/// isn't JSON counts as a malformed response rather than a rejection.
pub fn read_reply(ok: bool, status: u16, body: &str) -> Result<Option<String>> {
    let reply: ServerReply = serde_json::from_str(body)?;
    if ok {
        Ok(reply.message)
    } else {
        Err(ApiError::Rejected {
            status,
            detail: reply.detail,
        })
    }
}
