use crate::{Result, TrainingEvent};
use reqwest::{Client, StatusCode, Url};
use std::io::{self, Write};

/// Header carrying the caller identity
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Identity to probe the service with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRequest<'a> {
    /// Sent as-is in [`USER_ID_HEADER`]
    pub user_id: i64,

    /// Label printed in the report header
    pub description: &'a str,
}

impl<'a> ProbeRequest<'a> {
    /// Creates an instance of [`ProbeRequest`]
    pub const fn new(user_id: i64, description: &'a str) -> Self {
        Self {
            user_id,
            description,
        }
    }
}

/// What the service answered to a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// `200 OK` with the events visible to the caller
    Visible(Vec<TrainingEvent>),

    /// Any other status. The body is left unread.
    Rejected(StatusCode),
}

/// Checks which training events a caller identity can see
#[derive(Debug, Clone)]
pub struct Probe {
    client: Client,
    url: Url,
}

impl Probe {
    /// Creates a [`Probe`] for the API rooted at `base_url`
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            url: events_url(base_url),
        }
    }

    /// Training events endpoint being probed
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends a single request on behalf of `request.user_id`
    pub async fn fetch(&self, request: &ProbeRequest<'_>) -> Result<ProbeOutcome> {
        let response = self
            .client
            .get(self.url.clone())
            .header(USER_ID_HEADER, request.user_id.to_string())
            .send()
            .await?;

        let status = response.status();

        tracing::debug!(user_id = request.user_id, %status, "Received training events response");

        if status != StatusCode::OK {
            return Ok(ProbeOutcome::Rejected(status));
        }

        let body = response.bytes().await?;

        Ok(ProbeOutcome::Visible(TrainingEvent::list_from_slice(&body)?))
    }

    /// Probes the service and writes a human readable report to `out`.
    ///
    /// Failing to reach the service or decode its answer is reported and
    /// swallowed. Only errors writing to `out` are returned.
    pub async fn test_visibility<W>(&self, request: &ProbeRequest<'_>, out: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(out)?;
        writeln!(
            out,
            "--- Testing for: {} (User ID: {}) ---",
            request.description, request.user_id
        )?;

        match self.fetch(request).await {
            Ok(outcome) => report_outcome(out, &outcome)?,
            Err(ref error) => {
                tracing::error!(user_id = request.user_id, %error, "Couldn't probe training events");

                writeln!(out, "Failed to reach service: {}", error)?;
            }
        }

        Ok(())
    }
}

/// Writes the summary lines for an outcome
pub fn report_outcome<W>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()>
where
    W: Write,
{
    match outcome {
        ProbeOutcome::Visible(events) => {
            writeln!(out, "Found {} visible events.", events.len())?;

            for event in events {
                writeln!(out, "{}", event)?;
            }
        }
        ProbeOutcome::Rejected(status) => {
            writeln!(out, "Failed to get events: {}", status.as_u16())?;
        }
    }

    Ok(())
}

fn events_url(mut base_url: Url) -> Url {
    let path = format!("{}/training/events", base_url.path().trim_end_matches('/'));
    base_url.set_path(&path);
    base_url
}
