#![doc = include_str!("../README.md")]
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    deprecated,
    unreachable_code,
    unused_mut,
    clippy::wildcard_imports
)]

mod error;
mod event;
mod probe;

pub use self::error::*;
pub use self::event::*;
pub use self::probe::*;
pub use reqwest::Url;

use std::io::Write;

/// Root of the training API probed by the binary
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Identities probed by [`run`], in order
pub const DEFAULT_PROBES: [ProbeRequest<'static>; 3] = [
    ProbeRequest::new(1, "Admin User"),
    ProbeRequest::new(2, "General User at Facility 1"),
    ProbeRequest::new(3, "General User at Facility 2"),
];

/// Probes every identity in [`DEFAULT_PROBES`], one after another.
///
/// A probe that can't reach the service doesn't stop the ones after it.
pub async fn run<W>(probe: &Probe, out: &mut W) -> Result<()>
where
    W: Write,
{
    for request in DEFAULT_PROBES.iter() {
        probe.test_visibility(request, out).await?;
    }

    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    /// URL of a port nothing listens on
    pub(crate) async fn unreachable_base_url() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        format!("http://{}/api", addr).parse().unwrap()
    }

    async fn respond_to(mock_server: &MockServer, user_id: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/api/training/events"))
            .and(header(USER_ID_HEADER, user_id))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn probes_each_identity_in_order() {
        let mock_server = MockServer::start().await;
        respond_to(&mock_server, "1", 200, r#"[{"id":1,"title":"A"},{"id":2,"title":"B","facilityId":5}]"#).await;
        respond_to(&mock_server, "2", 500, "").await;
        respond_to(&mock_server, "3", 200, r#"[{"id":2,"title":"B","facilityId":5}]"#).await;

        let probe = Probe::new(format!("{}/api", mock_server.uri()).parse().unwrap());
        let mut out = Vec::new();

        run(&probe, &mut out).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let user_ids: Vec<Option<&str>> = requests
            .iter()
            .map(|request| {
                request
                    .headers
                    .get(USER_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
            })
            .collect();

        assert_eq!(requests.len(), 3);
        assert_eq!(user_ids, vec![Some("1"), Some("2"), Some("3")]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n\
             --- Testing for: Admin User (User ID: 1) ---\n\
             Found 2 visible events.\n\
             - ID: 1, Title: A, Facility: None\n\
             - ID: 2, Title: B, Facility: 5\n\
             \n\
             --- Testing for: General User at Facility 1 (User ID: 2) ---\n\
             Failed to get events: 500\n\
             \n\
             --- Testing for: General User at Facility 2 (User ID: 3) ---\n\
             Found 1 visible events.\n\
             - ID: 2, Title: B, Facility: 5\n"
        );
    }

    #[tokio::test]
    async fn completes_when_service_is_down() {
        let probe = Probe::new(unreachable_base_url().await);
        let mut out = Vec::new();

        run(&probe, &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("--- Testing for: ").count(), 3);
        assert_eq!(out.matches("Failed to reach service: ").count(), 3);
    }

    #[test]
    fn default_base_url_parses() {
        let probe = Probe::new(DEFAULT_BASE_URL.parse().unwrap());

        assert_eq!(probe.url().as_str(), "http://localhost:8080/api/training/events");
    }
}
