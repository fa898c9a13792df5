use training_visibility_probe::{run, Probe, Url, DEFAULT_BASE_URL};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let base_url: Url = match DEFAULT_BASE_URL.parse() {
        Ok(url) => url,
        Err(ref error) => {
            tracing::error!(%error, "Couldn't parse base URL");
            return;
        }
    };

    let probe = Probe::new(base_url);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(ref error) = run(&probe, &mut out).await {
        tracing::error!(%error, "Couldn't write probe report");
    }
}
