#[tokio::main]
async fn main() {
    if let Err(err) = hx_api::run().await {
        tracing::error!(error = %err, "hx-api exited with error");
        eprintln!("hx-api: {err}");
        std::process::exit(1);
    }
}
