#[tokio::main]
async fn main() {
    if let Err(e) = emotion_care_lib::run().await {
        // The subscriber may not be installed if startup failed early
        eprintln!("emotion-care-functions: {}", e);
        tracing::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
