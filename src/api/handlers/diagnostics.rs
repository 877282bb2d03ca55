use std::time::Duration;

/// Delay before the process exits, long enough for the response to flush
const CRASH_DELAY: Duration = Duration::from_millis(100);

/// Deliberately takes the process down outside the request cycle
///
/// GET /crash-test (only mounted when `CRASH_TEST_ENABLED=true`)
///
/// Lets operators check that the process supervisor restarts the service.
/// The request itself succeeds; a detached task then exits with status 1.
pub async fn crash_test() -> &'static str {
    tokio::spawn(async {
        tokio::time::sleep(CRASH_DELAY).await;
        tracing::error!("Server will crash now");
        std::process::exit(1);
    });

    "Server will crash now"
}
