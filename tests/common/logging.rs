use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

/// the #[traced_test] decorator does not work well with integration
/// tests because each test modules runs in its own crate, and the
/// decorator macro filters out events from elements_rpc.
///
/// A solution is to NOT use #[traced_test] and instead call this
/// method at start of each test.
pub fn tracing_logger() {
    let info_env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("self=trace,elements_rpc=trace"));
    let subscriber = FmtSubscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(info_env_filter)
        .with_thread_ids(true)
        .finish();

    // this will fail if global default was already set, since tests of one
    // crate share a process.  so we just ignore the error.
    let _result = tracing::subscriber::set_global_default(subscriber);
}
