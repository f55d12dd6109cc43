/// Application-level constants
pub const APP_NAME: &str = "VHF Triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter for embedding shells that install a subscriber.
/// The engine itself only emits events; subscriber setup is the shell's job.
pub fn default_log_filter() -> &'static str {
    "info,vhf_triage=debug"
}
