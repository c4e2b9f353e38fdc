// Build-time settings. Override by exporting the variables before `trunk build`.

const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;
const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;
const DEFAULT_API_BASE_URL: &str = "https://api.trustshield.app";

/// How long the simulated waitlist submission stays in flight.
pub fn get_submit_delay_ms() -> u32 {
    parse_millis(option_env!("TRUSTSHIELD_SUBMIT_DELAY_MS"), DEFAULT_SUBMIT_DELAY_MS)
}

/// How long a toast stays on screen before dismissing itself.
pub fn get_toast_duration_ms() -> u32 {
    parse_millis(option_env!("TRUSTSHIELD_TOAST_DURATION_MS"), DEFAULT_TOAST_DURATION_MS)
}

/// Base URL shown in the API code preview. Marketing copy only, nothing calls it.
pub fn get_api_base_url() -> &'static str {
    match option_env!("TRUSTSHIELD_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

fn parse_millis(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed millisecond override {:?}, using {}", value, default);
            default
        }),
        _ => default,
    }
}
