/// CLI output configuration, loaded from environment variables.
///
/// Command-line flags can only turn options on; they never override a
/// variable back to off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Include generated insights alongside the metrics.
    pub insights: bool,
    /// Skip display rounding and print full-precision values.
    pub full_precision: bool,
}

impl Config {
    /// Load configuration from `HOVES_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            pretty: env_flag(&lookup, "HOVES_PRETTY", false),
            insights: env_flag(&lookup, "HOVES_INSIGHTS", false),
            full_precision: env_flag(&lookup, "HOVES_FULL_PRECISION", false),
        }
    }

    /// Apply command-line switches on top of the environment.
    pub fn with_flags(mut self, pretty: bool, insights: bool, full_precision: bool) -> Self {
        self.pretty |= pretty;
        self.insights |= insights;
        self.full_precision |= full_precision;
        self
    }
}

fn env_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key)
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(default)
}
