use crate::harness::TrialConfig;

/// Invalid trial settings. The `Display` strings are printed by the driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown profile '{0}'. Valid: quick, standard, thorough")]
    UnknownProfile(String),

    #[error("trials should be positive.")]
    ZeroTrials,
}

/// Default timed trials when neither a profile nor --trials is given.
pub const DEFAULT_TRIALS: u32 = 10;

/// Default untimed warmup rounds.
pub const DEFAULT_WARMUP: u32 = 1;

/// A named preset of trial and warmup counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialProfile {
    pub name: &'static str,
    pub trials: u32,
    pub warmup: u32,
}

pub static PROFILES: [TrialProfile; 3] = [
    TrialProfile { name: "quick", trials: 3, warmup: 1 },
    TrialProfile { name: "standard", trials: DEFAULT_TRIALS, warmup: DEFAULT_WARMUP },
    TrialProfile { name: "thorough", trials: 30, warmup: 3 },
];

/// Lookup a profile by name.
pub fn get_profile(name: &str) -> Option<&'static TrialProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

/// Combine an optional profile with explicit overrides.
///
/// Explicit `trials` / `warmup` values win over the profile's. A run needs
/// at least one timed trial.
pub fn resolve_trials(
    profile: Option<&str>,
    trials: Option<u32>,
    warmup: Option<u32>,
) -> Result<TrialConfig, ConfigError> {
    let (base_trials, base_warmup) = match profile {
        Some(name) => {
            let p = get_profile(name)
                .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
            (p.trials, p.warmup)
        }
        None => (DEFAULT_TRIALS, DEFAULT_WARMUP),
    };

    let trials = trials.unwrap_or(base_trials);
    if trials == 0 {
        return Err(ConfigError::ZeroTrials);
    }

    Ok(TrialConfig {
        trials,
        warmup: warmup.unwrap_or(base_warmup),
    })
}

/// Parse an integer count, allowing `_` separators and a decimal suffix.
///
/// Supports:
/// - "1000000" or "1_000_000" -> 1_000_000
/// - "100K" or "100k" -> 100_000
/// - "64M" or "64m" -> 64_000_000
/// - "2G" or "2g" -> 2_000_000_000
/// - "-5" -> -5 (sign checks happen during shape validation)
pub fn parse_count(s: &str) -> Result<i64, String> {
    let s = s.trim();
    let (digits, multiplier) = match s.chars().last() {
        Some('K' | 'k') => (&s[..s.len() - 1], 1_000),
        Some('M' | 'm') => (&s[..s.len() - 1], 1_000_000),
        Some('G' | 'g') => (&s[..s.len() - 1], 1_000_000_000),
        _ => (s, 1),
    };

    let base: i64 = digits
        .replace('_', "")
        .parse()
        .map_err(|e| format!("Invalid count '{}': {}", s, e))?;

    base.checked_mul(multiplier)
        .ok_or_else(|| format!("Invalid count '{}': overflow", s))
}
