//! User agent generation
//!
//! Builds synthetic Android/Facebook user-agent strings by sampling each
//! template slot uniformly from the fixed pools in [`pools`]. Generation is a
//! pure function of the pool contents and a random source; slots are not
//! correlated with each other (the OS version inside the app segment is
//! sampled independently from the one in the Dalvik prefix).

pub mod pools;

use pools::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full OS-level user agent: `Dalvik/... (Linux; U; Android ...) [FBAN/...]`
    Dalvik,
    /// Facebook app segment only: `[FBAN/FB4A;...]`
    Facebook,
}

impl Variant {
    /// All supported variants, in display order
    pub const ALL: [Variant; 2] = [Variant::Dalvik, Variant::Facebook];

    /// Wire name, as accepted by [`Variant::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dalvik => "dalvik",
            Variant::Facebook => "facebook",
        }
    }

    /// Human-readable label for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Dalvik => "Full Format (Dalvik)",
            Variant::Facebook => "Facebook App Only",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dalvik" => Ok(Variant::Dalvik),
            "facebook" => Ok(Variant::Facebook),
            other => Err(GeneratorError::InvalidVariant(other.to_string())),
        }
    }
}

/// Errors raised by the generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The requested variant is outside the supported enumeration
    #[error("unknown user agent variant: {0}")]
    InvalidVariant(String),
}

/// Generate one user-agent string for the given variant
pub fn generate(variant: Variant) -> String {
    let mut rng = rand::thread_rng();

    match variant {
        Variant::Dalvik => dalvik_user_agent(&mut rng),
        Variant::Facebook => app_segment(&mut rng),
    }
}

/// Full Android WebView shape with the app segment appended
fn dalvik_user_agent<R: Rng>(rng: &mut R) -> String {
    // choose() only fails on an empty slice; every pool is statically non-empty
    let vm = DALVIK_VERSIONS.choose(rng).unwrap();
    let os = ANDROID_VERSIONS.choose(rng).unwrap();
    let locale = LOCALES.choose(rng).unwrap();
    let device = DEVICES.choose(rng).unwrap();
    let build = BUILD_IDS.choose(rng).unwrap();

    format!(
        "Dalvik/{vm} (Linux; U; Android {os}; {locale}; {model} Build/{build}) {segment}",
        model = device.model,
        segment = app_segment(rng),
    )
}

/// Facebook-app segment, shared by both variants
fn app_segment<R: Rng>(rng: &mut R) -> String {
    let device = DEVICES.choose(rng).unwrap();
    let app_version = APP_VERSIONS.choose(rng).unwrap();
    let app_build = APP_BUILDS.choose(rng).unwrap();
    let metrics = DISPLAY_METRICS.choose(rng).unwrap();
    let locale = LOCALES.choose(rng).unwrap();
    let carrier = CARRIERS.choose(rng).unwrap();
    let os = ANDROID_VERSIONS.choose(rng).unwrap();
    let abi = CPU_ABIS.choose(rng).unwrap();

    format!(
        "[FBAN/FB4A;FBAV/{app_version};FBBV/{app_build};FBDM/{metrics};\
         FBLC/{locale};FBRV/0;FBCR/{carrier};FBMF/{mf};FBBD/{bd};\
         FBPN/com.facebook.katana;FBDV/{model};FBSV/{os};FBOP/1;FBCA/{abi};]",
        mf = device.manufacturer,
        bd = device.brand,
        model = device.model,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;
    use std::collections::HashSet;

    static DALVIK_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^Dalvik/\d+\.\d+\.\d+ \(Linux; U; Android [0-9.]+; [a-z]{2}_[A-Z]{2}; [A-Za-z0-9 .-]+ Build/[A-Z0-9.]+\) \[FBAN/FB4A;.+\]$",
        )
        .unwrap()
    });

    static APP_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^\[FBAN/FB4A;FBAV/[0-9.]+;FBBV/[0-9]+;FBDM/\{density=[0-9.]+,width=[0-9]+,height=[0-9]+\};FBLC/[a-z]{2}_[A-Z]{2};FBRV/0;FBCR/[A-Za-z& -]+;FBMF/[A-Za-z]+;FBBD/[A-Za-z]+;FBPN/com\.facebook\.katana;FBDV/[A-Za-z0-9 .-]+;FBSV/[0-9.]+;FBOP/1;FBCA/[A-Za-z0-9:-]+;\]$",
        )
        .unwrap()
    });

    #[test]
    fn test_dalvik_matches_grammar() {
        for _ in 0..200 {
            let ua = generate(Variant::Dalvik);
            assert!(DALVIK_RE.is_match(&ua), "bad dalvik ua: {}", ua);
        }
    }

    #[test]
    fn test_facebook_matches_grammar() {
        for _ in 0..200 {
            let ua = generate(Variant::Facebook);
            assert!(APP_RE.is_match(&ua), "bad app segment: {}", ua);
        }
    }

    #[test]
    fn test_dalvik_embeds_valid_app_segment() {
        let ua = generate(Variant::Dalvik);
        let segment = &ua[ua.find('[').expect("no app segment")..];
        assert!(APP_RE.is_match(segment), "bad embedded segment: {}", segment);
    }

    #[test]
    fn test_output_never_empty_or_multiline() {
        for variant in Variant::ALL {
            for _ in 0..100 {
                let ua = generate(variant);
                assert!(!ua.is_empty());
                assert!(!ua.contains('\n'));
                assert!(ua.chars().all(|c| c.is_ascii() && !c.is_ascii_control()));
            }
        }
    }

    #[test]
    fn test_repeated_calls_vary() {
        let distinct: HashSet<String> = (0..1000).map(|_| generate(Variant::Dalvik)).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_variant_parse_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_invalid_variant_rejected() {
        let err = "chrome".parse::<Variant>().unwrap_err();
        assert_eq!(err, GeneratorError::InvalidVariant("chrome".to_string()));
        assert_eq!(err.to_string(), "unknown user agent variant: chrome");
    }
}
