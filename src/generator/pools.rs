//! Component pools for user-agent generation
//!
//! Every pool is a fixed, non-empty set of plausible values for one
//! substitution slot. Pools are sampled independently; the only grouping is
//! the [`Device`] triple, so a single pick yields a coherent
//! manufacturer/brand/model combination.

/// An Android handset as it appears in a Facebook user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    /// Value of the FBMF field
    pub manufacturer: &'static str,
    /// Value of the FBBD field
    pub brand: &'static str,
    /// Marketing or firmware model name, used in FBDV and the Dalvik prefix
    pub model: &'static str,
}

/// Handsets sampled for the device slot
pub const DEVICES: &[Device] = &[
    Device { manufacturer: "samsung", brand: "samsung", model: "SM-G991B" },
    Device { manufacturer: "samsung", brand: "samsung", model: "SM-G973F" },
    Device { manufacturer: "samsung", brand: "samsung", model: "SM-N975F" },
    Device { manufacturer: "samsung", brand: "samsung", model: "SM-A515F" },
    Device { manufacturer: "samsung", brand: "samsung", model: "SM-A125F" },
    Device { manufacturer: "Xiaomi", brand: "Redmi", model: "Redmi Note 8 Pro" },
    Device { manufacturer: "Xiaomi", brand: "Redmi", model: "M2101K6G" },
    Device { manufacturer: "Xiaomi", brand: "Xiaomi", model: "Mi 9T" },
    Device { manufacturer: "Google", brand: "google", model: "Pixel 4a" },
    Device { manufacturer: "Google", brand: "google", model: "Pixel 6" },
    Device { manufacturer: "Google", brand: "google", model: "Pixel 7 Pro" },
    Device { manufacturer: "OnePlus", brand: "OnePlus", model: "LE2115" },
    Device { manufacturer: "OnePlus", brand: "OnePlus", model: "AC2003" },
    Device { manufacturer: "HUAWEI", brand: "HUAWEI", model: "ANE-LX1" },
    Device { manufacturer: "HUAWEI", brand: "HUAWEI", model: "ELE-L29" },
    Device { manufacturer: "OPPO", brand: "OPPO", model: "CPH2219" },
    Device { manufacturer: "vivo", brand: "vivo", model: "V2027" },
    Device { manufacturer: "motorola", brand: "motorola", model: "moto g stylus" },
    Device { manufacturer: "realme", brand: "realme", model: "RMX3085" },
    Device { manufacturer: "Infinix", brand: "Infinix", model: "Infinix X669" },
];

/// Android OS release strings (Dalvik prefix and FBSV field)
pub const ANDROID_VERSIONS: &[&str] = &[
    "7.0", "7.1.2", "8.0.0", "8.1.0", "9", "10", "11", "12", "13", "14",
];

/// System build identifiers for the `Build/` slot
pub const BUILD_IDS: &[&str] = &[
    "NRD90M",
    "OPM1.171019.011",
    "PPR1.180610.011",
    "PKQ1.190101.001",
    "QP1A.190711.020",
    "QKQ1.200114.002",
    "RP1A.200720.012",
    "RKQ1.201004.002",
    "SP1A.210812.016",
    "SKQ1.211019.001",
    "TP1A.220624.014",
    "UP1A.231005.007",
];

/// Locale codes (Dalvik prefix and FBLC field)
pub const LOCALES: &[&str] = &[
    "en_US", "en_GB", "es_ES", "es_MX", "fr_FR", "de_DE", "pt_BR", "it_IT",
    "tr_TR", "ru_RU", "ar_AE", "hi_IN", "id_ID", "vi_VN", "th_TH", "bn_BD",
];

/// Dalvik VM versions seen on real devices
pub const DALVIK_VERSIONS: &[&str] = &["1.6.0", "2.1.0"];

/// Facebook for Android release versions (FBAV field)
pub const APP_VERSIONS: &[&str] = &[
    "417.0.0.33.65",
    "421.0.0.29.59",
    "428.0.0.32.114",
    "433.0.0.35.102",
    "438.0.0.30.118",
    "442.0.0.38.108",
    "447.0.0.41.106",
    "452.0.0.39.109",
    "458.0.0.40.100",
    "463.0.0.46.83",
];

/// Facebook internal build numbers (FBBV field)
pub const APP_BUILDS: &[&str] = &[
    "433338793", "441717112", "450430385", "459128443", "465421076",
    "472818301", "479253842", "485162708",
];

/// Display-metrics descriptors (FBDM field)
pub const DISPLAY_METRICS: &[&str] = &[
    "{density=1.5,width=540,height=960}",
    "{density=2.0,width=720,height=1280}",
    "{density=2.625,width=1080,height=2280}",
    "{density=2.75,width=1080,height=2400}",
    "{density=3.0,width=1080,height=1920}",
    "{density=3.5,width=1440,height=2560}",
    "{density=4.0,width=1440,height=3040}",
];

/// Carrier names (FBCR field)
pub const CARRIERS: &[&str] = &[
    "Verizon", "T-Mobile", "AT&T", "Vodafone", "Orange", "O2", "Telekom",
    "MTN", "Airtel", "Grameenphone", "Claro", "Telcel",
];

/// CPU ABI sets (FBCA field)
pub const CPU_ABIS: &[&str] = &["armeabi-v7a:armeabi", "arm64-v8a:", "x86:armeabi-v7a"];

#[cfg(test)]
mod tests {
    use super::*;

    fn str_pools() -> Vec<(&'static str, &'static [&'static str])> {
        vec![
            ("android_versions", ANDROID_VERSIONS),
            ("build_ids", BUILD_IDS),
            ("locales", LOCALES),
            ("dalvik_versions", DALVIK_VERSIONS),
            ("app_versions", APP_VERSIONS),
            ("app_builds", APP_BUILDS),
            ("display_metrics", DISPLAY_METRICS),
            ("carriers", CARRIERS),
            ("cpu_abis", CPU_ABIS),
        ]
    }

    #[test]
    fn test_pools_non_empty() {
        assert!(!DEVICES.is_empty());
        for (name, pool) in str_pools() {
            assert!(!pool.is_empty(), "pool {} is empty", name);
        }
    }

    #[test]
    fn test_pool_values_printable() {
        for (name, pool) in str_pools() {
            for value in pool {
                assert!(!value.is_empty(), "empty value in {}", name);
                assert!(
                    value.chars().all(|c| c.is_ascii() && !c.is_ascii_control()),
                    "non-printable value {:?} in {}",
                    value,
                    name
                );
            }
        }
        for device in DEVICES {
            for field in [device.manufacturer, device.brand, device.model] {
                assert!(!field.is_empty());
                assert!(field.chars().all(|c| c.is_ascii() && !c.is_ascii_control()));
            }
        }
    }

    #[test]
    fn test_locales_well_formed() {
        for locale in LOCALES {
            let (lang, region) = locale.split_once('_').expect("locale without region");
            assert_eq!(lang.len(), 2);
            assert_eq!(region.len(), 2);
            assert!(lang.chars().all(|c| c.is_ascii_lowercase()));
            assert!(region.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
