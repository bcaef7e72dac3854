//! Built-in region dataset: English names and IANA zones per ISO region.
//!
//! Used as the geocoder and time-zone fallback when the library has no
//! finer-grained data for a number.

struct BuiltinRegion {
    id: &'static str,
    name: &'static str,
    zones: &'static [&'static str],
}

const BUILTIN_REGIONS: &[BuiltinRegion] = &[
    BuiltinRegion {
        id: "US", name: "United States",
        zones: &[
            "America/New_York", "America/Chicago", "America/Denver", "America/Phoenix",
            "America/Los_Angeles", "America/Anchorage", "Pacific/Honolulu",
        ],
    },
    BuiltinRegion {
        id: "CA", name: "Canada",
        zones: &[
            "America/St_Johns", "America/Halifax", "America/Toronto", "America/Winnipeg",
            "America/Regina", "America/Edmonton", "America/Vancouver",
        ],
    },
    BuiltinRegion { id: "GB", name: "United Kingdom", zones: &["Europe/London"] },
    BuiltinRegion { id: "IE", name: "Ireland", zones: &["Europe/Dublin"] },
    BuiltinRegion { id: "IN", name: "India", zones: &["Asia/Kolkata"] },
    BuiltinRegion {
        id: "AU", name: "Australia",
        zones: &[
            "Australia/Sydney", "Australia/Melbourne", "Australia/Brisbane",
            "Australia/Adelaide", "Australia/Perth", "Australia/Hobart", "Australia/Darwin",
        ],
    },
    BuiltinRegion { id: "NZ", name: "New Zealand", zones: &["Pacific/Auckland"] },
    BuiltinRegion { id: "CN", name: "China", zones: &["Asia/Shanghai"] },
    BuiltinRegion { id: "JP", name: "Japan", zones: &["Asia/Tokyo"] },
    BuiltinRegion { id: "KR", name: "South Korea", zones: &["Asia/Seoul"] },
    BuiltinRegion { id: "DE", name: "Germany", zones: &["Europe/Berlin"] },
    BuiltinRegion { id: "FR", name: "France", zones: &["Europe/Paris"] },
    BuiltinRegion { id: "IT", name: "Italy", zones: &["Europe/Rome"] },
    BuiltinRegion { id: "ES", name: "Spain", zones: &["Europe/Madrid", "Atlantic/Canary"] },
    BuiltinRegion { id: "PT", name: "Portugal", zones: &["Europe/Lisbon", "Atlantic/Azores"] },
    BuiltinRegion { id: "NL", name: "Netherlands", zones: &["Europe/Amsterdam"] },
    BuiltinRegion { id: "BE", name: "Belgium", zones: &["Europe/Brussels"] },
    BuiltinRegion { id: "CH", name: "Switzerland", zones: &["Europe/Zurich"] },
    BuiltinRegion { id: "AT", name: "Austria", zones: &["Europe/Vienna"] },
    BuiltinRegion { id: "SE", name: "Sweden", zones: &["Europe/Stockholm"] },
    BuiltinRegion { id: "NO", name: "Norway", zones: &["Europe/Oslo"] },
    BuiltinRegion { id: "DK", name: "Denmark", zones: &["Europe/Copenhagen"] },
    BuiltinRegion { id: "FI", name: "Finland", zones: &["Europe/Helsinki"] },
    BuiltinRegion { id: "PL", name: "Poland", zones: &["Europe/Warsaw"] },
    BuiltinRegion { id: "GR", name: "Greece", zones: &["Europe/Athens"] },
    BuiltinRegion { id: "TR", name: "Turkey", zones: &["Europe/Istanbul"] },
    BuiltinRegion {
        id: "RU", name: "Russia",
        zones: &[
            "Europe/Moscow", "Europe/Samara", "Asia/Yekaterinburg", "Asia/Novosibirsk",
            "Asia/Krasnoyarsk", "Asia/Irkutsk", "Asia/Vladivostok",
        ],
    },
    BuiltinRegion {
        id: "BR", name: "Brazil",
        zones: &["America/Sao_Paulo", "America/Manaus", "America/Fortaleza", "America/Noronha"],
    },
    BuiltinRegion {
        id: "MX", name: "Mexico",
        zones: &["America/Mexico_City", "America/Cancun", "America/Chihuahua", "America/Tijuana"],
    },
    BuiltinRegion { id: "AR", name: "Argentina", zones: &["America/Argentina/Buenos_Aires"] },
    BuiltinRegion { id: "CL", name: "Chile", zones: &["America/Santiago"] },
    BuiltinRegion { id: "CO", name: "Colombia", zones: &["America/Bogota"] },
    BuiltinRegion { id: "PE", name: "Peru", zones: &["America/Lima"] },
    BuiltinRegion { id: "SA", name: "Saudi Arabia", zones: &["Asia/Riyadh"] },
    BuiltinRegion { id: "AE", name: "United Arab Emirates", zones: &["Asia/Dubai"] },
    BuiltinRegion { id: "EG", name: "Egypt", zones: &["Africa/Cairo"] },
    BuiltinRegion { id: "IL", name: "Israel", zones: &["Asia/Jerusalem"] },
    BuiltinRegion { id: "PK", name: "Pakistan", zones: &["Asia/Karachi"] },
    BuiltinRegion { id: "BD", name: "Bangladesh", zones: &["Asia/Dhaka"] },
    BuiltinRegion { id: "ID", name: "Indonesia", zones: &["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura"] },
    BuiltinRegion { id: "MY", name: "Malaysia", zones: &["Asia/Kuala_Lumpur"] },
    BuiltinRegion { id: "SG", name: "Singapore", zones: &["Asia/Singapore"] },
    BuiltinRegion { id: "TH", name: "Thailand", zones: &["Asia/Bangkok"] },
    BuiltinRegion { id: "PH", name: "Philippines", zones: &["Asia/Manila"] },
    BuiltinRegion { id: "NG", name: "Nigeria", zones: &["Africa/Lagos"] },
    BuiltinRegion { id: "KE", name: "Kenya", zones: &["Africa/Nairobi"] },
    BuiltinRegion { id: "ZA", name: "South Africa", zones: &["Africa/Johannesburg"] },
    BuiltinRegion { id: "MA", name: "Morocco", zones: &["Africa/Casablanca"] },
];

fn find(region: &str) -> Option<&'static BuiltinRegion> {
    BUILTIN_REGIONS.iter().find(|r| r.id.eq_ignore_ascii_case(region))
}

/// English name of an ISO region, e.g. "GB" → "United Kingdom".
pub fn region_display_name(region: &str) -> Option<&'static str> {
    find(region).map(|r| r.name)
}

/// IANA zones covering a region, empty when the region is not in the dataset.
pub fn region_time_zones(region: &str) -> &'static [&'static str] {
    find(region).map(|r| r.zones).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_display_name_case_insensitive() {
        assert_eq!(region_display_name("GB"), Some("United Kingdom"));
        assert_eq!(region_display_name("gb"), Some("United Kingdom"));
        assert_eq!(region_display_name("XX"), None);
    }

    #[test]
    fn test_time_zones() {
        assert_eq!(region_time_zones("IN"), &["Asia/Kolkata"]);
        assert_eq!(region_time_zones("US")[0], "America/New_York");
        assert!(region_time_zones("XX").is_empty());
    }

    #[test]
    fn test_all_zones_are_iana() {
        for region in BUILTIN_REGIONS {
            for zone in region.zones {
                assert!(zone.parse::<Tz>().is_ok(), "{} has bad zone {}", region.id, zone);
            }
        }
    }
}
