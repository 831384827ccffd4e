//! The fixed list of timezones clients can choose from.
//!
//! Clients pick an entry by its `label`; the service stores and resolves the
//! entry's `identifier`. The `utc_offset` string is for display only and is
//! never used to compute a time.

use serde::Serialize;

/// A single selectable timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneEntry {
    /// Display string clients select by.
    pub label: &'static str,
    /// IANA zone name stored in the registry.
    pub identifier: &'static str,
    /// Display-only offset text.
    pub utc_offset: &'static str,
}

const fn entry(
    label: &'static str,
    identifier: &'static str,
    utc_offset: &'static str,
) -> TimezoneEntry {
    TimezoneEntry {
        label,
        identifier,
        utc_offset,
    }
}

/// Supported timezones in display order.
pub static TIMEZONES: &[TimezoneEntry] = &[
    entry("UTC (Coordinated Universal Time)", "UTC", "UTC + 0:00"),
    entry("GMT (Greenwich Mean Time)", "Europe/London", "UTC + 0:00"),
    entry("CET (Central European Time)", "Europe/Berlin", "UTC + 1:00"),
    entry("EET (Eastern European Time)", "Europe/Athens", "UTC + 2:00"),
    entry("MSK (Moscow Standard Time)", "Europe/Moscow", "UTC + 3:00"),
    entry("GST (Gulf Standard Time)", "Asia/Dubai", "UTC + 4:00"),
    entry("IST (Indian Standard Time)", "Asia/Kolkata", "UTC + 5:30"),
    entry("BST (Bangladesh Standard Time)", "Asia/Dhaka", "UTC + 6:00"),
    entry("ICT (Indochina Time)", "Asia/Bangkok", "UTC + 7:00"),
    entry("CST (China Standard Time)", "Asia/Shanghai", "UTC + 8:00"),
    entry("AWST (Australian Western Standard Time)", "Australia/Perth", "UTC + 8:00"),
    entry("JST (Japan Standard Time)", "Asia/Tokyo", "UTC + 9:00"),
    entry("KST (Korea Standard Time)", "Asia/Seoul", "UTC + 9:00"),
    entry("ACST (Australia Central Standard Time)", "Australia/Adelaide", "UTC + 9:30"),
    entry("AEST (Australia Eastern Standard Time)", "Australia/Sydney", "UTC + 10:00"),
    entry("ChST (Chamorro Standard Time)", "Pacific/Guam", "UTC + 10:00"),
    entry("NZST (New Zealand Standard Time)", "Pacific/Auckland", "UTC + 12:00"),
    entry("SST (Samoa Standard Time)", "Pacific/Pago_Pago", "UTC-11:00"),
    entry("HST (Hawaii Standard Time)", "Pacific/Honolulu", "UTC-10:00"),
    entry("AKST (Alaska Standard Time)", "America/Anchorage", "UTC - 9:00"),
    entry("PST (Pacific Standard Time)", "America/Los_Angeles", "UTC - 8:00"),
    entry("MST (Mountain Standard Time)", "America/Denver", "UTC - 7:00"),
    entry("CST (Central Standard Time)", "America/Chicago", "UTC - 6:00"),
    entry("EST (Eastern Standard Time)", "America/New_York", "UTC - 5:00"),
    entry("AST (Atlantic Standard Time)", "America/Puerto_Rico", "UTC - 4:00"),
    entry("NST (Newfoundland Standard Time)", "America/St_Johns", "UTC - 3:30"),
    entry("BRT (Brasília Time)", "America/Sao_Paulo", "UTC - 3:00"),
    entry("ART (Argentina Time)", "America/Argentina/Buenos_Aires", "UTC - 3:00"),
];

/// Read-only view over a static list of timezones.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [TimezoneEntry],
}

impl Catalog {
    /// Wraps a static entry list.
    pub const fn new(entries: &'static [TimezoneEntry]) -> Self {
        Self { entries }
    }

    /// All entries, in the order clients should display them.
    pub fn list_all(&self) -> &'static [TimezoneEntry] {
        self.entries
    }

    /// Exact, case-sensitive label match. First match wins.
    pub fn find_by_label(&self, label: &str) -> Option<&'static TimezoneEntry> {
        self.entries.iter().find(|tz| tz.label == label)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(TIMEZONES)
    }
}
