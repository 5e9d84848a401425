//! Storefront regions queried for every price lookup.

/// Country codes for which GOG maintains distinct regional pricing.
///
/// Order is fixed; the aggregator issues one lookup per entry. Codes match
/// the `gog_lc` cookie convention (ISO-3166 alpha-2, uppercase).
pub const REGIONS: &[&str] = &[
    "US", "CA", "MX", "BR", "AR", "CL", "CO", "PE", "UY", "GB", "DE", "FR", "ES", "IT", "NL",
    "BE", "AT", "CH", "PL", "CZ", "SK", "HU", "RO", "BG", "GR", "PT", "DK", "SE", "NO", "FI",
    "UA", "KZ", "TR", "IL", "ZA", "AU", "NZ", "JP", "KR", "TW", "HK", "IN", "CN",
];

/// Builds the region-selecting session cookie value for a country code.
///
/// GOG pins the storefront locale with a `gog_lc` cookie of the form
/// `<country>_<currency>_<language>`; prices are always requested in USD.
pub fn region_cookie(country: &str) -> String {
    format!("gog_lc={}_USD_en-US", country)
}
