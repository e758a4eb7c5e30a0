//! Region tokens used to namespace extracted game data.

/// Locale that the client ships as its default data set.
pub const DEFAULT_LOCALE: &str = "en_us";

/// Token the client uses for the default locale in archive paths and WAD names.
pub const DEFAULT_REGION: &str = "default";

/// Map a requested locale to the region token used inside the archives.
///
/// `en_us` (in any case) becomes [`DEFAULT_REGION`]; everything else is returned
/// unchanged. Normalizing an already normalized token is a no-op.
pub fn normalize_region(locale: &str) -> String {
    if locale.eq_ignore_ascii_case(DEFAULT_LOCALE) {
        DEFAULT_REGION.to_string()
    } else {
        locale.to_string()
    }
}

/// Spell a region token the way the client names its WAD files.
///
/// `zh_cn` -> `zh_CN`, `default` -> `default`.
pub fn wad_region_name(region: &str) -> String {
    if region.eq_ignore_ascii_case(DEFAULT_REGION) {
        return DEFAULT_REGION.to_string();
    }

    match region.split_once('_') {
        Some((language, country)) => format!(
            "{}_{}",
            language.to_ascii_lowercase(),
            country.to_ascii_uppercase()
        ),
        None => region.to_string(),
    }
}
