//! Store identifier extraction from listing URLs.
//!
//! Apps carry store listing URLs as entered by their owners; the store-native
//! identifier has to be recovered from them. A URL the patterns don't match
//! means "cannot determine identifier" and the app is skipped for that store,
//! not an error.

use url::Url;

/// Extract the Android package name from a Play listing URL, e.g.
/// `https://play.google.com/store/apps/details?id=com.acme.app`.
pub fn android_package_from_url(listing_url: &str) -> Option<String> {
    let url = Url::parse(listing_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|package| !package.is_empty())
}

/// Extract the numeric App Store app id from a listing URL, e.g.
/// `https://apps.apple.com/us/app/acme/id123456789`.
pub fn ios_app_id_from_url(listing_url: &str) -> Option<String> {
    let url = Url::parse(listing_url).ok()?;
    url.path_segments()?.find_map(|segment| {
        let digits = segment.strip_prefix("id")?;
        (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .then(|| digits.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_package_from_url() {
        assert_eq!(
            android_package_from_url("https://play.google.com/store/apps/details?id=com.acme.app"),
            Some("com.acme.app".to_string())
        );
        assert_eq!(
            android_package_from_url(
                "https://play.google.com/store/apps/details?hl=en&id=com.acme.app&gl=us"
            ),
            Some("com.acme.app".to_string())
        );
    }

    #[test]
    fn test_android_package_absent() {
        assert_eq!(
            android_package_from_url("https://play.google.com/store/apps/details?hl=en"),
            None
        );
        assert_eq!(
            android_package_from_url("https://play.google.com/store/apps/details?id="),
            None
        );
        assert_eq!(android_package_from_url("not a url"), None);
    }

    #[test]
    fn test_ios_app_id_from_url() {
        assert_eq!(
            ios_app_id_from_url("https://apps.apple.com/us/app/acme/id123456789"),
            Some("123456789".to_string())
        );
        assert_eq!(
            ios_app_id_from_url("https://apps.apple.com/app/id42"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_ios_app_id_absent() {
        // Segments that merely start with "id" don't count.
        assert_eq!(
            ios_app_id_from_url("https://apps.apple.com/us/app/idea-factory"),
            None
        );
        assert_eq!(ios_app_id_from_url("https://apps.apple.com/us/app/acme"), None);
        assert_eq!(ios_app_id_from_url("https://apps.apple.com/us/app/id"), None);
        assert_eq!(ios_app_id_from_url("not a url"), None);
    }
}
