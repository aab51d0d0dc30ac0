/// Public origin of the directory site.
pub const SITE_URL: &str = "https://caraccidentlawyerrichardson.com";

/// Absolute canonical URL for `path` under [`SITE_URL`].
///
/// A leading and a trailing slash are added when missing, so `"lawyers/abc"`
/// becomes `https://caraccidentlawyerrichardson.com/lawyers/abc/`.
pub fn canonical_url(path: &str) -> String {
    canonical_url_with_origin(SITE_URL, path)
}

/// Same as [`canonical_url`] for a configured origin.
pub fn canonical_url_with_origin(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');

    let mut clean_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if !clean_path.ends_with('/') {
        clean_path.push('/');
    }

    format!("{}{}", origin, clean_path)
}
