use crate::utils::error::{DirectoryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> DirectoryError {
    DirectoryError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The origin canonical URLs are built on: http(s), no query or fragment.
pub fn validate_site_origin(field: &str, origin: &str) -> Result<()> {
    let url = Url::parse(origin).map_err(|e| invalid(field, origin, format!("Invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            origin,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(field, origin, "Site origin cannot carry a query or fragment"));
    }
    Ok(())
}

/// A usable file path, optionally required to carry `extension`.
pub fn validate_file_path(field: &str, path: &str, extension: Option<&str>) -> Result<()> {
    if path.trim().is_empty() || path.contains('\0') {
        return Err(invalid(field, path, "Path must be non-empty and free of null bytes"));
    }

    if let Some(expected) = extension {
        let actual = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str());
        if actual != Some(expected) {
            return Err(invalid(field, path, format!("Expected a .{} file", expected)));
        }
    }
    Ok(())
}

/// Listing counts (top N, related N) must ask for at least one listing.
pub fn validate_count(field: &str, count: usize) -> Result<()> {
    if count == 0 {
        return Err(invalid(field, count, "Count must be at least 1"));
    }
    Ok(())
}

pub fn validate_slug(field: &str, slug: &str) -> Result<()> {
    if slug.is_empty() || slug.contains(|c: char| c.is_whitespace() || c == '/') {
        return Err(invalid(field, slug, "Slug must be non-empty without spaces or '/'"));
    }
    Ok(())
}
