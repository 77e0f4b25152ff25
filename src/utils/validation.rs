use crate::utils::error::{FormsError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> FormsError {
    FormsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Base URL of the admin site. Endpoint paths are joined onto it, so it must
/// be an absolute http(s) URL without a query string or fragment.
pub fn validate_admin_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }

    if url.host_str().is_none() {
        return Err(invalid(field_name, url_str, "URL has no host"));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "Admin endpoints are appended to this URL; drop the query string and fragment",
        ));
    }

    Ok(())
}

/// A registrations export to read: a non-empty path that is not a directory.
pub fn validate_export_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(invalid(field_name, path.display(), "Path cannot be empty"));
    }

    if path.is_dir() {
        return Err(invalid(
            field_name,
            path.display(),
            "Expected a CSV export file, found a directory",
        ));
    }

    Ok(())
}

pub fn validate_timeout_seconds(field_name: &str, seconds: u64) -> Result<()> {
    const MAX_SECONDS: u64 = 300;
    if seconds == 0 || seconds > MAX_SECONDS {
        return Err(invalid(
            field_name,
            seconds,
            format!("Timeout must be between 1 and {} seconds", MAX_SECONDS),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FormsError::MissingConfigError {
        field: field_name.to_string(),
    })
}
