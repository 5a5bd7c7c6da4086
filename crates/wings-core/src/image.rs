//! # Product Images
//!
//! A product's `imagePath` is either a full URL (externally hosted image) or a
//! path on the service's asset host (an upload). This module decides which,
//! in one place.

/// Uploaded assets live under this prefix on the asset host.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Where a product image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// A complete URL, used as-is.
    Absolute(&'a str),
    /// A path relative to the asset host.
    ServiceRelative(&'a str),
    /// No image recorded.
    Missing,
}

impl<'a> ImageSource<'a> {
    /// Classifies a stored image path.
    ///
    /// ```rust
    /// use wings_core::image::ImageSource;
    ///
    /// assert_eq!(
    ///     ImageSource::classify(Some("https://cdn.example/tea.png")),
    ///     ImageSource::Absolute("https://cdn.example/tea.png")
    /// );
    /// assert_eq!(
    ///     ImageSource::classify(Some("/uploads/tea.png")),
    ///     ImageSource::ServiceRelative("/uploads/tea.png")
    /// );
    /// assert_eq!(ImageSource::classify(Some("")), ImageSource::Missing);
    /// ```
    pub fn classify(image_path: Option<&'a str>) -> Self {
        match image_path {
            None | Some("") => ImageSource::Missing,
            Some(path) if path.starts_with("http") => ImageSource::Absolute(path),
            Some(path) => ImageSource::ServiceRelative(path),
        }
    }

    /// Returns the URL to display, or `None` when there is no image.
    pub fn resolve(&self, asset_base: &str) -> Option<String> {
        match self {
            ImageSource::Absolute(url) => Some((*url).to_string()),
            ImageSource::ServiceRelative(path) => Some(join_asset(asset_base, path)),
            ImageSource::Missing => None,
        }
    }
}

fn join_asset(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Value to prefill into the product form's image URL field.
///
/// Uploaded assets come back empty so an update without a new image does not
/// resend the upload path as an external URL.
pub fn editable_image_url(image_path: Option<&str>) -> String {
    match image_path {
        Some(path) if !path.starts_with(UPLOADS_PREFIX) => path.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSETS: &str = "http://localhost:3001";

    #[test]
    fn test_resolve_relative_prefixes_asset_host() {
        let source = ImageSource::classify(Some("/uploads/tea.png"));
        assert_eq!(
            source.resolve(ASSETS).as_deref(),
            Some("http://localhost:3001/uploads/tea.png")
        );
        assert_eq!(
            source.resolve("http://assets.local/").as_deref(),
            Some("http://assets.local/uploads/tea.png")
        );
    }

    #[test]
    fn test_resolve_relative_without_leading_slash() {
        let source = ImageSource::classify(Some("img/tea.png"));
        assert_eq!(
            source.resolve(ASSETS).as_deref(),
            Some("http://localhost:3001/img/tea.png")
        );
    }

    #[test]
    fn test_resolve_absolute_and_missing() {
        let source = ImageSource::classify(Some("http://cdn.example/a.jpg"));
        assert_eq!(source.resolve(ASSETS).as_deref(), Some("http://cdn.example/a.jpg"));
        assert_eq!(ImageSource::classify(None).resolve(ASSETS), None);
    }

    #[test]
    fn test_editable_image_url() {
        assert_eq!(editable_image_url(Some("/uploads/x.png")), "");
        assert_eq!(editable_image_url(Some("https://cdn.example/x.png")), "https://cdn.example/x.png");
        assert_eq!(editable_image_url(None), "");
    }
}
