use crate::error::LoadError;
use std::path::Path;
use url::Url;

/// Resolves a caller-supplied map location (relative path, absolute path or URL)
/// against a base locator.
pub fn resolve_location(input: &str, base: &Url) -> Result<Url, LoadError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LoadError::InvalidLocation {
            location: input.to_string(),
            message: "location is empty".to_string(),
        });
    }

    if Path::new(trimmed).is_absolute() && base.scheme() == "file" {
        return Url::from_file_path(trimmed).map_err(|_| LoadError::InvalidLocation {
            location: trimmed.to_string(),
            message: "not a valid absolute file path".to_string(),
        });
    }

    base.join(trimmed).map_err(|e| LoadError::InvalidLocation {
        location: trimmed.to_string(),
        message: e.to_string(),
    })
}

/// A directory locator for the process's working directory.
pub fn current_dir_base() -> Result<Url, LoadError> {
    let cwd = std::env::current_dir().map_err(|e| LoadError::InvalidLocation {
        location: ".".to_string(),
        message: format!("could not read the working directory: {}", e),
    })?;
    directory_base(&cwd)
}

/// A directory locator for `dir`; the trailing slash makes relative joins land inside it.
pub fn directory_base(dir: &Path) -> Result<Url, LoadError> {
    Url::from_directory_path(dir).map_err(|_| LoadError::InvalidLocation {
        location: dir.display().to_string(),
        message: "directory path must be absolute".to_string(),
    })
}

/// Resolves a reference found inside a document against the document's own locator.
pub(crate) fn resolve_reference(reference: &str, document: &Url) -> Result<Url, url::ParseError> {
    document.join(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_location_joins_base_directory() {
        let base = Url::parse("https://proto.example/viewer/").unwrap();
        let url = resolve_location("maps/checkout.json", &base).unwrap();
        assert_eq!(url.as_str(), "https://proto.example/viewer/maps/checkout.json");
    }

    #[test]
    fn test_absolute_url_ignores_base() {
        let base = Url::parse("file:///srv/proto/").unwrap();
        let url = resolve_location("https://cdn.example/flow.json", &base).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example/flow.json");
    }

    #[test]
    fn test_blank_location_is_rejected() {
        let base = Url::parse("file:///srv/proto/").unwrap();
        assert!(matches!(
            resolve_location("   ", &base),
            Err(LoadError::InvalidLocation { .. })
        ));
    }

    #[test]
    fn test_reference_resolves_next_to_document() {
        let doc = Url::parse("file:///srv/proto/maps/flow.json").unwrap();
        let image = resolve_reference("../img/home.png", &doc).unwrap();
        assert_eq!(image.as_str(), "file:///srv/proto/img/home.png");
    }
}
