use std::path::{Path, PathBuf};

use tracing::warn;

/// Text shown in place of the logo when the image is missing or unreadable.
pub const LOGO_PLACEHOLDER: &str = "Logo not found";

/// What to draw where the logo goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    Image(PathBuf),
    Placeholder(&'static str),
}

impl LogoSource {
    /// Uses the image at `path` if it exists, otherwise the text placeholder.
    /// A missing logo is logged and never treated as an error. Decoding
    /// happens at render time, so an existing file can still end up as
    /// [`Self::fallback_text`].
    pub fn resolve(path: &Path) -> Self {
        if path.is_file() {
            Self::Image(path.to_path_buf())
        } else {
            warn!(path = %path.display(), "logo image not found; using placeholder");
            Self::Placeholder(LOGO_PLACEHOLDER)
        }
    }

    /// Text drawn when this logo cannot be shown as an image.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::Image(_) => LOGO_PLACEHOLDER,
            Self::Placeholder(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn undecodable_file_keeps_the_placeholder_as_fallback() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/not-a-logo.png");

        let logo = LogoSource::resolve(&path);

        assert_eq!(logo, LogoSource::Image(path));
        assert_eq!(logo.fallback_text(), LOGO_PLACEHOLDER);
    }

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-logo.png");

        let logo = LogoSource::resolve(&path);

        assert_eq!(logo, LogoSource::Placeholder("Logo not found"));
        assert_eq!(logo.fallback_text(), "Logo not found");
    }

    #[test]
    fn directory_is_not_a_logo() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"));

        assert_eq!(
            LogoSource::resolve(path),
            LogoSource::Placeholder(LOGO_PLACEHOLDER)
        );
    }
}
