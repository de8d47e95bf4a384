//! Remote images with a one-shot fallback.
//!
//! Every image on the page declares a primary URL and a placeholder. When
//! the primary fails to load the element swaps to the placeholder exactly
//! once; a failing placeholder is left alone rather than looping.

/// Static description of an image reference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub src: &'static str,
    pub fallback: &'static str,
    pub alt: &'static str,
}

/// Which URL an image element is currently showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSource {
    #[default]
    Primary,
    Fallback,
}

/// Load state of a single image element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackImage {
    primary: String,
    fallback: String,
    source: ImageSource,
}

impl FallbackImage {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            source: ImageSource::Primary,
        }
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    /// URL the element should currently render
    pub fn current_src(&self) -> &str {
        match self.source {
            ImageSource::Primary => &self.primary,
            ImageSource::Fallback => &self.fallback,
        }
    }

    /// Handle a load-error event. Returns `true` if this error caused the
    /// swap to the fallback URL.
    pub fn on_error(&mut self) -> bool {
        match self.source {
            ImageSource::Primary => {
                self.source = ImageSource::Fallback;
                tracing::debug!(primary = %self.primary, fallback = %self.fallback, "image fell back");
                true
            }
            ImageSource::Fallback => false,
        }
    }
}

impl From<&ImageAsset> for FallbackImage {
    fn from(asset: &ImageAsset) -> Self {
        Self::new(asset.src, asset.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: ImageAsset = ImageAsset {
        src: "https://example.com/a.png",
        fallback: "https://placehold.co/1x1",
        alt: "a",
    };

    #[test]
    fn starts_on_primary() {
        let image = FallbackImage::from(&ASSET);
        assert_eq!(image.source(), ImageSource::Primary);
        assert_eq!(image.current_src(), ASSET.src);
    }

    #[test]
    fn error_swaps_exactly_once() {
        let mut image = FallbackImage::from(&ASSET);
        assert!(image.on_error());
        assert_eq!(image.current_src(), ASSET.fallback);

        // A broken placeholder must not bounce back to the primary
        assert!(!image.on_error());
        assert!(!image.on_error());
        assert_eq!(image.source(), ImageSource::Fallback);
        assert_eq!(image.current_src(), ASSET.fallback);
    }
}
