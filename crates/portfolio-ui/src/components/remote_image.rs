//! Remote Image
//!
//! `img` element that swaps to its placeholder the first time the primary
//! URL fails to load.

use dioxus::prelude::*;
use portfolio_core::{FallbackImage, ImageAsset};

/// `img` showing the current source of `image`; load errors go to `onerror`
#[component]
pub fn ImageTag(
    image: FallbackImage,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
    onerror: EventHandler<()>,
) -> Element {
    rsx! {
        img {
            class: "{class}",
            src: image.current_src(),
            alt: "{alt}",
            onerror: move |_| onerror.call(()),
        }
    }
}

/// Image with a one-shot fallback
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RemoteImage {
///         src: "https://example.com/me.jpg",
///         fallback: "https://placehold.co/192x192",
///         alt: "Profile Picture",
///     }
/// }
/// ```
#[component]
pub fn RemoteImage(
    #[props(into)] src: String,
    #[props(into)] fallback: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut image = use_signal(|| FallbackImage::new(src, fallback));

    rsx! {
        ImageTag {
            image: image(),
            alt,
            class,
            onerror: move |_| {
                if !image.write().on_error() {
                    tracing::debug!("fallback image failed to load, keeping it");
                }
            },
        }
    }
}

/// [`RemoteImage`] for a static asset
#[component]
pub fn AssetImage(asset: ImageAsset, #[props(default, into)] class: String) -> Element {
    rsx! {
        RemoteImage {
            src: asset.src,
            fallback: asset.fallback,
            alt: asset.alt,
            class,
        }
    }
}
