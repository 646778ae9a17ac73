//! Gallery and lightbox controller
//!
//! The state machine behind the site's image lightbox, independent of any
//! rendering layer. A gallery is a list of flagged thumbnails; activating
//! one loads its full-size source and alt text into the modal slot, and
//! closing the modal clears both so the reference is released.
//!
//! This is deliberately decoupled from the backend client bootstrap - the
//! gallery never touches it.

use serde::{Deserialize, Serialize};

/// Alt text used when an image carries none.
pub const DEFAULT_ALT: &str = "Gallery image";

/// A thumbnail flagged as a gallery entry.
///
/// `display_src` is the full-size source shown in the lightbox; when it is
/// missing (or empty), the thumbnail source doubles as the display source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Thumbnail source shown in the page flow.
    pub src: String,
    /// Full-size source for the lightbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_src: Option<String>,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl GalleryImage {
    /// Create a gallery image from its thumbnail source.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            display_src: None,
            alt: None,
        }
    }

    /// Set the full-size display source.
    #[must_use]
    pub fn with_display_src(mut self, display_src: impl Into<String>) -> Self {
        self.display_src = Some(display_src.into());
        self
    }

    /// Set the alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// The source the lightbox displays: the flagged full-size source, or
    /// the thumbnail source when none is present.
    #[must_use]
    pub fn display_source(&self) -> &str {
        match self.display_src.as_deref() {
            Some(src) if !src.is_empty() => src,
            _ => &self.src,
        }
    }

    /// The alt text the lightbox displays, defaulting when absent or empty.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => DEFAULT_ALT,
        }
    }
}

/// What the lightbox modal currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedImage {
    /// Full-size source loaded into the modal.
    pub src: String,
    /// Alt text loaded into the modal.
    pub alt: String,
}

/// The lightbox modal slot. Starts closed.
#[derive(Debug, Default)]
pub struct Lightbox {
    current: Option<DisplayedImage>,
}

impl Lightbox {
    /// Create a closed lightbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image into the modal and show it.
    pub fn open(&mut self, image: &GalleryImage) {
        self.current = Some(DisplayedImage {
            src: image.display_source().to_string(),
            alt: image.alt_text().to_string(),
        });
    }

    /// Hide the modal, clearing the source and alt.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Whether the modal is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The image currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&DisplayedImage> {
        self.current.as_ref()
    }
}

/// A gallery of flagged images plus the lightbox they share.
#[derive(Debug, Default)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    lightbox: Lightbox,
}

impl Gallery {
    /// Create a gallery over the given images.
    #[must_use]
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            lightbox: Lightbox::new(),
        }
    }

    /// The flagged images, in page order.
    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// The shared lightbox.
    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Activate the image at `index`, opening the lightbox. Returns false
    /// (and changes nothing) for an index outside the gallery.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.images.get(index) {
            Some(image) => {
                self.lightbox.open(image);
                true
            }
            None => false,
        }
    }

    /// Close the lightbox.
    pub fn close(&mut self) {
        self.lightbox.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_source_prefers_flagged_source() {
        let image = GalleryImage::new("thumb.jpg").with_display_src("full.jpg");
        assert_eq!(image.display_source(), "full.jpg");
    }

    #[test]
    fn test_display_source_falls_back_to_thumbnail() {
        let image = GalleryImage::new("thumb.jpg");
        assert_eq!(image.display_source(), "thumb.jpg");

        // An empty flag behaves like a missing one.
        let image = GalleryImage::new("thumb.jpg").with_display_src("");
        assert_eq!(image.display_source(), "thumb.jpg");
    }

    #[test]
    fn test_alt_text_defaults() {
        assert_eq!(GalleryImage::new("a.jpg").alt_text(), DEFAULT_ALT);
        assert_eq!(GalleryImage::new("a.jpg").with_alt("").alt_text(), DEFAULT_ALT);
        assert_eq!(
            GalleryImage::new("a.jpg").with_alt("Harbor at dusk").alt_text(),
            "Harbor at dusk"
        );
    }

    #[test]
    fn test_open_loads_source_and_alt() {
        let mut lightbox = Lightbox::new();
        let image = GalleryImage::new("thumb.jpg")
            .with_display_src("full.jpg")
            .with_alt("Harbor at dusk");

        lightbox.open(&image);

        let shown = lightbox.current().expect("modal open");
        assert_eq!(shown.src, "full.jpg");
        assert_eq!(shown.alt, "Harbor at dusk");
    }

    #[test]
    fn test_close_clears_the_modal() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&GalleryImage::new("thumb.jpg"));
        assert!(lightbox.is_open());

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn test_gallery_activation_bounds() {
        let mut gallery = Gallery::new(vec![
            GalleryImage::new("a.jpg"),
            GalleryImage::new("b.jpg").with_display_src("b-full.jpg"),
        ]);

        assert!(gallery.activate(1));
        assert_eq!(gallery.lightbox().current().unwrap().src, "b-full.jpg");

        assert!(!gallery.activate(7));
        // A bad index leaves the modal untouched.
        assert_eq!(gallery.lightbox().current().unwrap().src, "b-full.jpg");

        gallery.close();
        assert!(!gallery.lightbox().is_open());
    }

    #[test]
    fn test_image_wire_shape() {
        let image: GalleryImage =
            serde_json::from_str(r#"{"src":"thumb.jpg","display_src":"full.jpg"}"#).unwrap();
        assert_eq!(image.display_source(), "full.jpg");
        assert_eq!(image.alt, None);
    }
}
