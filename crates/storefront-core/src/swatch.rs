//! Color-swatch selection for a product card.
//!
//! A product card shows one primary image plus a row of color swatches.
//! Hovering a swatch previews that color's image, clicking it commits the
//! selection, and hovering the card itself (anywhere, not just a swatch)
//! swaps to the "secondary" shot of whatever color is showing. The
//! secondary shot is linked to its primary purely by alt-text convention:
//! `<primary-alt>-secondary`.

use crate::products::{ProductImage, ProductVariant};
use crate::CoreError;

/// One swatch entry, derived from a variant that declares a `Color` option.
///
/// Derived, never persisted: recomputed whenever the product data changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    /// The color value, e.g. `"Red"`.
    pub value: String,
    /// URL of the variant's image.
    pub image_url: String,
    /// Alt text of the variant's image, used for the secondary lookup.
    pub alt_text: String,
}

/// Extracts the ordered swatch row from a product's variant list.
///
/// One entry per variant whose selected options include one named `"Color"`
/// and that carries an image; variants lacking either are skipped, not an
/// error. Order follows the variant list and repeated color values are kept
/// as-is — deduplication is the store's responsibility.
#[must_use]
pub fn color_options(variants: &[ProductVariant]) -> Vec<ColorOption> {
    variants
        .iter()
        .filter_map(|variant| {
            let value = variant.option_value("Color")?;
            let image = variant.image.as_ref()?;
            Some(ColorOption {
                value: value.to_string(),
                image_url: image.url.clone(),
                alt_text: image.alt_text.clone(),
            })
        })
        .collect()
}

/// Resolves the secondary shot for the image with alt text `alt_text`.
///
/// Linear scan for an image whose alt text is exactly
/// `{alt_text}-secondary`; falls back to `fallback` (the currently selected
/// primary URL) when no match exists, so the result is never empty. Image
/// lists are capped at 20 by the homepage query, so no index is kept.
#[must_use]
pub fn secondary_image(images: &[ProductImage], alt_text: &str, fallback: &str) -> String {
    let wanted = format!("{alt_text}-secondary");
    images
        .iter()
        .find(|image| image.alt_text == wanted)
        .map_or_else(|| fallback.to_string(), |image| image.url.clone())
}

/// Immutable selection state for one product card.
///
/// Each transition returns a replacement state; there is no partial field
/// mutation. Every transition that changes the selected image/alt goes
/// through one internal selection step that recomputes the secondary image
/// in the same step, so `selected_alt_text` and `secondary_image` cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchState {
    /// URL of the committed-or-previewed primary image.
    pub selected_image: String,
    pub selected_alt_text: String,
    /// URL of the secondary shot for the current selection; equals
    /// `selected_image` when no `-secondary` match exists.
    pub secondary_image: String,
    /// The color committed by a click (or the first swatch at init);
    /// `None` when the product has no color swatches.
    pub selected_color: Option<String>,
    /// The color currently previewed by a swatch hover, if any.
    pub hovered_color: Option<String>,
    /// Whether the pointer is over the product card itself.
    pub is_hovered: bool,
}

impl SwatchState {
    /// Builds the initial state for a product card.
    ///
    /// The primary image is the product's first image and the selected color
    /// is the first swatch, if any — "first" meaning index 0 of the given
    /// ordering, nothing else. The secondary image is resolved immediately
    /// so a card hover before any swatch interaction still shows one of the
    /// product's own images.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingImages`] when `images` is empty. A
    /// product with no images cannot render a card at all; callers decide
    /// whether to skip the product or substitute a placeholder.
    pub fn new(
        handle: &str,
        images: &[ProductImage],
        colors: &[ColorOption],
    ) -> Result<Self, CoreError> {
        let first = images.first().ok_or_else(|| CoreError::MissingImages {
            handle: handle.to_string(),
        })?;

        let state = Self {
            selected_image: String::new(),
            selected_alt_text: String::new(),
            secondary_image: String::new(),
            selected_color: colors.first().map(|c| c.value.clone()),
            hovered_color: None,
            is_hovered: false,
        };
        Ok(state.with_selection(&first.url, &first.alt_text, images))
    }

    /// Previews a swatch: shows the option's image without committing it.
    /// `selected_color` is untouched, so [`SwatchState::hover_leave`] can
    /// restore the committed selection.
    #[must_use]
    pub fn hover_enter(&self, option: &ColorOption, images: &[ProductImage]) -> Self {
        let mut next = self.with_selection(&option.image_url, &option.alt_text, images);
        next.hovered_color = Some(option.value.clone());
        next
    }

    /// Ends a swatch preview.
    ///
    /// Restores the committed color's image and alt (first swatch whose
    /// value matches `selected_color`) and clears `hovered_color`. With no
    /// committed color the image stays as-is and only the hover flag clears.
    /// Calling this twice in a row is the same as calling it once.
    #[must_use]
    pub fn hover_leave(&self, colors: &[ColorOption], images: &[ProductImage]) -> Self {
        let committed = self
            .selected_color
            .as_deref()
            .and_then(|value| colors.iter().find(|c| c.value == value));

        let mut next = match committed {
            Some(option) => self.with_selection(&option.image_url, &option.alt_text, images),
            None => self.clone(),
        };
        next.hovered_color = None;
        next
    }

    /// Commits a swatch: the option becomes the selected color and image.
    #[must_use]
    pub fn click(&self, option: &ColorOption, images: &[ProductImage]) -> Self {
        let mut next = self.with_selection(&option.image_url, &option.alt_text, images);
        next.selected_color = Some(option.value.clone());
        next
    }

    /// Pointer entered the product card; the rendered image flips to the
    /// secondary shot. Does not change the selection.
    #[must_use]
    pub fn card_enter(&self) -> Self {
        let mut next = self.clone();
        next.is_hovered = true;
        next
    }

    /// Pointer left the product card; the rendered image flips back to the
    /// selected primary.
    #[must_use]
    pub fn card_leave(&self) -> Self {
        let mut next = self.clone();
        next.is_hovered = false;
        next
    }

    /// The image URL the card actually renders: the secondary shot while
    /// the card is hovered, the selected primary otherwise.
    #[must_use]
    pub fn displayed_image(&self) -> &str {
        if self.is_hovered {
            &self.secondary_image
        } else {
            &self.selected_image
        }
    }

    /// Replaces the selected image/alt pair and recomputes the secondary
    /// image from the new alt text in the same step. Every transition that
    /// touches the selection funnels through here.
    fn with_selection(&self, url: &str, alt_text: &str, images: &[ProductImage]) -> Self {
        let mut next = self.clone();
        next.selected_image = url.to_string();
        next.selected_alt_text = alt_text.to_string();
        next.secondary_image = secondary_image(images, alt_text, url);
        next
    }
}
