//! Per-region styling: base styles, caller overrides, and their merge.
//!
//! Every visual region of the dropdown (the field, its text, the sheet, the
//! list rows, and so on) is styled by composing a base [`RegionStyle`] with
//! an optional caller override. The merge is key-wise and shallow: a key
//! set by the caller wins, an unset key falls through to the base.

use waterui::layout::padding::EdgeInsets;
use waterui::style::Shadow;
use waterui::text::Text;
use waterui::{AnyView, Color, View, ViewExt};
use waterui_core::metadata::MetadataKey;

/// Corner radius metadata for a view, in points.
///
/// Rounded corners have no dedicated primitive in the toolkit yet, so the
/// radius travels as metadata for backends that support it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadius(pub f32);

impl MetadataKey for CornerRadius {}

/// A record of optional presentation keys for one visual region.
///
/// All keys are optional; an unset key means "inherit from the base style
/// of the region" when used as an override, or "no opinion" when used as a
/// base.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RegionStyle {
    /// Text or tint color.
    pub foreground: Option<Color>,
    /// Fill color behind the region.
    pub background: Option<Color>,
    /// Font size in points, for text regions.
    pub font_size: Option<f32>,
    /// Bold text, for text regions.
    pub bold: Option<bool>,
    /// Insets around the region's content.
    pub padding: Option<EdgeInsets>,
    /// Corner radius in points.
    pub corner_radius: Option<f32>,
    /// Shadow depth in points.
    pub elevation: Option<f32>,
    /// Fixed width in points.
    pub width: Option<f32>,
    /// Fixed height in points.
    pub height: Option<f32>,
}

impl RegionStyle {
    /// An empty style with every key unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text or tint color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the fill color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the font size in points.
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets whether text renders bold.
    pub const fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Sets the content insets.
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Sets the corner radius in points.
    pub const fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Sets the shadow depth in points.
    pub const fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Sets a fixed width in points.
    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets a fixed height in points.
    pub const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Merges this style over `base`: keys set here win, unset keys fall
    /// through to the base.
    #[must_use]
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            foreground: self.foreground.clone().or_else(|| base.foreground.clone()),
            background: self.background.clone().or_else(|| base.background.clone()),
            font_size: self.font_size.or(base.font_size),
            bold: self.bold.or(base.bold),
            padding: self.padding.clone().or_else(|| base.padding.clone()),
            corner_radius: self.corner_radius.or(base.corner_radius),
            elevation: self.elevation.or(base.elevation),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
        }
    }

    /// Applies the text-only keys of this style to a [`Text`].
    pub(crate) fn apply_text(&self, text: Text) -> Text {
        let mut text = text;
        if let Some(size) = self.font_size {
            text = text.size(f64::from(size));
        }
        if self.bold == Some(true) {
            text = text.bold();
        }
        text
    }

    /// Applies this style to a text region: text keys on the [`Text`]
    /// itself, container keys around it.
    pub(crate) fn text_view(&self, text: Text) -> AnyView {
        self.decorate(self.apply_text(text))
    }

    /// Wraps a view with the container keys of this style: padding, colors,
    /// corner radius, elevation, and frame.
    pub(crate) fn decorate(&self, view: impl View) -> AnyView {
        let mut view = AnyView::new(view);
        if let Some(padding) = self.padding.clone() {
            view = AnyView::new(view.padding_with(padding));
        }
        if let Some(color) = self.foreground.clone() {
            view = AnyView::new(view.foreground(color));
        }
        if let Some(color) = self.background.clone() {
            view = AnyView::new(view.background(color));
        }
        if let Some(radius) = self.corner_radius {
            view = AnyView::new(view.metadata(CornerRadius(radius)));
        }
        if let Some(elevation) = self.elevation {
            view = AnyView::new(view.metadata(Shadow::from(elevation)));
        }
        view = match (self.width, self.height) {
            (Some(width), Some(height)) => AnyView::new(view.size(width, height)),
            (Some(width), None) => AnyView::new(view.width(width)),
            (None, Some(height)) => AnyView::new(view.height(height)),
            (None, None) => view,
        };
        view
    }
}

/// One override slot per visual region of the dropdown.
///
/// Each slot is merged over the component's base style for that region,
/// caller keys winning on conflict.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DropdownStyles {
    /// The pressable field container.
    pub field: RegionStyle,
    /// The selection text inside the field.
    pub field_text: RegionStyle,
    /// The floating label shown once the field has been touched.
    pub label: RegionStyle,
    /// The open/closed indicator at the trailing edge of the field.
    pub indicator: RegionStyle,
    /// The accent underline rendered when `with_line` is set.
    pub underline: RegionStyle,
    /// The text of each list row.
    pub item_text: RegionStyle,
    /// The scrollable list container inside the sheet.
    pub list: RegionStyle,
    /// The hairline between list rows.
    pub separator: RegionStyle,
    /// The sheet title.
    pub title: RegionStyle,
    /// The divider beneath the sheet title.
    pub title_divider: RegionStyle,
    /// The modal sheet surface.
    pub sheet: RegionStyle,
    /// The dimmed overlay behind the sheet.
    pub overlay: RegionStyle,
}

/// Translucent black, the workhorse of the default palette.
pub(crate) fn black(opacity: f32) -> Color {
    Color::srgb(0, 0, 0).with_opacity(opacity)
}

pub(crate) fn white() -> Color {
    Color::srgb(255, 255, 255)
}

pub(crate) fn red() -> Color {
    Color::srgb(255, 0, 0)
}

/// Base styles per region. Knob-driven keys (field height, corner radii,
/// elevations, overlay opacity) are filled in by the dropdown itself.
pub(crate) mod base {
    use super::{EdgeInsets, RegionStyle, black, white};

    pub(crate) fn field() -> RegionStyle {
        RegionStyle::new().background(white())
    }

    pub(crate) fn field_text() -> RegionStyle {
        // Foreground is intentionally unset: it tracks the touched flag
        // reactively unless the caller overrides it.
        RegionStyle::new()
            .font_size(14.0)
            .padding(EdgeInsets::symmetric(0.0, 15.0))
    }

    pub(crate) fn label() -> RegionStyle {
        RegionStyle::new()
            .font_size(14.0)
            .foreground(black(1.0))
            .padding(EdgeInsets::symmetric(3.0, 10.0))
    }

    pub(crate) fn indicator() -> RegionStyle {
        RegionStyle::new().padding(EdgeInsets::new(0.0, 0.0, 0.0, 10.0))
    }

    pub(crate) fn underline() -> RegionStyle {
        RegionStyle::new().height(5.0)
    }

    pub(crate) fn item_text() -> RegionStyle {
        RegionStyle::new()
            .foreground(black(0.6))
            .padding(EdgeInsets::symmetric(15.0, 10.0))
    }

    pub(crate) fn list() -> RegionStyle {
        RegionStyle::new().padding(EdgeInsets::new(0.0, 59.0, 20.0, 20.0))
    }

    pub(crate) fn separator() -> RegionStyle {
        RegionStyle::new().background(black(0.2)).height(0.5)
    }

    pub(crate) fn title() -> RegionStyle {
        RegionStyle::new()
            .font_size(16.0)
            .bold(true)
            .foreground(black(0.8))
            .padding(EdgeInsets::symmetric(15.0, 10.0))
    }

    pub(crate) fn title_divider(with_line: bool) -> RegionStyle {
        if with_line {
            RegionStyle::new().background(black(1.0)).height(5.0)
        } else {
            RegionStyle::new().background(black(0.2)).height(1.0)
        }
    }

    pub(crate) fn sheet() -> RegionStyle {
        RegionStyle::new().background(white())
    }

    pub(crate) fn overlay() -> RegionStyle {
        RegionStyle::new().padding(EdgeInsets::new(10.0, 0.0, 10.0, 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_key_wins() {
        let base = RegionStyle::new().font_size(14.0).height(50.0);
        let caller = RegionStyle::new().font_size(18.0);

        let merged = caller.merged_over(&base);
        assert_eq!(merged.font_size, Some(18.0));
        assert_eq!(merged.height, Some(50.0));
    }

    #[test]
    fn unset_keys_fall_through() {
        let base = base::title();
        let merged = RegionStyle::new().merged_over(&base);

        assert_eq!(merged.font_size, Some(16.0));
        assert_eq!(merged.bold, Some(true));
        assert!(merged.background.is_none());
    }

    #[test]
    fn title_divider_base_tracks_accent() {
        assert_eq!(base::title_divider(true).height, Some(5.0));
        assert_eq!(base::title_divider(false).height, Some(1.0));

        let merged = RegionStyle::new()
            .height(2.0)
            .merged_over(&base::title_divider(false));
        assert_eq!(merged.height, Some(2.0));
        assert!(merged.background.is_some());
    }

    #[test]
    fn empty_base_keeps_override_untouched() {
        let caller = RegionStyle::new()
            .height(0.5)
            .padding(EdgeInsets::all(4.0));
        let merged = caller.merged_over(&RegionStyle::new());

        assert_eq!(merged.height, Some(0.5));
        assert_eq!(merged.padding, Some(EdgeInsets::all(4.0)));
        assert!(merged.width.is_none());
    }
}
