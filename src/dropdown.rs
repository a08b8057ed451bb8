//! The dropdown component: a pressable field plus a modal selection sheet.

use std::fmt;
use std::rc::Rc;

use nami::signal::IntoComputed;
use nami::{Computed, Signal as _, SignalExt as _};
use waterui::component::{button, scroll, spacer};
use waterui::layout::padding::EdgeInsets;
use waterui::layout::stack::{VStack, hstack, vstack};
use waterui::text::Text;
use waterui::widget::condition::when;
use waterui::{AnyView, Color, Environment, Str, View, ViewExt};

use crate::item::{DropdownItem, row_label, selected_label};
use crate::state::{ChangeHandler, CloseHandler, DropdownState};
use crate::style::{DropdownStyles, RegionStyle, base, black, red};

/// A hook that wraps one of the dropdown's sub-views with caller-supplied
/// decoration.
///
/// Extensions are the escape hatch for behavior the component does not
/// model: they run after the component's own styling, so whatever they
/// attach takes precedence.
pub type Extension = Rc<dyn Fn(AnyView) -> AnyView>;

/// A pressable field that opens a modal list for single-value selection.
///
/// The closed field shows the label of the first item whose value equals
/// the externally supplied selection key, or a placeholder when nothing
/// matches. Pressing the field opens a sheet listing every item; pressing a
/// row reports the selection through [`on_change`](Self::on_change) and
/// closes the sheet. The sheet also closes on a tap outside it (unless
/// disallowed) and on a host-level dismiss, and every close path reports
/// through [`on_close`](Self::on_close).
///
/// The component never writes the selection key itself; the embedding
/// application owns it and typically updates it from the change callback.
///
/// # Example
///
/// ```ignore
/// use nami::binding;
/// use waterui::Str;
/// use waterui_dropdown::{DropdownItem, dropdown};
///
/// let selection = binding(Str::from(""));
///
/// dropdown(
///     vec![
///         DropdownItem::new("Small", "s"),
///         DropdownItem::new("Large", "l"),
///     ],
///     selection.clone(),
/// )
/// .label("Size")
/// .title("Pick a size")
/// .with_line(true)
/// .on_change(move |item, _| selection.set(item.value.clone()))
/// ```
#[must_use]
pub struct Dropdown {
    items: Computed<Vec<DropdownItem>>,
    value: Computed<Str>,
    label: Option<Str>,
    placeholder: Str,
    title: Str,
    can_touch_outside: bool,
    disabled: bool,
    error: bool,
    with_line: bool,
    height: f32,
    width: Option<f32>,
    spacing: f32,
    corner_radius: f32,
    elevation: f32,
    modal_radius: f32,
    modal_elevation: f32,
    overlay_opacity: f32,
    indicator: Option<AnyView>,
    styles: DropdownStyles,
    field_extension: Option<Extension>,
    modal_extension: Option<Extension>,
    list_extension: Option<Extension>,
    item_extension: Option<Extension>,
    on_change: ChangeHandler,
    on_close: CloseHandler,
}

impl Dropdown {
    /// Creates a dropdown over the given items, displaying the selection
    /// identified by `value`.
    ///
    /// Both inputs are reactive: a plain `Vec` and `Str` work, and so do
    /// bindings owned by the caller.
    pub fn new(
        items: impl IntoComputed<Vec<DropdownItem>>,
        value: impl IntoComputed<Str>,
    ) -> Self {
        Self {
            items: items.into_computed(),
            value: value.into_computed(),
            label: None,
            placeholder: Str::from("Press to select"),
            title: Str::from("Picker"),
            can_touch_outside: true,
            disabled: false,
            error: false,
            with_line: false,
            height: 50.0,
            width: None,
            spacing: 0.0,
            corner_radius: 5.0,
            elevation: 2.0,
            modal_radius: 10.0,
            modal_elevation: 10.0,
            overlay_opacity: 0.0,
            indicator: None,
            styles: DropdownStyles::default(),
            field_extension: None,
            modal_extension: None,
            list_extension: None,
            item_extension: None,
            on_change: Rc::new(|_, _| {}),
            on_close: Rc::new(|| {}),
        }
    }

    /// Replaces the item list.
    pub fn items(mut self, items: impl IntoComputed<Vec<DropdownItem>>) -> Self {
        self.items = items.into_computed();
        self
    }

    /// Replaces the selection key.
    pub fn value(mut self, value: impl IntoComputed<Str>) -> Self {
        self.value = value.into_computed();
        self
    }

    /// Sets the floating label shown above the selection text once the
    /// field has been touched.
    pub fn label(mut self, label: impl Into<Str>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the text shown while no item matches the selection key.
    ///
    /// Defaults to "Press to select".
    pub fn placeholder(mut self, placeholder: impl Into<Str>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the sheet title. Defaults to "Picker".
    pub fn title(mut self, title: impl Into<Str>) -> Self {
        self.title = title.into();
        self
    }

    /// Controls whether tapping the overlay outside the sheet closes it.
    /// Defaults to `true`.
    pub const fn can_touch_outside(mut self, can_touch_outside: bool) -> Self {
        self.can_touch_outside = can_touch_outside;
        self
    }

    /// Disables selection dispatch.
    ///
    /// A disabled dropdown still opens and closes, and still reports
    /// closes; only `on_change` is suppressed. The asymmetry is
    /// deliberate and matches the component's established behavior.
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Switches the underline accent to the error color.
    pub const fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Renders an accent underline beneath the field and a heavier divider
    /// under the sheet title.
    pub const fn with_line(mut self, with_line: bool) -> Self {
        self.with_line = with_line;
        self
    }

    /// Sets the field height in points. Defaults to 50.
    pub const fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Fixes the field width in points. Sized naturally by default.
    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the bottom margin beneath the field in points. Defaults to 0.
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the field corner radius in points. Defaults to 5.
    pub const fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the field shadow depth in points. Defaults to 2.
    pub const fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets the sheet corner radius in points. Defaults to 10.
    pub const fn modal_radius(mut self, radius: f32) -> Self {
        self.modal_radius = radius;
        self
    }

    /// Sets the sheet shadow depth in points. Defaults to 10.
    pub const fn modal_elevation(mut self, elevation: f32) -> Self {
        self.modal_elevation = elevation;
        self
    }

    /// Sets the opacity of the dimmed overlay behind the sheet, from 0.0
    /// (invisible, the default) to 1.0.
    pub const fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    /// Replaces the default caret indicator with a custom view, for
    /// example an image loaded by the embedding application.
    pub fn indicator(mut self, indicator: impl View) -> Self {
        self.indicator = Some(AnyView::new(indicator));
        self
    }

    /// Sets the per-region style overrides. Each region's override is
    /// merged over the component's base style, caller keys winning.
    pub fn styles(mut self, styles: DropdownStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Wraps the pressable field with caller-supplied decoration.
    pub fn field_extension(mut self, extension: impl Fn(AnyView) -> AnyView + 'static) -> Self {
        self.field_extension = Some(Rc::new(extension));
        self
    }

    /// Wraps the whole modal presentation with caller-supplied decoration.
    pub fn modal_extension(mut self, extension: impl Fn(AnyView) -> AnyView + 'static) -> Self {
        self.modal_extension = Some(Rc::new(extension));
        self
    }

    /// Wraps the item list with caller-supplied decoration.
    pub fn list_extension(mut self, extension: impl Fn(AnyView) -> AnyView + 'static) -> Self {
        self.list_extension = Some(Rc::new(extension));
        self
    }

    /// Wraps every list row with caller-supplied decoration.
    pub fn item_extension(mut self, extension: impl Fn(AnyView) -> AnyView + 'static) -> Self {
        self.item_extension = Some(Rc::new(extension));
        self
    }

    /// Sets the handler invoked with the pressed item and its index when a
    /// row is pressed and the dropdown is not disabled.
    pub fn on_change(mut self, handler: impl Fn(&DropdownItem, usize) + 'static) -> Self {
        self.on_change = Rc::new(handler);
        self
    }

    /// Sets the handler invoked whenever the sheet closes, whether by
    /// selection, outside tap, or host dismiss. Fires even when disabled.
    pub fn on_close(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_close = Rc::new(handler);
        self
    }

    fn field_base(&self) -> RegionStyle {
        let mut style = base::field()
            .height(self.height)
            .corner_radius(self.corner_radius)
            .elevation(self.elevation);
        if let Some(width) = self.width {
            style = style.width(width);
        }
        style
    }
}

impl Default for Dropdown {
    /// A dropdown over the single "None" placeholder item, with no
    /// selection. Use [`items`](Self::items) and [`value`](Self::value) to
    /// fill it in.
    fn default() -> Self {
        Self::new(vec![DropdownItem::none()], Str::from(""))
    }
}

impl View for Dropdown {
    fn body(self, _env: &Environment) -> impl View {
        let state = DropdownState::new(
            self.disabled,
            self.can_touch_outside,
            self.on_change.clone(),
            self.on_close.clone(),
        );
        let touched = state.touched_binding();
        let visible = state.visible_binding();

        let field_style = self.styles.field.merged_over(&self.field_base());
        let field_text_style = self.styles.field_text.merged_over(&base::field_text());
        let label_style = self.styles.label.merged_over(&base::label());
        let indicator_style = self.styles.indicator.merged_over(&base::indicator());
        let underline_style = self.styles.underline.merged_over(
            &base::underline().background(if self.error { red() } else { black(0.2) }),
        );
        let item_text_style = self.styles.item_text.merged_over(&base::item_text());
        let list_style = self.styles.list.merged_over(&base::list());
        let separator_style = self.styles.separator.merged_over(&base::separator());
        let title_style = self.styles.title.merged_over(&base::title());
        let title_divider_style = self
            .styles
            .title_divider
            .merged_over(&base::title_divider(self.with_line));
        let sheet_style = self.styles.sheet.merged_over(
            &base::sheet()
                .corner_radius(self.modal_radius)
                .elevation(self.modal_elevation),
        );
        let overlay_style = self
            .styles
            .overlay
            .merged_over(&base::overlay().background(black(self.overlay_opacity)));

        // Selection text: first-match label, else the placeholder. Reacts
        // to both the selection key and the item list.
        let display = {
            let placeholder = self.placeholder.clone();
            self.value
                .clone()
                .zip(self.items.clone())
                .map(move |(value, items)| {
                    selected_label(&items, &value).unwrap_or_else(|| placeholder.clone())
                })
        };
        let mut selection_text = AnyView::new(field_text_style.apply_text(Text::display(display)));
        if field_text_style.foreground.is_none() {
            // An untouched field renders its text faded.
            selection_text =
                AnyView::new(selection_text.foreground(
                    touched
                        .clone()
                        .map(|touched| if touched { black(0.8) } else { black(0.4) }),
                ));
        }
        let selection_text = field_text_style.decorate(selection_text);

        let indicator = self.indicator.unwrap_or_else(|| {
            AnyView::new(Text::display(
                visible.clone().select(Str::from("▲"), Str::from("▼")),
            ))
        });
        let indicator = indicator_style.decorate(indicator);

        let floating_label: AnyView = match self.label {
            Some(label) => {
                let label_style = label_style.clone();
                AnyView::new(when(touched.clone(), move || {
                    label_style.text_view(Text::display(Computed::constant(label.clone())))
                }))
            }
            None => AnyView::default(),
        };

        let underline: AnyView = if self.with_line {
            bar(&underline_style, black(0.2), 5.0)
        } else {
            AnyView::default()
        };

        let field = button(vstack((
            floating_label,
            hstack((selection_text, spacer(), indicator)),
            underline,
        )))
        .action({
            let state = state.clone();
            move || state.press()
        });
        let mut field = field_style.decorate(field);
        if self.spacing > 0.0 {
            field = AnyView::new(field.padding_with(EdgeInsets::new(0.0, self.spacing, 0.0, 0.0)));
        }
        if let Some(extension) = self.field_extension.as_ref() {
            field = extension(field);
        }

        // The sheet mounts only while open, and never for an empty list.
        let open = visible
            .clone()
            .zip(self.items.clone())
            .map(|(visible, items)| sheet_open(visible, &items))
            .computed();

        let sheet = {
            let items = self.items;
            let state = state.clone();
            let title = self.title;
            let item_extension = self.item_extension;
            let list_extension = self.list_extension;
            let modal_extension = self.modal_extension;
            move || {
                let mut rows: Vec<AnyView> = Vec::new();
                for (index, item) in items.get().into_iter().enumerate() {
                    if index > 0 {
                        rows.push(bar(&separator_style, black(0.2), 0.5));
                    }
                    let row_text = item_text_style
                        .text_view(Text::display(Computed::constant(row_label(&item, index))));
                    let mut row = AnyView::new(button(row_text).action({
                        let state = state.clone();
                        move || state.select(&item, index)
                    }));
                    if let Some(extension) = item_extension.as_ref() {
                        row = extension(row);
                    }
                    rows.push(row);
                }

                let mut list = list_style.decorate(VStack::from_iter(rows));
                if let Some(extension) = list_extension.as_ref() {
                    list = extension(list);
                }

                let title_view =
                    title_style.text_view(Text::display(Computed::constant(title.clone())));
                let title_divider = bar(&title_divider_style, black(0.2), 1.0);
                let surface = sheet_style.decorate(vstack((title_view, title_divider, scroll(list))));

                // Everything above the sheet dismisses on tap, when allowed.
                let catcher = Color::transparent().on_tap({
                    let state = state.clone();
                    move || state.tap_outside()
                });

                let mut panel = overlay_style.decorate(vstack((AnyView::new(catcher), surface)));
                if let Some(extension) = modal_extension.as_ref() {
                    panel = extension(panel);
                }

                // A host-driven teardown while still open counts as a
                // dismiss; the flag check in `dismiss` keeps the ordinary
                // close paths from firing twice.
                AnyView::new(panel.on_disappear({
                    let state = state.clone();
                    move || state.dismiss()
                }))
            }
        };

        AnyView::new(field.overlay(when(open, sheet)))
    }
}

/// Whether the sheet may mount: it requires both an open state and a
/// non-empty item list.
fn sheet_open(visible: bool, items: &[DropdownItem]) -> bool {
    visible && !items.is_empty()
}

/// A thin horizontal color bar, used for the underline, the row separators,
/// and the title divider. The style's background becomes the bar color; the
/// remaining keys decorate it.
fn bar(style: &RegionStyle, fallback_color: Color, fallback_height: f32) -> AnyView {
    let color = style.background.clone().unwrap_or(fallback_color);
    bar_style(style, fallback_height).decorate(color)
}

/// The decoration applied around a bar: the source style minus its
/// background (which paints the bar itself), with the height defaulted.
fn bar_style(style: &RegionStyle, fallback_height: f32) -> RegionStyle {
    let mut style = style.clone();
    style.background = None;
    if style.height.is_none() {
        style.height = Some(fallback_height);
    }
    style
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("items", &self.items)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("title", &self.title)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// Creates a new [`Dropdown`] over the given items and selection key.
pub fn dropdown(
    items: impl IntoComputed<Vec<DropdownItem>>,
    value: impl IntoComputed<Str>,
) -> Dropdown {
    Dropdown::new(items, value)
}

#[cfg(test)]
mod tests {
    use nami::Signal as _;
    use waterui::Environment;

    use super::*;

    fn items() -> Vec<DropdownItem> {
        vec![
            DropdownItem::new("A", "a"),
            DropdownItem::new("B", "b"),
        ]
    }

    #[test]
    fn builds_with_defaults() {
        let view = dropdown(items(), Str::from("b"));
        let _ = view.body(&Environment::new());
    }

    #[test]
    fn default_lists_the_placeholder_item() {
        let view = Dropdown::default();
        assert_eq!(view.items.get(), vec![DropdownItem::none()]);
        assert_eq!(view.value.get(), Str::from(""));
        let _ = view.body(&Environment::new());
    }

    #[test]
    fn sheet_never_mounts_for_empty_items() {
        assert!(!sheet_open(true, &[]));
        assert!(!sheet_open(false, &[]));
        assert!(!sheet_open(false, &items()));
        assert!(sheet_open(true, &items()));
    }

    #[test]
    fn open_signal_stays_false_with_empty_items() {
        let visible = nami::binding(false);
        let open = visible
            .clone()
            .zip(Computed::constant(Vec::<DropdownItem>::new()))
            .map(|(visible, items)| sheet_open(visible, &items))
            .computed();

        visible.set(true);
        assert!(!open.get());
    }

    #[test]
    fn bar_keeps_every_decoration_key() {
        let style = RegionStyle::new()
            .padding(EdgeInsets::all(2.0))
            .width(120.0)
            .background(black(1.0));

        let normalized = bar_style(&style, 0.5);
        assert_eq!(normalized.padding, Some(EdgeInsets::all(2.0)));
        assert_eq!(normalized.width, Some(120.0));
        assert_eq!(normalized.height, Some(0.5));
        // The background paints the bar itself, not a layer behind it.
        assert!(normalized.background.is_none());

        let explicit = bar_style(&RegionStyle::new().height(3.0), 0.5);
        assert_eq!(explicit.height, Some(3.0));
    }

    #[test]
    fn builds_with_every_knob_set() {
        let view = dropdown(items(), Str::from("z"))
            .label("Letter")
            .placeholder("Choose one")
            .title("Letters")
            .can_touch_outside(false)
            .disabled(true)
            .error(true)
            .with_line(true)
            .height(44.0)
            .width(200.0)
            .spacing(8.0)
            .corner_radius(4.0)
            .elevation(1.0)
            .modal_radius(12.0)
            .modal_elevation(6.0)
            .overlay_opacity(0.4)
            .indicator(Text::default())
            .styles(DropdownStyles::default())
            .field_extension(|view| view)
            .modal_extension(|view| view)
            .list_extension(|view| view)
            .item_extension(|view| view)
            .on_change(|_, _| {})
            .on_close(|| {});
        let _ = view.body(&Environment::new());
    }
}
