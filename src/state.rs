//! Transient dropdown state and the transitions driven by user input.

use std::fmt;
use std::rc::Rc;

use nami::{Binding, binding};

use crate::item::DropdownItem;

/// Handler invoked when a list item is pressed while the dropdown is not
/// disabled. Receives the pressed item and its index in the item list.
pub type ChangeHandler = Rc<dyn Fn(&DropdownItem, usize)>;

/// Handler invoked whenever the sheet is dismissed, by selection, outside
/// tap, or a host-level dismiss. Fires even when the dropdown is disabled.
pub type CloseHandler = Rc<dyn Fn()>;

/// The two flags of per-instance dropdown state and the transition rules
/// that mutate them.
///
/// A `DropdownState` is created by [`Dropdown`](crate::Dropdown) when its
/// body is built, so the flags reset on remount and are never shared
/// between instances. All transitions are synchronous reactions to press
/// events delivered by the host toolkit.
///
/// Two states exist: closed (`visible == false`) and open. The touched flag
/// tracks whether the user has interacted with the field at all; it only
/// reverts to `false` when an item with an empty value is picked.
#[derive(Clone)]
pub struct DropdownState {
    touched: Binding<bool>,
    visible: Binding<bool>,
    disabled: bool,
    can_touch_outside: bool,
    on_change: ChangeHandler,
    on_close: CloseHandler,
}

impl DropdownState {
    /// Creates a closed, untouched state with the given behavior flags and
    /// callbacks.
    #[must_use]
    pub fn new(
        disabled: bool,
        can_touch_outside: bool,
        on_change: ChangeHandler,
        on_close: CloseHandler,
    ) -> Self {
        Self {
            touched: binding(false),
            visible: binding(false),
            disabled,
            can_touch_outside,
            on_change,
            on_close,
        }
    }

    /// Handles a press on the closed field: marks the field touched and
    /// opens the sheet. Disabled dropdowns still open; only `on_change`
    /// dispatch is suppressed.
    pub fn press(&self) {
        if !self.touched.get() {
            self.touched.set(true);
        }
        if !self.visible.get() {
            self.visible.set(true);
        }
    }

    /// Handles a press on a list row.
    ///
    /// The sheet always closes and `on_close` always fires, even when the
    /// dropdown is disabled; `on_change` fires only when it is not. Picking
    /// an item with an empty value clears the touched flag.
    pub fn select(&self, item: &DropdownItem, index: usize) {
        self.touched.set(item.has_value());
        self.visible.set(false);
        if !self.disabled {
            (self.on_change)(item, index);
        }
        (self.on_close)();
    }

    /// Handles a tap on the overlay outside the sheet. Closes only when
    /// outside taps are allowed.
    pub fn tap_outside(&self) {
        if self.can_touch_outside {
            self.dismiss();
        }
    }

    /// Dismisses the sheet, firing `on_close` exactly once per open/close
    /// cycle. A dismiss while already closed is a no-op, which lets the
    /// host request a close (back navigation, sheet teardown) without
    /// double-firing after a selection already closed the sheet.
    pub fn dismiss(&self) {
        if !self.visible.get() {
            return;
        }
        self.visible.set(false);
        (self.on_close)();
    }

    /// Whether the sheet is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible.get()
    }

    /// Whether the field has been touched.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched.get()
    }

    pub(crate) fn touched_binding(&self) -> Binding<bool> {
        self.touched.clone()
    }

    pub(crate) fn visible_binding(&self) -> Binding<bool> {
        self.visible.clone()
    }
}

impl fmt::Debug for DropdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownState")
            .field("touched", &self.touched)
            .field("visible", &self.visible)
            .field("disabled", &self.disabled)
            .field("can_touch_outside", &self.can_touch_outside)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::item::DropdownItem;

    struct Recorder {
        changes: Rc<RefCell<Vec<(DropdownItem, usize)>>>,
        closes: Rc<RefCell<usize>>,
    }

    fn state_with_recorder(disabled: bool, can_touch_outside: bool) -> (DropdownState, Recorder) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let closes = Rc::new(RefCell::new(0));

        let state = DropdownState::new(
            disabled,
            can_touch_outside,
            Rc::new({
                let changes = Rc::clone(&changes);
                move |item: &DropdownItem, index| {
                    changes.borrow_mut().push((item.clone(), index));
                }
            }),
            Rc::new({
                let closes = Rc::clone(&closes);
                move || *closes.borrow_mut() += 1
            }),
        );

        (state, Recorder { changes, closes })
    }

    #[test]
    fn press_opens_and_touches() {
        let (state, _) = state_with_recorder(false, true);
        assert!(!state.is_open());
        assert!(!state.is_touched());

        state.press();
        assert!(state.is_open());
        assert!(state.is_touched());

        // Pressing again while open changes nothing.
        state.press();
        assert!(state.is_open());
    }

    #[test]
    fn select_closes_and_fires_both_callbacks() {
        let (state, recorder) = state_with_recorder(false, true);
        state.press();

        let item = DropdownItem::new("A", "a");
        state.select(&item, 0);

        assert!(!state.is_open());
        assert_eq!(&*recorder.changes.borrow(), &[(item, 0)]);
        assert_eq!(*recorder.closes.borrow(), 1);
        assert!(state.is_touched());
    }

    #[test]
    fn disabled_suppresses_change_but_not_close() {
        let (state, recorder) = state_with_recorder(true, true);
        state.press();
        state.select(&DropdownItem::new("A", "a"), 0);

        assert!(!state.is_open());
        assert!(recorder.changes.borrow().is_empty());
        assert_eq!(*recorder.closes.borrow(), 1);
    }

    #[test]
    fn empty_value_resets_touched() {
        let (state, _) = state_with_recorder(false, true);
        state.press();
        assert!(state.is_touched());

        state.select(&DropdownItem::none(), 0);
        assert!(!state.is_touched());

        state.press();
        state.select(&DropdownItem::new("A", "a"), 1);
        assert!(state.is_touched());
    }

    #[test]
    fn outside_tap_respects_flag() {
        let (state, recorder) = state_with_recorder(false, false);
        state.press();

        state.tap_outside();
        assert!(state.is_open());
        assert_eq!(*recorder.closes.borrow(), 0);

        let (state, recorder) = state_with_recorder(false, true);
        state.press();
        state.tap_outside();
        assert!(!state.is_open());
        assert_eq!(*recorder.closes.borrow(), 1);
    }

    #[test]
    fn dismiss_fires_close_once_per_cycle() {
        let (state, recorder) = state_with_recorder(false, true);

        // Dismissing a closed dropdown does nothing.
        state.dismiss();
        assert_eq!(*recorder.closes.borrow(), 0);

        state.press();
        state.dismiss();
        state.dismiss();
        assert_eq!(*recorder.closes.borrow(), 1);

        // A fresh cycle fires again.
        state.press();
        state.dismiss();
        assert_eq!(*recorder.closes.borrow(), 2);
    }

    #[test]
    fn dismiss_after_selection_does_not_double_fire() {
        let (state, recorder) = state_with_recorder(false, true);
        state.press();
        state.select(&DropdownItem::new("A", "a"), 0);

        // The host tearing the sheet down afterwards must not fire again.
        state.dismiss();
        assert_eq!(*recorder.closes.borrow(), 1);
    }
}
