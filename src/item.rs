//! Items displayed by the dropdown and selection resolution over them.

use waterui::Str;

/// A single selectable entry in a [`Dropdown`](crate::Dropdown).
///
/// An item pairs a display label with a selection value. The value is the
/// selection key: the dropdown compares it against the externally supplied
/// current value to decide which item is selected. Values are not required
/// to be unique; the first match in list order wins.
///
/// A missing or empty label degrades gracefully: the list row falls back
/// to the stringified row index, and a selected item without a usable
/// label leaves the field showing its placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropdownItem {
    /// The text shown for this item, if any.
    pub label: Option<Str>,
    /// The selection key for this item. An empty value counts as "no
    /// selection" and resets the touched flag when picked.
    pub value: Str,
}

impl DropdownItem {
    /// Creates an item with the given label and value.
    pub fn new(label: impl Into<Str>, value: impl Into<Str>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    /// Creates an item without a label.
    ///
    /// Its row displays the stringified row index instead.
    pub fn unlabeled(value: impl Into<Str>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    /// The conventional placeholder item: labeled "None" with an empty
    /// value. Picking it clears the touched state of the field.
    #[must_use]
    pub fn none() -> Self {
        Self::new("None", "")
    }

    /// Returns `true` when this item carries a non-empty selection value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

nami::impl_constant!(DropdownItem);

impl Default for DropdownItem {
    fn default() -> Self {
        Self::none()
    }
}

impl<L: Into<Str>, V: Into<Str>> From<(L, V)> for DropdownItem {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}

/// Resolves the label displayed in the closed field for the current value.
///
/// Performs a linear scan and returns the label of the first item whose
/// value equals `value`. Returns `None` when no item matches, or when the
/// matching item's label is absent or empty; the field shows its
/// placeholder in all three cases.
#[must_use]
pub fn selected_label(items: &[DropdownItem], value: &Str) -> Option<Str> {
    items
        .iter()
        .find(|item| item.value == *value)
        .and_then(|item| item.label.clone())
        .filter(|label| !label.is_empty())
}

/// The text shown for a list row: the item's label, or the stringified row
/// index when the label is absent or empty.
#[must_use]
pub fn row_label(item: &DropdownItem, index: usize) -> Str {
    match &item.label {
        Some(label) if !label.is_empty() => label.clone(),
        _ => Str::from(index.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<DropdownItem> {
        vec![
            DropdownItem::new("A", "a"),
            DropdownItem::new("B", "b"),
        ]
    }

    #[test]
    fn resolves_label_of_matching_item() {
        let items = fruit();
        assert_eq!(
            selected_label(&items, &Str::from("b")),
            Some(Str::from("B"))
        );
    }

    #[test]
    fn unknown_value_resolves_to_none() {
        let items = fruit();
        assert_eq!(selected_label(&items, &Str::from("z")), None);
    }

    #[test]
    fn empty_list_resolves_to_none() {
        assert_eq!(selected_label(&[], &Str::from("a")), None);
    }

    #[test]
    fn first_match_wins_for_duplicate_values() {
        let items = vec![
            DropdownItem::new("First", "dup"),
            DropdownItem::new("Second", "dup"),
        ];
        assert_eq!(
            selected_label(&items, &Str::from("dup")),
            Some(Str::from("First"))
        );
    }

    #[test]
    fn matching_item_without_label_resolves_to_none() {
        let items = vec![DropdownItem::unlabeled("a")];
        assert_eq!(selected_label(&items, &Str::from("a")), None);
    }

    #[test]
    fn empty_label_counts_as_missing() {
        let items = vec![DropdownItem::new("", "a")];
        assert_eq!(selected_label(&items, &Str::from("a")), None);
        assert_eq!(row_label(&items[0], 3), Str::from("3"));
    }

    #[test]
    fn row_label_falls_back_to_index() {
        let items = vec![
            DropdownItem::new("A", "a"),
            DropdownItem::unlabeled("b"),
            DropdownItem::new("C", "c"),
        ];
        assert_eq!(row_label(&items[0], 0), Str::from("A"));
        assert_eq!(row_label(&items[1], 1), Str::from("1"));
        assert_eq!(row_label(&items[2], 2), Str::from("C"));
    }

    #[test]
    fn default_item_is_the_empty_placeholder() {
        let item = DropdownItem::default();
        assert_eq!(item.label, Some(Str::from("None")));
        assert!(!item.has_value());
    }
}
