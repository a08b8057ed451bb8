//! A modal dropdown selector for `WaterUI`.
//!
//! This crate provides a single widget, [`Dropdown`]: a pressable field that
//! opens a modal sheet containing a selectable list of items. Layout, touch
//! handling, scrolling and presentation are all delegated to the `WaterUI`
//! toolkit; the component itself only composes views, owns two pieces of
//! transient state (whether the field has been touched, and whether the
//! sheet is open), merges per-region styles, and dispatches selection and
//! close callbacks.
//!
//! # Example
//!
//! ```ignore
//! use nami::binding;
//! use waterui::Str;
//! use waterui_dropdown::{DropdownItem, dropdown};
//!
//! let selection = binding(Str::from(""));
//!
//! dropdown(
//!     vec![
//!         DropdownItem::new("Apple", "apple"),
//!         DropdownItem::new("Banana", "banana"),
//!     ],
//!     selection.clone(),
//! )
//! .title("Fruit")
//! .placeholder("Pick a fruit")
//! .on_change(move |item, _index| selection.set(item.value.clone()))
//! ```
//!
//! The selection key is owned by the caller: the component displays the
//! label of the first item whose value matches the supplied key and reports
//! presses through [`Dropdown::on_change`], but never writes the key itself.

pub mod dropdown;
pub mod item;
pub mod state;
pub mod style;

pub use dropdown::{Dropdown, Extension, dropdown};
pub use item::{DropdownItem, row_label, selected_label};
pub use state::{ChangeHandler, CloseHandler, DropdownState};
pub use style::{CornerRadius, DropdownStyles, RegionStyle};
