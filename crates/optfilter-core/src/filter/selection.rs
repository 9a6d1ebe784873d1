use serde::Serialize;

use crate::control::{SelectControl, PLACEHOLDER_INDEX};
use crate::normalize::{FilterKey, Normalizer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum FilterSelection {
    All,
    Group(FilterKey),
    General,
}

impl FilterSelection {
    /// Whether a non-placeholder option with grouping key `key` stays visible.
    pub fn admits(&self, key: Option<&FilterKey>) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Group(group) => key == Some(group),
            FilterSelection::General => key.is_none(),
        }
    }
}

/// Shows the options admitted by `selection`, hides the rest and resets the
/// current selection to the placeholder. The placeholder is always visible.
/// Returns the number of visible options, placeholder included.
pub fn apply_filter<C: SelectControl + ?Sized>(
    control: &mut C,
    normalizer: &Normalizer,
    selection: &FilterSelection,
) -> usize {
    let mut visible_count = 0;
    for index in 0..control.len() {
        let visible = index == PLACEHOLDER_INDEX
            || control
                .label(index)
                .is_some_and(|label| selection.admits(normalizer.extract_key(label).as_ref()));
        control.set_hidden(index, !visible);
        if visible {
            visible_count += 1;
        }
    }
    control.set_selected_index(PLACEHOLDER_INDEX);
    visible_count
}
