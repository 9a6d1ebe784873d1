use serde::Serialize;

use crate::control::SelectControl;
use crate::filter::selection::{apply_filter, FilterSelection};
use crate::group::OptionGroups;
use crate::normalize::Normalizer;

pub const DEFAULT_ALL_CAPTION: &str = "كل الخيارات";
pub const DEFAULT_GENERAL_CAPTION: &str = "عام";

/// The "show all" button always comes first.
pub const ALL_BUTTON: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    pub all: String,
    pub general: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            all: DEFAULT_ALL_CAPTION.to_string(),
            general: DEFAULT_GENERAL_CAPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub caption: String,
    pub selection: FilterSelection,
}

/// Ordered filter buttons and the one that is currently active.
///
/// Layout: "all", then one button per group in key order, then "general"
/// when some option has no parenthesized span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    active: usize,
}

impl FilterBar {
    pub fn build(groups: &OptionGroups, captions: &Captions) -> Self {
        let mut buttons = Vec::with_capacity(groups.len() + 2);
        buttons.push(FilterButton {
            caption: captions.all.clone(),
            selection: FilterSelection::All,
        });
        for (key, display) in groups.iter() {
            buttons.push(FilterButton {
                caption: display.to_string(),
                selection: FilterSelection::Group(key.clone()),
            });
        }
        if groups.has_general() {
            buttons.push(FilterButton {
                caption: captions.general.clone(),
                selection: FilterSelection::General,
            });
        }
        Self {
            buttons,
            active: ALL_BUTTON,
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_button(&self) -> &FilterButton {
        &self.buttons[self.active]
    }

    pub fn position(&self, selection: &FilterSelection) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| &button.selection == selection)
    }

    /// Button for free text typed by a user: its normalized form must equal a
    /// group key.
    pub fn position_for_text(&self, normalizer: &Normalizer, text: &str) -> Option<usize> {
        self.position(&FilterSelection::Group(normalizer.normalize(text)))
    }

    /// Applies the button's filter to `control` and makes it the active one.
    /// Out-of-range indexes leave everything untouched.
    pub fn click<C: SelectControl + ?Sized>(
        &mut self,
        index: usize,
        control: &mut C,
        normalizer: &Normalizer,
    ) -> Option<&FilterButton> {
        let button = self.buttons.get(index)?;
        apply_filter(control, normalizer, &button.selection);
        self.active = index;
        Some(&self.buttons[index])
    }
}

#[cfg(test)]
mod tests {
    use super::{Captions, FilterBar, ALL_BUTTON};
    use crate::control::{OptionList, SelectControl};
    use crate::filter::FilterSelection;
    use crate::group::OptionGroups;
    use crate::normalize::{normalize_label, Normalizer};

    fn bar_for(list: &OptionList) -> FilterBar {
        let groups = OptionGroups::from_control(&Normalizer::default(), list);
        FilterBar::build(&groups, &Captions::default())
    }

    #[test]
    fn layout_is_all_groups_general() {
        let list = OptionList::from_labels(["--", "x (ب)", "y (أ)", "z"]);
        let bar = bar_for(&list);
        let captions: Vec<&str> = bar
            .buttons()
            .iter()
            .map(|button| button.caption.as_str())
            .collect();
        assert_eq!(captions, vec!["كل الخيارات", "أ", "ب", "عام"]);
        assert_eq!(bar.active(), ALL_BUTTON);
    }

    #[test]
    fn general_button_only_when_needed() {
        let list = OptionList::from_labels(["--", "x (a)"]);
        let bar = bar_for(&list);
        assert_eq!(bar.len(), 2);
        assert_eq!(bar.position(&FilterSelection::General), None);
    }

    #[test]
    fn click_replaces_active_button() {
        let normalizer = Normalizer::default();
        let mut list = OptionList::from_labels(["--", "x (a)", "y"]);
        let mut bar = bar_for(&list);

        let clicked = bar.click(1, &mut list, &normalizer).expect("button");
        assert_eq!(clicked.selection, FilterSelection::Group(normalize_label("a")));
        assert_eq!(bar.active(), 1);
        assert!(list.is_hidden(2));

        bar.click(2, &mut list, &normalizer);
        assert_eq!(bar.active(), 2);
        assert!(list.is_hidden(1));
        assert!(!list.is_hidden(2));
    }

    #[test]
    fn click_out_of_range_is_ignored() {
        let normalizer = Normalizer::default();
        let mut list = OptionList::from_labels(["--", "x (a)"]);
        let mut bar = bar_for(&list);
        list.set_selected_index(1);
        assert!(bar.click(7, &mut list, &normalizer).is_none());
        assert_eq!(bar.active(), ALL_BUTTON);
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn position_for_text_normalizes_input() {
        let normalizer = Normalizer::default();
        let list = OptionList::from_labels(["--", "x (الرياضيات والعلوم)"]);
        let bar = bar_for(&list);
        assert_eq!(
            bar.position_for_text(&normalizer, "  قسم الرياضيات   و العلوم"),
            Some(1)
        );
        assert_eq!(bar.position_for_text(&normalizer, "أدب"), None);
    }
}
