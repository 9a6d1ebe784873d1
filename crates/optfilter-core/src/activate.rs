use crate::control::{ControlHost, SelectControl};
use crate::error::CoreError;
use crate::filter::{Captions, FilterBar, ALL_BUTTON};
use crate::group::OptionGroups;
use crate::normalize::Normalizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSettings {
    pub normalizer: Normalizer,
    pub captions: Captions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub groups: OptionGroups,
    pub bar: FilterBar,
}

/// Groups the control's options, builds the filter bar and shows everything
/// with the "all" button active.
pub fn activate<C: SelectControl + ?Sized>(
    control: &mut C,
    settings: &FilterSettings,
) -> Activation {
    let groups = OptionGroups::from_control(&settings.normalizer, &*control);
    let mut bar = FilterBar::build(&groups, &settings.captions);
    bar.click(ALL_BUTTON, control, &settings.normalizer);
    Activation { groups, bar }
}

/// Locates the control inside `container` and activates it. Nothing on the
/// host is touched when the control is missing.
pub fn activate_in<H: ControlHost + ?Sized>(
    host: &mut H,
    container: &str,
    settings: &FilterSettings,
) -> Result<Activation, CoreError> {
    let control = host
        .find_control(container)
        .ok_or_else(|| CoreError::ControlNotFound(container.to_string()))?;
    Ok(activate(control, settings))
}

#[cfg(test)]
mod tests {
    use super::{activate, activate_in, FilterSettings};
    use crate::control::{ControlHost, OptionList, Page, SelectControl};
    use crate::error::CoreError;
    use crate::filter::FilterSelection;
    use crate::normalize::normalize_label;

    #[test]
    fn end_to_end_scenario() {
        let settings = FilterSettings::default();
        let mut page = Page::new().with_control(
            "data_table",
            OptionList::from_labels([
                "-- اختر --",
                "قسم الرياضيات (رياضيات)",
                "العلوم (رياضيات)",
                "نشاط عام",
            ]),
        );

        let mut activation = activate_in(&mut page, "data_table", &settings).expect("activate");
        let key = normalize_label("رياضيات");
        let keys: Vec<_> = activation.groups.keys().cloned().collect();
        assert_eq!(keys, vec![key.clone()]);
        assert!(activation.groups.has_general());
        assert_eq!(activation.bar.len(), 3);

        let index = activation
            .bar
            .position(&FilterSelection::Group(key))
            .expect("group button");
        let control = page.find_control("data_table").expect("control");
        activation.bar.click(index, control, &settings.normalizer);

        let hidden: Vec<bool> = (0..control.len()).map(|i| control.is_hidden(i)).collect();
        assert_eq!(hidden, vec![false, false, false, true]);
        assert_eq!(control.selected_index(), 0);
    }

    #[test]
    fn activation_shows_everything() {
        let settings = FilterSettings::default();
        let mut list = OptionList::from_labels(["--", "a (x)", "b"]);
        list.set_hidden(1, true);
        list.set_selected_index(2);
        let activation = activate(&mut list, &settings);
        assert_eq!(activation.bar.active(), 0);
        assert!((0..list.len()).all(|i| !list.is_hidden(i)));
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn missing_control_is_reported_without_side_effects() {
        let settings = FilterSettings::default();
        let mut list = OptionList::from_labels(["--", "a (x)"]);
        list.set_hidden(1, true);
        let mut page = Page::new().with_control("sidebar", list.clone());

        let err = activate_in(&mut page, "data_table", &settings).unwrap_err();
        assert_eq!(err, CoreError::ControlNotFound("data_table".to_string()));
        assert_eq!(page.control("sidebar"), Some(&list));
    }

    #[test]
    fn placeholder_only_control_has_just_the_all_button() {
        let settings = FilterSettings::default();
        let mut list = OptionList::from_labels(["--"]);
        let activation = activate(&mut list, &settings);
        assert_eq!(activation.bar.len(), 1);
        assert!(activation.groups.is_empty());
        assert!(!activation.groups.has_general());
    }
}
