use serde::Serialize;

use crate::control::{SelectControl, PLACEHOLDER_INDEX};
use crate::filter::{FilterBar, FilterSelection};
use crate::normalize::Normalizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonDto {
    pub caption: String,
    pub selection: FilterSelection,
    pub matches: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDto {
    pub index: usize,
    pub label: String,
    pub key: Option<String>,
    pub placeholder: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBarDto {
    pub buttons: Vec<ButtonDto>,
    pub has_general: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterStateDto {
    pub active: ButtonDto,
    pub selected_index: usize,
    pub options: Vec<OptionDto>,
}

pub fn describe_options<C: SelectControl + ?Sized>(
    control: &C,
    normalizer: &Normalizer,
) -> Vec<OptionDto> {
    (0..control.len())
        .map(|index| {
            let label = control.label(index).unwrap_or_default();
            let key = if index == PLACEHOLDER_INDEX {
                None
            } else {
                normalizer.extract_key(label).map(|key| key.into_string())
            };
            OptionDto {
                index,
                label: label.to_string(),
                key,
                placeholder: index == PLACEHOLDER_INDEX,
                hidden: control.is_hidden(index),
            }
        })
        .collect()
}

/// Buttons with the number of non-placeholder options each one would show.
pub fn describe_bar<C: SelectControl + ?Sized>(
    bar: &FilterBar,
    control: &C,
    normalizer: &Normalizer,
) -> FilterBarDto {
    let keys: Vec<_> = (PLACEHOLDER_INDEX + 1..control.len())
        .map(|index| {
            control
                .label(index)
                .and_then(|label| normalizer.extract_key(label))
        })
        .collect();

    let buttons = bar
        .buttons()
        .iter()
        .enumerate()
        .map(|(index, button)| ButtonDto {
            caption: button.caption.clone(),
            selection: button.selection.clone(),
            matches: keys
                .iter()
                .filter(|key| button.selection.admits(Option::as_ref(key)))
                .count(),
            active: index == bar.active(),
        })
        .collect::<Vec<_>>();

    let has_general = bar.position(&FilterSelection::General).is_some();
    FilterBarDto {
        buttons,
        has_general,
    }
}

pub fn describe_state<C: SelectControl + ?Sized>(
    bar: &FilterBar,
    control: &C,
    normalizer: &Normalizer,
) -> FilterStateDto {
    let mut summary = describe_bar(bar, control, normalizer);
    let active = summary.buttons.swap_remove(bar.active());
    FilterStateDto {
        active,
        selected_index: control.selected_index(),
        options: describe_options(control, normalizer),
    }
}
