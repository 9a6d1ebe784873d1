pub mod activate;
pub mod control;
pub mod dto;
pub mod error;
pub mod extract;
pub mod filter;
pub mod group;
pub mod normalize;

pub use activate::{activate, activate_in, Activation, FilterSettings};
pub use control::{
    ControlHost, OptionList, Page, PageControl, SelectControl, SelectOption, PLACEHOLDER_INDEX,
};
pub use error::CoreError;
pub use extract::find_parenthetical;
pub use filter::{apply_filter, Captions, FilterBar, FilterButton, FilterSelection, ALL_BUTTON};
pub use group::OptionGroups;
pub use normalize::{normalize_label, FilterKey, NormalizeRules, Normalizer};
