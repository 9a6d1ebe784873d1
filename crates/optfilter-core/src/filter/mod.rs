mod bar;
mod selection;

pub use bar::{
    Captions, FilterBar, FilterButton, ALL_BUTTON, DEFAULT_ALL_CAPTION, DEFAULT_GENERAL_CAPTION,
};
pub use selection::{apply_filter, FilterSelection};
