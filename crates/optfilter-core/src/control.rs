use serde::Deserialize;

/// Index of the "no selection" entry every control starts with.
pub const PLACEHOLDER_INDEX: usize = 0;

/// A select-like control: an ordered list of labelled options, each of which
/// can be hidden, plus the index of the current selection.
pub trait SelectControl {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn label(&self, index: usize) -> Option<&str>;

    fn is_hidden(&self, index: usize) -> bool;

    fn set_hidden(&mut self, index: usize, hidden: bool);

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);
}

/// Something that can hand out the control living inside a named container.
pub trait ControlHost {
    type Control: SelectControl;

    fn find_control(&mut self, container: &str) -> Option<&mut Self::Control>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub hidden: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hidden: false,
        }
    }
}

/// In-memory control. Deserializes from a plain list of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct OptionList {
    options: Vec<SelectOption>,
    selected: usize,
}

impl OptionList {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: labels.into_iter().map(SelectOption::new).collect(),
            selected: PLACEHOLDER_INDEX,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn visible(&self) -> impl Iterator<Item = (usize, &SelectOption)> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| !option.hidden)
    }
}

impl From<Vec<String>> for OptionList {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl SelectControl for OptionList {
    fn len(&self) -> usize {
        self.options.len()
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(|option| option.label.as_str())
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|option| option.hidden)
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(option) = self.options.get_mut(index) {
            option.hidden = hidden;
        }
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        if index < self.options.len() || index == PLACEHOLDER_INDEX {
            self.selected = index;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageControl {
    pub container: String,
    pub options: OptionList,
}

/// In-memory document holding controls keyed by their container name.
///
/// JSON shape: `{"controls": [{"container": "data_table", "options": ["..."]}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    controls: Vec<PageControl>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, container: impl Into<String>, options: OptionList) -> Self {
        self.controls.push(PageControl {
            container: container.into(),
            options,
        });
        self
    }

    /// One control built from a text listing, one label per line. Blank lines
    /// are skipped; the first remaining line is the placeholder.
    pub fn from_lines(container: impl Into<String>, text: &str) -> Self {
        let labels = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string);
        Self::new().with_control(container, OptionList::from_labels(labels))
    }

    pub fn controls(&self) -> &[PageControl] {
        &self.controls
    }

    /// First control inside `container`; later ones are ignored.
    pub fn control(&self, container: &str) -> Option<&OptionList> {
        self.controls
            .iter()
            .find(|control| control.container == container)
            .map(|control| &control.options)
    }
}

impl ControlHost for Page {
    type Control = OptionList;

    fn find_control(&mut self, container: &str) -> Option<&mut OptionList> {
        self.controls
            .iter_mut()
            .find(|control| control.container == container)
            .map(|control| &mut control.options)
    }
}
