use anyhow::Result;
use optfilter_config::AppConfig;
use optfilter_core::{activate_in, Activation, CoreError, FilterSettings, Page};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::input::load_page;

pub mod completions;
pub mod filter;
pub mod groups;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub settings: FilterSettings,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Loads the page and activates the control in the configured container.
/// A missing control is logged and yields `None`; the caller does nothing.
pub fn load_and_activate(ctx: &Context<'_>, input: &Path) -> Result<Option<(Page, Activation)>> {
    let mut page = load_page(input, &ctx.config.container)?;
    match activate_in(&mut page, &ctx.config.container, &ctx.settings) {
        Ok(activation) => {
            debug!(
                groups = activation.groups.len(),
                general = activation.groups.has_general(),
                "options grouped"
            );
            Ok(Some((page, activation)))
        }
        Err(CoreError::ControlNotFound(container)) => {
            warn!(container = %container, "select control not found; filters not installed");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
