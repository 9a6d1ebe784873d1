use crate::commands::{load_and_activate, print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use clap::Args;
use optfilter_core::dto::describe_state;
use optfilter_core::{ControlHost, FilterSelection, ALL_BUTTON};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Page file: a JSON page document or one option label per line ("-" for stdin)
    pub input: PathBuf,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// Only print options left visible by the filter
    #[arg(long)]
    pub visible_only: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SelectionArgs {
    /// Show every option
    #[arg(long)]
    pub all: bool,
    /// Show options whose parenthesized label normalizes to this text
    #[arg(long, value_name = "TEXT")]
    pub group: Option<String>,
    /// Show options without a parenthesized label
    #[arg(long)]
    pub general: bool,
}

pub fn filter_options(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let Some((mut page, mut activation)) = load_and_activate(ctx, &args.input)? else {
        return Ok(());
    };
    let normalizer = &ctx.settings.normalizer;
    let bar = &mut activation.bar;

    let index = if let Some(text) = &args.selection.group {
        bar.position_for_text(normalizer, text)
            .ok_or_else(|| not_found(format!("filter group {:?}", text)))?
    } else if args.selection.general {
        bar.position(&FilterSelection::General)
            .ok_or_else(|| not_found("general filter: every option has a parenthesized label"))?
    } else {
        ALL_BUTTON
    };

    let control = page
        .find_control(&ctx.config.container)
        .ok_or_else(|| not_found(format!("control in {}", ctx.config.container)))?;
    if let Some(button) = bar.click(index, control, normalizer) {
        debug!(caption = %button.caption, "filter applied");
    }

    let mut state = describe_state(bar, &*control, normalizer);
    if args.visible_only {
        state.options.retain(|option| !option.hidden);
    }

    if ctx.json {
        return print_json(&state);
    }

    println!("filter: {}", state.active.caption);
    for option in &state.options {
        let marker = if option.hidden { '-' } else { '+' };
        println!("{} {:>3} {}", marker, option.index, option.label);
    }
    println!("selected: {}", state.selected_index);
    Ok(())
}
