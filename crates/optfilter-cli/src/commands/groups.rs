use crate::commands::{load_and_activate, print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use clap::Args;
use optfilter_core::dto::describe_bar;
use optfilter_core::FilterSelection;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GroupsArgs {
    /// Page file: a JSON page document or one option label per line ("-" for stdin)
    pub input: PathBuf,
}

pub fn list_groups(ctx: &Context<'_>, args: GroupsArgs) -> Result<()> {
    let Some((page, activation)) = load_and_activate(ctx, &args.input)? else {
        return Ok(());
    };
    let control = page
        .control(&ctx.config.container)
        .ok_or_else(|| not_found(format!("control in {}", ctx.config.container)))?;
    let summary = describe_bar(&activation.bar, control, &ctx.settings.normalizer);

    if ctx.json {
        return print_json(&summary);
    }

    for button in summary.buttons {
        match &button.selection {
            FilterSelection::Group(key) => {
                println!("{} [{}] ({})", button.caption, key, button.matches)
            }
            FilterSelection::All | FilterSelection::General => {
                println!("{} ({})", button.caption, button.matches)
            }
        }
    }
    Ok(())
}
