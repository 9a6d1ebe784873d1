use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Treat each text as a full option label and normalize its parenthesized span
    #[arg(long)]
    pub extract: bool,
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedDto {
    input: String,
    key: Option<String>,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let normalizer = &ctx.settings.normalizer;
    let items: Vec<NormalizedDto> = args
        .texts
        .into_iter()
        .map(|input| {
            let key = if args.extract {
                normalizer.extract_key(&input)
            } else {
                Some(normalizer.normalize(&input))
            };
            NormalizedDto {
                input,
                key: key.map(|key| key.into_string()),
            }
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        match item.key {
            Some(key) => println!("{}", key),
            None => println!("(none)"),
        }
    }
    Ok(())
}
