//! Providers command - list supported indexers

use anyhow::Result;
use serde::Serialize;

use algoscrape_core::{PageErrorPolicy, Provider};

use super::get_context;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderInfo {
    name: &'static str,
    base_url: String,
    default_url: &'static str,
    on_page_error: PageErrorPolicy,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let infos: Vec<ProviderInfo> = Provider::ALL
        .iter()
        .map(|&provider| {
            let settings = ctx.config.provider(provider);
            ProviderInfo {
                name: provider.name(),
                base_url: settings.endpoint.base_url().to_string(),
                default_url: provider.base_url(),
                on_page_error: settings.page_error_policy,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Provider", "Base URL", "On page error"]);
    for info in &infos {
        let url = if info.base_url == info.default_url {
            info.base_url.clone()
        } else {
            format!("{} (override)", info.base_url)
        };
        let policy = match info.on_page_error {
            PageErrorPolicy::DiscardAll => "discard all",
            PageErrorPolicy::KeepPartial => "keep partial",
        };
        table.add_row(vec![info.name.to_string(), url, policy.to_string()]);
    }
    println!("{table}");

    Ok(())
}
