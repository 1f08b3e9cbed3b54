use crate::client::{MakeClient, list_on_demand_scenarios};
use crate::config::{ConnectionConfig, ConnectionInput, FetchOptions};
use crate::error::Result;
use crate::models::make::filter_scenarios;
use colored::*;

pub async fn execute_list(
    input: ConnectionInput,
    options: FetchOptions,
    search: Option<&str>,
) -> Result<()> {
    let config = ConnectionConfig::from_input(input.with_env_fallback())?;

    println!("{}", "Fetching scenarios...".bright_blue());
    println!("  Instance: {}", config.origin);

    let client = MakeClient::new(config)?;
    let scenarios = list_on_demand_scenarios(&client, options).await?;

    println!(
        "\n{} Found {} on-demand scenario{}",
        "✓".green(),
        scenarios.len(),
        if scenarios.len() == 1 { "" } else { "s" }
    );

    let shown = filter_scenarios(&scenarios, search.unwrap_or_default());

    if shown.is_empty() {
        println!("{}", "No scenarios found".yellow());
        return Ok(());
    }

    println!();
    for scenario in &shown {
        println!(
            "  {} {}",
            format!("#{}", scenario.id).bright_cyan(),
            scenario.name.bold()
        );
        if let Some(description) = scenario.description.as_deref().filter(|d| !d.is_empty()) {
            println!("     {}", description);
        }
    }

    if search.is_some() {
        println!(
            "\n{} of {} scenarios displayed",
            shown.len(),
            scenarios.len()
        );
    }

    Ok(())
}
