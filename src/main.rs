use clap::Parser;
use make2oas::{
    Result,
    cli::{Cli, Commands, OutputArgs},
    commands::{self, ConvertCommandArgs, GenerateCommandArgs, OutputTarget},
    telemetry,
};

fn output_target(output: &OutputArgs) -> OutputTarget {
    if output.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::Path(output.output.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _telemetry = telemetry::init_telemetry();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            connection,
            paging,
            search,
        } => {
            commands::execute_list(connection.into(), paging.into(), search.as_deref()).await?;
        }
        Commands::Convert {
            connection,
            paging,
            scenario,
            output,
        } => {
            commands::execute_convert(ConvertCommandArgs {
                connection: connection.into(),
                options: paging.into(),
                scenario_id: scenario,
                format: output.format.into(),
                target: output_target(&output),
            })
            .await?;
        }
        Commands::Generate {
            interface,
            id,
            name,
            description,
            base_url,
            allow_any_host,
            output,
        } => {
            commands::execute_generate(GenerateCommandArgs {
                interface_path: &interface,
                scenario_id: id,
                name: &name,
                description: description.as_deref(),
                base_url: &base_url,
                allow_any_host,
                format: output.format.into(),
                target: output_target(&output),
            })?;
        }
        Commands::Check { file } => {
            commands::execute_check(&file)?;
        }
        Commands::Serve {
            port,
            host,
            allow_any_host,
            paging,
        } => {
            commands::execute_serve(&host, port, allow_any_host, paging.into()).await?;
        }
    }

    Ok(())
}
