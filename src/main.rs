use anyhow::Result;
use casemap::cli::{Cli, Commands};
use casemap::commands::{generate, init, list, run};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            path,
            config,
            format,
            output,
            results,
        } => {
            let generate_config = generate::GenerateConfig {
                path,
                config,
                format,
                output,
                results,
            };
            generate::handle_generate(generate_config)
        }
        Commands::List {
            path,
            config,
            format,
        } => {
            let list_config = list::ListConfig {
                path,
                config,
                format,
            };
            list::handle_list(list_config)
        }
        Commands::Init { force } => init::init_config(force),
        Commands::Run { path, config, only } => {
            let run_config = run::RunConfig { path, config, only };
            let all_passed = run::handle_run(run_config)?;
            if !all_passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
