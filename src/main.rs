use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::core::config::Config;

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(std::fs::File::create(log_file)?)));
    }

    builder.try_init()?;
    Ok(())
}

fn run(args: Args, config: Config) -> Result<ExitCode, Box<dyn Error>> {
    let mut generator = handlers::build_generator(&config, args.allow_weak_random)?;
    log::debug!("Random source tier: {}", generator.source_tier());

    match args.command {
        Some(CliCommand::Generate { options, count }) => {
            let options = options.to_options(&config);
            handlers::handle_generate(&mut generator, &options, count, args.json)?;
        }
        Some(CliCommand::Analyze { password }) => {
            handlers::handle_analyze(&password, args.json)?;
        }
        Some(CliCommand::Validate { options }) => {
            let options = options.to_options(&config);
            if !handlers::handle_validate(&options, args.json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(CliCommand::Interactive) | None => {
            menu::run_cli_menu(&config, generator)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    log::debug!("JSON output: {}, allow weak random: {}", args.json, args.allow_weak_random);
    log::debug!("Loaded config: {:?}", config);

    match run(args, config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
