use anyhow::Context;
use clap::Parser;
use cpf_gen::config::cli::{Command, GenerateArgs, ValidateArgs};
use cpf_gen::config::toml_config::TomlConfig;
use cpf_gen::utils::{logger, validation::Validate};
use cpf_gen::{app::commands, CliConfig, CpfError, GenerationSettings};

fn main() {
    let config = CliConfig::parse();

    // The config file can switch logging to JSON, so load it first.
    let file_config = match load_file_config(&config) {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.log_json || file_config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let outcome = match config.command {
        Command::Generate(args) => run_generate(args, &file_config),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<CpfError>() {
            Some(cpf_error) => {
                eprintln!("💡 {}", cpf_error.recovery_suggestion());
                cpf_error.exit_code()
            }
            None => 1,
        };
        std::process::exit(exit_code);
    }
}

fn load_file_config(config: &CliConfig) -> cpf_gen::Result<TomlConfig> {
    let path = match &config.command {
        Command::Generate(GenerateArgs {
            config: Some(path), ..
        }) => path,
        _ => return Ok(TomlConfig::default()),
    };

    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn run_generate(args: GenerateArgs, file_config: &TomlConfig) -> anyhow::Result<()> {
    let settings = GenerationSettings::from_toml(file_config).with_overrides(
        args.count,
        args.output,
        args.seed,
    );

    let summary = commands::generate(&settings)
        .with_context(|| format!("Generating CPFs into {}", settings.output_path))?;

    println!(
        "✅ {} CPFs written to {}",
        summary.records_written, summary.output
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let candidates = commands::read_candidates(&args.candidates, args.input.as_deref())
        .context("Reading CPF candidates")?;

    if candidates.is_empty() {
        tracing::warn!("No candidates given; pass them as arguments or with --input");
    }

    let report = commands::validate(&candidates);
    print!("{}", commands::render_report(&report, args.json)?);

    commands::check_strict(&report, args.strict)?;
    Ok(())
}
