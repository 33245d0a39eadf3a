use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use exo_app::{init_tracing, DemoConfig, PredictResponse, Session, SessionError};
use exo_dataset::FileSource;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("exo-demo")
        .version(exo_app::VERSION)
        .about("Exoplanet candidate classification demo")
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .value_parser(value_parser!(PathBuf))
                .help("Samples dataset (overrides config)"),
        )
        .arg(
            Arg::new("synthesis")
                .long("synthesis")
                .value_parser(value_parser!(PathBuf))
                .help("Synthesis dataset (overrides config)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Random seed for reproducible manual predictions"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List selectable samples and exit"),
        )
        .arg(
            Arg::new("candidate")
                .long("candidate")
                .help("Candidate id to select before predicting"),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .action(ArgAction::Append)
                .value_name("NAME=VALUE")
                .help("Edit a field before predicting (repeatable)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
}

fn load_config(args: &ArgMatches) -> Result<DemoConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => DemoConfig::from_toml_file(path)?,
        None => DemoConfig::default(),
    };
    if let Some(path) = args.get_one::<PathBuf>("samples") {
        config.samples_path.clone_from(path);
    }
    if let Some(path) = args.get_one::<PathBuf>("synthesis") {
        config.synthesis_path.clone_from(path);
    }
    if let Some(seed) = args.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    config.ensure_valid()?;
    Ok(config)
}

fn parse_edit(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("expected NAME=VALUE, got {raw:?}"),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = cli().get_matches();
    let config = load_config(&args)?;
    init_tracing(&config.logging);
    let json = args.get_flag("json");

    let mut session = Session::from_config(&config);
    let source = FileSource::new(&config.samples_path, &config.synthesis_path);
    let view = match session.load(&source).await {
        Ok(view) => view,
        Err(SessionError::Load(_)) => {
            if let Some(failure) = session.failure() {
                if json {
                    println!("{}", serde_json::to_string_pretty(failure)?);
                } else {
                    eprintln!("{}", failure.message);
                    eprintln!("  {}", failure.detail);
                }
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    if args.get_flag("list") {
        if json {
            println!("{}", serde_json::to_string_pretty(&view.selector)?);
        } else {
            for option in &view.selector {
                println!("{:<10} {}", option.value.as_deref().unwrap_or(""), option.label);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let candidate = args.get_one::<String>("candidate").map(String::as_str);
    session.on_selection_changed(candidate)?;

    for raw in args.get_many::<String>("field").into_iter().flatten() {
        let (name, value) = parse_edit(raw)?;
        session
            .on_field_edited(name, value)
            .with_context(|| format!("cannot edit {name}"))?;
    }

    let response = session.on_predict_requested(std::iter::empty())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    match response {
        PredictResponse::Report(report) => {
            if !json {
                println!("{report}");
            }
            Ok(ExitCode::SUCCESS)
        }
        PredictResponse::Invalid(report) => {
            if !json {
                if let Some(message) = report.message() {
                    eprintln!("{message}");
                }
                for field in report.invalid_fields() {
                    eprintln!("  {field}");
                }
            }
            Ok(ExitCode::from(2))
        }
    }
}
