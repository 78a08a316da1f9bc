use bomlint::adapters::outbound::console::StderrProgressReporter;
use bomlint::adapters::outbound::filesystem::{
    BomLocator, FileSystemBomRepository, FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use bomlint::application::dto::{BomRequest, CheckRequest, OutputFormat};
use bomlint::application::factories::FormatterFactory;
use bomlint::application::use_cases::{
    CheckManifestsUseCase, MergeIntoBomUseCase, PruneBomUseCase,
};
use bomlint::bom_reconciliation::policies::ConflictAllowList;
use bomlint::cli::{Args, Command};
use bomlint::config::{self, ConfigFile};
use bomlint::ports::outbound::OutputPresenter;
use bomlint::shared::error::{BomlintError, ExitCode};
use bomlint::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let format = resolve_format(args.format, &config)?;
    let common = args.command.common();

    let bom_path = match common.bom.clone().or_else(|| config.bom.clone()) {
        Some(path) => path,
        None => BomLocator::new(dirs::home_dir()).locate(&std::env::current_dir()?),
    };
    let manifest_paths = common.files.clone();

    let formatter = FormatterFactory::create(format);
    let presenter = StdoutPresenter::new();

    let exit_code = match &args.command {
        Command::Check(_) | Command::Fix(_) => {
            let cli_allow_list = ConflictAllowList::from_names(&common.allow_conflicts)?;
            let config_allow_list =
                ConflictAllowList::from_names(config.allow_conflicts.iter().flatten())?;
            let request = CheckRequest::new(
                manifest_paths,
                bom_path,
                cli_allow_list.union(config_allow_list),
                matches!(args.command, Command::Fix(_)),
            );

            let use_case = CheckManifestsUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                FileSystemBomRepository::new(),
                StderrProgressReporter::new(),
            );
            let response = use_case.execute(request)?;
            presenter.present(&formatter.format_check(&response)?)?;
            response.exit_code()
        }
        Command::Merge(_) => {
            let use_case = MergeIntoBomUseCase::new(
                FileSystemReader::new(),
                FileSystemBomRepository::new(),
                StderrProgressReporter::new(),
            );
            let response = use_case.execute(BomRequest::new(manifest_paths, bom_path))?;
            presenter.present(&formatter.format_merge(&response)?)?;
            response.exit_code()
        }
        Command::Prune(_) => {
            let use_case = PruneBomUseCase::new(
                FileSystemReader::new(),
                FileSystemBomRepository::new(),
                StderrProgressReporter::new(),
            );
            let response = use_case.execute(BomRequest::new(manifest_paths, bom_path))?;
            presenter.present(&formatter.format_prune(&response)?)?;
            response.exit_code()
        }
    };

    Ok(exit_code)
}

/// Loads the explicit config file, or the one in the current directory if any
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&PathBuf::from("."))?,
    };
    Ok(config.unwrap_or_default())
}

/// CLI flag first, then the config file, then text
fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(value) => value
            .parse()
            .map_err(|message| BomlintError::Validation { message }.into()),
        None => Ok(OutputFormat::default()),
    }
}
