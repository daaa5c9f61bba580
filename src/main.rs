use depgraph_forge::adapters::outbound::console::StderrProgressReporter;
use depgraph_forge::adapters::outbound::filesystem::{FileSystemReader, FileSystemWorkspace};
use depgraph_forge::adapters::outbound::process::{
    CommandPackageBuilder, DEFAULT_BUILDER_ARGS, DEFAULT_BUILDER_PROGRAM,
};
use depgraph_forge::application::dto::{
    EnvironmentScope, GraphBuildRequest, OutputFormat, DEFAULT_CACHE_ENV_VAR,
};
use depgraph_forge::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depgraph_forge::application::read_models::BuildReportBuilder;
use depgraph_forge::application::use_cases::GenerateGraphUseCase;
use depgraph_forge::cli::Args;
use depgraph_forge::config::{self, ConfigFile};
use depgraph_forge::graph_generation::domain::Scope;
use depgraph_forge::graph_generation::services::DEFAULT_MANIFEST_FILENAME;
use depgraph_forge::logging;
use depgraph_forge::shared::error::{ExitCode, ForgeError};
use depgraph_forge::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::TempDir;
use tracing::debug;

fn main() {
    let args = Args::parse_args();
    logging::init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config)?;
    debug!(?settings, "Resolved settings");

    let workdir = RunDirectory::explicit_or_temp(settings.workdir.clone(), "depgraph-forge-work-")?;
    let cache_dir =
        RunDirectory::explicit_or_temp(settings.cache_dir.clone(), "depgraph-forge-cache-")?;

    // Create adapters (Dependency Injection)
    let builder = CommandPackageBuilder::new(&settings.builder_program, settings.builder_args.clone())
        .with_scope(&settings.scope)
        .quiet(settings.quiet);
    let progress_reporter = if settings.quiet {
        StderrProgressReporter::silent()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateGraphUseCase::new(
        FileSystemReader::new(),
        FileSystemWorkspace::new(),
        builder,
        progress_reporter,
    );

    let request = GraphBuildRequest {
        input_path: settings.input.clone(),
        workdir: workdir.path().to_path_buf(),
        cache_dir: cache_dir.path().to_path_buf(),
        cache_env_var: settings.cache_env_var.clone(),
        scope: settings.scope.clone(),
        manifest_filename: settings.manifest_filename.clone(),
        environment_scope: settings.environment_scope,
        prepend_path: settings.prepend_path.clone(),
        dry_run: settings.dry_run,
    };

    let result = use_case.execute(request);

    // Node directories stay on disk after a real run, even a failed one
    if !settings.dry_run {
        workdir.persist();
        cache_dir.persist();
    }
    let response = result?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let report = BuildReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise the current directory is searched
fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    Ok(config.unwrap_or_default())
}

/// Run settings after merging the command line, the config file and defaults
#[derive(Debug)]
struct Settings {
    input: PathBuf,
    builder_program: String,
    builder_args: Vec<String>,
    cache_env_var: String,
    scope: Scope,
    manifest_filename: String,
    environment_scope: EnvironmentScope,
    prepend_path: Vec<PathBuf>,
    workdir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
}

impl Settings {
    /// Command line wins over the config file, which wins over defaults
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let (builder_program, builder_args) = Self::resolve_builder(args, &config);
        if builder_program.trim().is_empty() {
            return Err(ForgeError::Validation {
                message: "Builder program must not be empty".to_string(),
            }
            .into());
        }

        let cache_env_var = args
            .cache_env_var
            .clone()
            .or_else(|| config.cache_env_var.clone())
            .unwrap_or_else(|| DEFAULT_CACHE_ENV_VAR.to_string());
        if cache_env_var.is_empty() || cache_env_var.contains('=') {
            return Err(ForgeError::Validation {
                message: format!("Invalid cache variable name '{}'", cache_env_var),
            }
            .into());
        }

        let defaults = Scope::default();
        let user = args
            .user
            .clone()
            .or_else(|| config.default_user.clone())
            .unwrap_or_else(|| defaults.user().to_string());
        let channel = args
            .channel
            .clone()
            .or_else(|| config.default_channel.clone())
            .unwrap_or_else(|| defaults.channel().to_string());

        let prepend_path = if args.prepend_path.is_empty() {
            config.prepend_path.clone().unwrap_or_default()
        } else {
            args.prepend_path.clone()
        };

        Ok(Self {
            input: args.input.clone(),
            builder_program,
            builder_args,
            cache_env_var,
            scope: Scope::new(user, channel)?,
            manifest_filename: config
                .manifest_filename
                .clone()
                .unwrap_or_else(|| DEFAULT_MANIFEST_FILENAME.to_string()),
            environment_scope: args
                .environment_scope
                .or_else(|| config.environment_scope())
                .unwrap_or_default(),
            prepend_path,
            workdir: args.workdir.clone().or_else(|| config.workdir.clone()),
            cache_dir: args.cache_dir.clone().or_else(|| config.cache_dir.clone()),
            format: args.format.or_else(|| config.format()).unwrap_or_default(),
            output: args.output.clone(),
            dry_run: args.dry_run,
            quiet: args.quiet,
        })
    }

    /// Arguments travel with the program that defined them: a builder named
    /// on the command line never inherits arguments from the config file
    fn resolve_builder(args: &Args, config: &ConfigFile) -> (String, Vec<String>) {
        if let Some(program) = &args.builder {
            return (program.clone(), args.builder_args.clone());
        }

        let program = config
            .builder_program
            .clone()
            .unwrap_or_else(|| DEFAULT_BUILDER_PROGRAM.to_string());
        if !args.builder_args.is_empty() {
            return (program, args.builder_args.clone());
        }

        let builder_args = match (&config.builder_args, &config.builder_program) {
            (Some(builder_args), _) => builder_args.clone(),
            (None, Some(_)) => Vec::new(),
            (None, None) => DEFAULT_BUILDER_ARGS.iter().map(|a| a.to_string()).collect(),
        };
        (program, builder_args)
    }
}

/// Workdir or cache root, either given explicitly or a fresh temp directory
struct RunDirectory {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl RunDirectory {
    fn explicit_or_temp(path: Option<PathBuf>, prefix: &str) -> Result<Self> {
        if let Some(path) = path {
            return Ok(Self { path, temp: None });
        }
        let temp = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(Self {
            path: temp.path().to_path_buf(),
            temp: Some(temp),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps a temp directory past the end of the run
    fn persist(self) {
        if let Some(temp) = self.temp {
            let _ = temp.keep();
        }
    }
}
