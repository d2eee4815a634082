use adcm_provider::adapters::outbound::console::{StderrDiagnosticSink, StderrProgressReporter};
use adcm_provider::adapters::outbound::filesystem::ManifestReader;
use adcm_provider::adapters::outbound::network::{HttpAdcmTransport, HttpBundleSource};
use adcm_provider::application::diagnostics::to_diagnostic;
use adcm_provider::application::dto::ResourceManifest;
use adcm_provider::application::use_cases::{reject_update, ManageResourcesUseCase};
use adcm_provider::application::AdcmApi;
use adcm_provider::cli::{Args, Command};
use adcm_provider::config::{self, ConfigFile, Settings};
use adcm_provider::logging::init_logging;
use adcm_provider::ports::outbound::{Diagnostic, DiagnosticSink};
use adcm_provider::shared::{AdcmError, CancelSignal, ExitCode};
use clap::Parser;
use serde_json::Value;
use std::path::Path;
use std::process;

/// A failed run, already phrased for the user
struct Failure(Diagnostic);

impl Failure {
    fn adcm(operation: &str, entity: &str, error: &AdcmError) -> Self {
        Self(to_diagnostic(operation, entity, error))
    }

    fn setup(summary: &str, error: &anyhow::Error) -> Self {
        Self(Diagnostic::error(summary).with_detail(format!("{:#}", error)))
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging(args.verbose);

    let code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(Failure(diagnostic)) => {
            StderrDiagnosticSink::new().emit(&diagnostic);
            ExitCode::ApplicationError
        }
    };
    process::exit(code.as_i32());
}

fn run(args: Args) -> Result<(), Failure> {
    // Update never reaches ADCM, so it needs neither settings nor a session
    if let Command::Update { file } = &args.command {
        let manifest = read_manifest(file)?;
        let entity = manifest.kind().to_string();
        return Err(Failure::adcm("updating", &entity, &reject_update(&manifest)));
    }

    let settings = load_settings(&args).map_err(|e| Failure::setup("Invalid configuration", &e))?;

    // Manifests are read before signing in so local mistakes fail fast
    let (operation, manifest) = match &args.command {
        Command::Create { file } => ("creating", Some(read_manifest(file)?)),
        Command::Read { kind, filters } => ("reading", Some(filters.to_manifest(*kind))),
        Command::Delete { kind, filters } => ("deleting", Some(filters.to_manifest(*kind))),
        Command::Bundles | Command::Update { .. } => ("listing", None),
    };
    let entity = manifest
        .as_ref()
        .map_or_else(|| "bundles".to_string(), |m| m.kind().to_string());
    let fail = |error: AdcmError| Failure::adcm(operation, &entity, &error);

    let transport = HttpAdcmTransport::connect(
        &settings.host,
        &settings.username,
        &settings.password,
        settings.request_timeout,
    )
    .map_err(fail)?;

    let cancel = settings
        .deadline
        .map_or_else(CancelSignal::new, CancelSignal::with_deadline);
    let api = AdcmApi::new(transport).with_cancel_signal(cancel);
    let bundle_source = HttpBundleSource::new().map_err(fail)?;
    let use_case = ManageResourcesUseCase::new(
        &api,
        bundle_source,
        StderrProgressReporter::new(),
        settings.readiness,
    );

    let output = match (&args.command, manifest.as_ref()) {
        (Command::Create { .. }, Some(manifest)) => use_case.create(manifest),
        (Command::Read { .. }, Some(manifest)) => use_case.read(manifest),
        (Command::Delete { .. }, Some(manifest)) => {
            use_case.delete(manifest).map(|()| deleted(manifest))
        }
        _ => use_case.list_bundles(),
    }
    .map_err(fail)?;

    print_json(&output);
    Ok(())
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let file: Option<ConfigFile> = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let env = |key: &str| std::env::var(key).ok().filter(|value| !value.is_empty());
    config::resolve_settings(env, file.as_ref(), &args.connection_overrides())
}

fn read_manifest(path: &Path) -> Result<ResourceManifest, Failure> {
    ManifestReader::new()
        .read(path)
        .map_err(|e| Failure::setup("Invalid resource manifest", &e))
}

fn deleted(manifest: &ResourceManifest) -> Value {
    serde_json::json!({ "deleted": manifest.kind().to_string() })
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}
