use clap::Parser;
use prism_shared::scaffold::{Registration, ScaffoldError, Scaffolder, ServiceKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

/// Create a new service skeleton and register it in the workspace.
#[derive(Parser, Debug)]
#[command(name = "create-service")]
#[command(about = "Scaffold a new Prism service", long_about = None)]
struct Args {
    /// Name of the service to create
    #[arg(long)]
    name: String,

    /// Type of service (grpc, http, worker)
    #[arg(long = "type", default_value = "grpc")]
    kind: ServiceKind,

    /// Workspace root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Workspace manifest, relative to the root
    #[arg(long, default_value = "go.work")]
    manifest: PathBuf,

    /// Logging verbosity: trace, debug, info, warn, error
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let scaffolder = Scaffolder::new(&args.root).with_manifest(&args.manifest);

    println!("🚀 Creating service: {}", args.name.trim());

    let generated = match scaffolder.generate(&args.name, args.kind) {
        Ok(generated) => generated,
        Err(e @ ScaffoldError::InvalidServiceName(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: create-service --name=<service-name> [--type=grpc|http|worker]");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "Service generation failed");
            eprintln!("❌ Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match &generated.registration {
        Registration::Registered => {
            println!("📝 Registered {} in {}", generated.path, scaffolder.manifest().display())
        }
        Registration::AlreadyRegistered => {}
        Registration::MarkerNotFound => eprintln!(
            "⚠️  Warning: no workspace member list in {}, add {} manually",
            scaffolder.manifest().display(),
            generated.path
        ),
        Registration::Failed(e) => eprintln!("⚠️  Warning: could not update manifest: {}", e),
    }

    println!("✅ Service '{}' created successfully!", generated.name);
    println!("\nNext steps:");
    for (i, step) in generated.next_steps().iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }

    ExitCode::SUCCESS
}
