use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use avatara_ir::{validate_avatar, Avatar};
use avatara_lower::{lower_avatar, AssetContainer, SceneModel};

#[derive(Parser)]
#[command(
    name = "avatara",
    version,
    about = "Avatara — non-destructive avatar animation compiler",
    long_about = "Avatara lowers a declarative avatar document (parameters, animation\ngroups, tracking preventions) into animator layers and an exported\nparameter list, ready for non-destructive installation by a host plugin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an avatar document and check its structure
    Validate {
        /// Path to the avatar JSON document
        #[arg()]
        file: PathBuf,
    },

    /// Run the full lowering pass and write the generated layer set
    Lower {
        /// Path to the avatar JSON document
        #[arg()]
        file: PathBuf,

        /// Path to the scene description JSON (flattened node list)
        #[arg(long)]
        scene: PathBuf,

        /// Path to the external asset containers JSON
        #[arg(long)]
        assets: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Lower {
            file,
            scene,
            assets,
            output,
        } => cmd_lower(&file, &scene, &assets, output),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}: {}", what, path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse {}: {}", what, path.display()))
}

fn cmd_validate(file: &Path) -> Result<()> {
    let avatar: Avatar = read_json(file, "avatar document")?;
    eprintln!("   ✓ Parse OK");

    validate_avatar(&avatar).map_err(|errors| {
        let msgs: Vec<String> = errors.into_iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!("Validation errors:\n  {}", msgs.join("\n  "))
    })?;
    eprintln!("   ✓ Validate OK");

    eprintln!(
        "   ✅ '{}': {} parameters, {} animation groups.",
        avatar.name,
        avatar.parameters.len(),
        avatar.animation_groups.len()
    );
    Ok(())
}

fn cmd_lower(file: &Path, scene: &Path, assets: &Path, output: Option<PathBuf>) -> Result<()> {
    let avatar: Avatar = read_json(file, "avatar document")?;
    let scene: SceneModel = read_json(scene, "scene description")?;
    let assets: Vec<AssetContainer> = read_json(assets, "asset containers")?;

    let lowered = lower_avatar(&avatar, &scene, &assets)
        .with_context(|| format!("lowering '{}' failed", avatar.name))?;
    eprintln!(
        "   ✓ Lowered {} layers, {} exported parameters",
        lowered.layers.len(),
        lowered.parameters.len()
    );

    let json = serde_json::to_string_pretty(&lowered)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            eprintln!("   ✅ Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
