//! Route table inspector.
//!
//! Loads a TOML route manifest, compiles it, and prints the compiled
//! tree as JSON. Component names stand in for real component handles,
//! so the output shows exactly what a consuming router would receive.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_compiler::{compile, ComponentRegistry, ManifestEntry};

#[derive(Parser)]
#[command(name = "route-compiler")]
#[command(about = "Compile a TOML route manifest and print the route tree", long_about = None)]
struct Cli {
    /// Path to the route manifest.
    manifest: PathBuf,

    /// Pretty-print the compiled tree.
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_compiler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let manifest = route_compiler::load_manifest(&cli.manifest)?;

    // Bind every referenced component name to itself; the inspector has
    // no real components to render.
    let mut registry = ComponentRegistry::new();
    for name in component_names(&manifest.routes) {
        registry.register(name.clone(), name);
    }

    let descriptors = registry.resolve(&manifest.routes)?;
    let compiled = compile(&descriptors);

    tracing::info!(
        manifest = %cli.manifest.display(),
        top_level = compiled.len(),
        "route manifest compiled"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&compiled)?
    } else {
        serde_json::to_string(&compiled)?
    };
    println!("{json}");

    Ok(())
}

/// Collect every component name referenced by the manifest.
fn component_names(entries: &[ManifestEntry]) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(entries, &mut names);
    names.sort();
    names.dedup();
    names
}

fn collect_names(entries: &[ManifestEntry], names: &mut Vec<String>) {
    for entry in entries {
        names.push(entry.component.clone());
        collect_names(&entry.children, names);
    }
}
