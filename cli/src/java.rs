#![deny(missing_docs)]

//! # Java Command
//!
//! Generates a Java client from an API description.
//!
//! Settings are layered: defaults, then the optional `--config` file, then flags.
//! Nothing is written until the whole client has been generated.

use std::fs;
use std::path::{Path, PathBuf};

use clientgen_core::{
    generate, load_api_document, ArtifactSink, DirectorySink, GeneratorConfig, JavaStrategy,
    OutputMode,
};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::manifest::{write_pom, Coordinates};

/// Where sources go inside a full project.
const PROJECT_SOURCE_ROOT: &str = "src/main/java";

/// Arguments for the Java generation command.
#[derive(clap::Args, Debug, Clone)]
pub struct JavaArgs {
    /// Path to the API description (YAML or JSON).
    pub spec_file: PathBuf,

    /// Output directory.
    #[clap(long, default_value = ".")]
    pub out: PathBuf,

    /// Root package of the generated code.
    #[clap(long)]
    pub package: Option<String>,

    /// Name the client and exception are derived from.
    #[clap(long)]
    pub api_name: Option<String>,

    /// Only write sources, no project layout or manifest.
    #[clap(short = 's', long)]
    pub sources_only: bool,

    /// Maven group id.
    #[clap(long)]
    pub group_id: Option<String>,

    /// Maven artifact id.
    #[clap(long)]
    pub artifact_id: Option<String>,

    /// Project version.
    #[clap(long = "version")]
    pub project_version: Option<String>,

    /// File whose lines are injected into the client class. Repeatable.
    #[clap(long = "snippet")]
    pub snippets: Vec<PathBuf>,

    /// YAML generator configuration.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

/// Builds the effective configuration.
pub fn resolve_config(args: &JavaArgs) -> CliResult<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(package) = &args.package {
        config.namespace = package.clone();
    }
    if args.api_name.is_some() {
        config.api_name = args.api_name.clone();
    }
    if args.sources_only {
        config.output_mode = OutputMode::SourcesOnly;
    }
    if args.group_id.is_some() {
        config.group_id = args.group_id.clone();
    }
    if args.artifact_id.is_some() {
        config.artifact_id = args.artifact_id.clone();
    }
    if args.project_version.is_some() {
        config.version = args.project_version.clone();
    }
    for path in &args.snippets {
        config.snippets.extend(read_snippet(path)?);
    }

    debug!(namespace = %config.namespace, mode = ?config.output_mode, "resolved configuration");
    Ok(config)
}

/// Reads a snippet file as lines, dropping carriage returns and trailing empty lines.
pub fn read_snippet(path: &Path) -> CliResult<Vec<String>> {
    if !path.exists() {
        return Err(CliError::SnippetNotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    let mut lines: Vec<String> = text.replace('\r', "").split('\n').map(String::from).collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Ok(lines)
}

/// Executes the Java generation.
pub fn execute(args: &JavaArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    // 1. Load
    let api = load_api_document(&args.spec_file)?;

    // 2. Generate everything before touching the output directory
    let artifacts = generate(&api, &config, &JavaStrategy)?;

    // 3. Write
    let source_root = match config.output_mode {
        OutputMode::SourcesOnly => args.out.clone(),
        OutputMode::FullProject => {
            let api_name = config.resolve_api_name(&api.info);
            let coords = Coordinates {
                group_id: config.resolve_group_id(),
                artifact_id: config.resolve_artifact_id(&api_name),
                version: config.resolve_version(&api.info),
            };
            let pom = write_pom(&args.out, &coords)?;
            println!("Wrote manifest {:?}", pom);
            args.out.join(PROJECT_SOURCE_ROOT)
        }
    };

    let mut sink = DirectorySink::new(&source_root);
    sink.write_all(&artifacts)?;

    println!(
        "Generated {} source files in {:?}",
        artifacts.len(),
        source_root
    );
    Ok(())
}
