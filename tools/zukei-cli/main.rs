use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use zukei::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TriggerCli {
    Cron,
    Webhook,
    Manual,
}

impl From<TriggerCli> for TriggerType {
    fn from(trigger: TriggerCli) -> Self {
        match trigger {
            TriggerCli::Cron => TriggerType::Cron,
            TriggerCli::Webhook => TriggerType::Webhook,
            TriggerCli::Manual => TriggerType::Manual,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Horizontal,
    Vertical,
}

impl From<DirectionCli> for GraphDirection {
    fn from(direction: DirectionCli) -> Self {
        match direction {
            DirectionCli::Horizontal => GraphDirection::Horizontal,
            DirectionCli::Vertical => GraphDirection::Vertical,
        }
    }
}

/// Compiles a workflow or pipeline DSL file into a layout-ready graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the DSL YAML file
    dsl_path: String,

    /// What initiates a run; selects the trigger node that is drawn
    #[arg(short, long, value_enum, default_value = "manual")]
    trigger: TriggerCli,

    /// Optional path to a task catalog JSON file, used for icon resolution
    #[arg(short, long)]
    catalog: Option<String>,

    /// Rank direction for hierarchical layouts
    #[arg(short, long, value_enum, default_value = "horizontal")]
    direction: DirectionCli,

    /// Optional path to a viewer config JSON file
    #[arg(long)]
    config: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    graph: &'a CompiledGraph,
    layout: &'a LayoutConfig,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let dsl = fs::read_to_string(&cli.dsl_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Could not read DSL file '{}': {}", cli.dsl_path, e))
    });

    let config = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => ViewerConfig::default(),
    };

    let mut builder = Compiler::builder().with_shell_icon(config.shell_icon.clone());
    if let Some(path) = &cli.catalog {
        builder = builder.with_catalog(load_catalog(path));
    }
    let compiler = builder.build();

    let graph = compiler
        .compile(Some(dsl.as_str()), Some(cli.trigger.into()))
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let layout = select_layout(graph.dsl_kind, graph.nodes.len(), cli.direction.into());

    tracing::info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        elapsed = ?start.elapsed(),
        "compiled"
    );

    let output = Output {
        graph: &graph,
        layout: &layout,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));

    println!("{}", json);
}

fn load_catalog(path: &str) -> Vec<NodeDefinition> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Could not read catalog '{}': {}", path, e)));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog JSON: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
