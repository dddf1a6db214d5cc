//! Skilldep CLI
//!
//! The entry point for the skill dependency resolver.
//! One subcommand per resolver operation; the process exits 0 when nothing
//! was found wrong and 1 when a command reported problems.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use skilldep::config;
use skilldep::resolver::cycles::detect_cycles;
use skilldep::resolver::graph::{adjacency_listing, build_graph, render_mermaid};
use skilldep::resolver::order::resolve_order;
use skilldep::resolver::tools::{build_manifest, tools_for_skill};
use skilldep::resolver::validate::{check_all, validate_skill, EnvSource, ProcessEnv};
use skilldep::skills::loader::load_skills;
use skilldep::skills::registry::SkillRegistry;

/// Skill Dependency Resolver and Validator
#[derive(Parser, Debug)]
#[command(
    name = "skilldep",
    version,
    about = "Skill dependency resolver and validator",
    long_about = "Validates skill schemas, resolves dependency load orders, \
                  detects cycles, and aggregates tool manifests."
)]
struct Cli {
    /// Directory containing skill definitions
    #[arg(long, global = true)]
    skills_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single skill
    Validate {
        /// Skill name to validate
        #[arg(long)]
        skill: String,
    },
    /// Check dependencies for all skills
    CheckDeps,
    /// Generate the dependency graph
    Graph {
        #[arg(long, value_enum, default_value_t = GraphFormat::Mermaid)]
        format: GraphFormat,
    },
    /// Resolve a skill's dependency load order
    Resolve {
        /// Skill to resolve
        #[arg(long)]
        skill: String,
    },
    /// Show the aggregated tools for a skill
    Tools {
        /// Skill name
        #[arg(long)]
        skill: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Detect circular dependencies
    Cycles,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GraphFormat {
    Mermaid,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// ---- Report Helpers ---------------------------------------------------------

/// Center `title` in a 60-column dashed rule, like `----TITLE----`.
fn section(title: &str) -> String {
    format!("{:-^60}", title)
}

/// First `limit` characters with a trailing ellipsis.
fn truncate(text: &str, limit: usize) -> String {
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut)
}

// ---- Commands ---------------------------------------------------------------

/// Run validation for one skill and report findings.
fn cmd_validate(registry: &SkillRegistry, skill: &str) -> bool {
    let errors = validate_skill(registry, skill, &ProcessEnv);
    if errors.is_empty() {
        println!("Skill '{}' is {}", skill, "valid".green());
        return true;
    }

    println!("Validation errors for '{}':", skill);
    for e in &errors {
        println!("  - {}", e.red());
    }
    false
}

/// Validate every registered skill; report only the failing ones.
fn cmd_check_deps(registry: &SkillRegistry) -> bool {
    let results = check_all(registry, &ProcessEnv);
    if results.is_empty() {
        println!("{}", "All skill dependencies are satisfied".green());
        return true;
    }

    println!("{}", "Dependency issues found:".yellow());
    for (skill, errors) in &results {
        println!("\n{}:", skill.bold());
        for e in errors {
            println!("  - {}", e.red());
        }
    }
    false
}

fn cmd_graph(registry: &SkillRegistry, format: GraphFormat) {
    match format {
        GraphFormat::Mermaid => println!("{}", render_mermaid(&build_graph(registry))),
        GraphFormat::Json => {
            let listing = adjacency_listing(registry);
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

/// Print the full resolution report: load order, missing dependencies,
/// aggregated tools, and environment requirement status.
fn cmd_resolve(registry: &SkillRegistry, skill_name: &str) -> bool {
    let skill = match registry.get(skill_name) {
        Some(s) => s,
        None => {
            eprintln!("Error: Skill '{}' not found", skill_name);
            return false;
        }
    };

    println!("\n{}", "=".repeat(60));
    println!("SKILL RESOLUTION REPORT: {}", skill_name.bold());
    println!("{}", "=".repeat(60));

    println!("\nDescription: {}", truncate(&skill.description, 100));
    println!("Version: {}", skill.version);

    let (order, missing) = resolve_order(registry, skill_name);

    println!("\n{}", section("DEPENDENCY RESOLUTION"));
    if order.is_empty() {
        println!("No dependencies");
    } else {
        println!("Load order:");
        for (i, name) in order.iter().enumerate() {
            let marker = if name == skill_name { " <<" } else { "" };
            println!("  {}. {}{}", i + 1, name, marker.cyan());
        }
    }

    if !missing.is_empty() {
        println!("\nMissing dependencies:");
        for m in &missing {
            println!("  - {}", m.red());
        }
    }

    let tools = tools_for_skill(registry, skill_name);
    println!("\n{}", section("AVAILABLE TOOLS"));
    if tools.is_empty() {
        println!("  No structured tools defined");
    } else {
        for tool in &tools {
            println!(
                "  [{}] {}: {}",
                tool.category,
                tool.name,
                truncate(&tool.description, 60)
            );
        }
    }

    let env_reqs = &skill.dependencies.environment;
    if !env_reqs.is_empty() {
        println!("\n{}", section("ENVIRONMENT REQUIREMENTS"));
        for req in env_reqs {
            let present = ProcessEnv.var(&req.name).is_some();
            let status = if present {
                "OK".green()
            } else {
                "MISSING".red()
            };
            let kind = if req.required { "required" } else { "optional" };
            println!("  [{}] {} ({}): {}", status, req.name, kind, req.description);
        }
    }

    missing.is_empty()
}

fn cmd_tools(registry: &SkillRegistry, skill: &str, format: OutputFormat) {
    let manifest = build_manifest(registry, skill);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Text => {
            println!("\nTools for '{}':", skill);
            for tool in &manifest.tools {
                println!("\n  [{}] {}", tool.category, tool.name.bold());
                println!("    {}", tool.description);
                if !tool.parameters.is_empty() {
                    println!("    Parameters:");
                    for p in &tool.parameters {
                        let req = if p.required { "required" } else { "optional" };
                        println!("      - {} ({}, {})", p.name, p.param_type, req);
                    }
                }
            }
        }
    }
}

fn cmd_cycles(registry: &SkillRegistry) -> bool {
    let cycles = detect_cycles(registry);
    if cycles.is_empty() {
        println!("{}", "No circular dependencies detected".green());
        return true;
    }

    println!("{}", "Circular dependencies detected:".red());
    for cycle in &cycles {
        println!("  -> {}", cycle.join(" -> "));
    }
    false
}

// ---- Entry Point -----------------------------------------------------------

fn run(cli: Cli) -> anyhow::Result<bool> {
    let skills_dir = config::skills_dir(cli.skills_dir.as_deref());
    let records = load_skills(&skills_dir)?;
    let registry = SkillRegistry::from_records(records);

    let ok = match cli.command {
        Commands::Validate { skill } => cmd_validate(&registry, &skill),
        Commands::CheckDeps => cmd_check_deps(&registry),
        Commands::Graph { format } => {
            cmd_graph(&registry, format);
            true
        }
        Commands::Resolve { skill } => cmd_resolve(&registry, &skill),
        Commands::Tools { skill, format } => {
            cmd_tools(&registry, &skill, format);
            true
        }
        Commands::Cycles => cmd_cycles(&registry),
    };

    Ok(ok)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Fatal: {:#}", e);
            std::process::exit(1);
        }
    }
}
