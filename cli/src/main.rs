//! Adjgraph CLI — demonstration driver and interactive shell for the graph store
//!
//! Only reads the store through its enumeration and reports the status of
//! each mutation; all graph semantics live in the library.

use adjgraph::{GraphConfig, GraphStatus, GraphStore, NodeIndex};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adjgraph", version, about = "Dense in-memory directed graph")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true, env = "ADJGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format for graph listings
    #[arg(long, default_value = "plain", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration scenario
    Demo,
    /// Start an interactive shell reading commands from stdin
    Shell,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(version = adjgraph::version(), capacity = config.initial_capacity, "starting");

    let mut store = GraphStore::with_config(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => run_demo(&mut store, &mut out, cli.format),
        Commands::Shell => {
            let stdin = std::io::stdin();
            run_shell(&mut store, stdin.lock(), &mut out, cli.format)
        }
    }
}

fn run_demo(store: &mut GraphStore, out: &mut impl Write, format: OutputFormat) -> Result<()> {
    let (root, result) = store.add_node(1.23, None);
    writeln!(out, "Added root node #{} status={}", root.as_usize(), GraphStatus::from(&result))?;

    let (child, result) = store.add_node(4.56, Some(root));
    writeln!(out, "Added child node #{} status={}", child.as_usize(), GraphStatus::from(&result))?;

    let result = store.add_edge(root, child);
    writeln!(
        out,
        "Added edge ({},{}) status={}",
        root.as_usize(),
        child.as_usize(),
        GraphStatus::from(&result)
    )?;

    print_graph(store, out, format)?;

    let result = store.remove_edge(root, child);
    writeln!(out, "Removed edge status={}", GraphStatus::from(&result))?;

    let result = store.remove_node(child);
    writeln!(out, "Removed node #{} status={}", child.as_usize(), GraphStatus::from(&result))?;

    print_graph(store, out, format)?;
    Ok(())
}

fn print_graph(store: &GraphStore, out: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => write!(out, "{}", store.listing())?,
        OutputFormat::Table => {
            if store.is_empty() {
                writeln!(out, "(empty graph)")?;
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Node", "Value", "Targets"]);

            for entry in store.nodes() {
                let targets: Vec<String> = entry.targets.iter().map(|t| t.as_usize().to_string()).collect();
                table.add_row(vec![
                    entry.index.as_usize().to_string(),
                    entry.value.to_string(),
                    targets.join(" "),
                ]);
            }

            writeln!(out, "{}", table)?;
            writeln!(out, "{} node(s), {} edge(s)", store.node_count(), store.edge_count())?;
        }
    }
    Ok(())
}

/// A single shell command
#[derive(Debug, Clone, PartialEq)]
enum ShellCommand {
    AddNode { value: f64, parent: Option<NodeIndex> },
    AddEdge { from: NodeIndex, to: NodeIndex },
    RemoveEdge { from: NodeIndex, to: NodeIndex },
    RemoveNode(NodeIndex),
    List,
    Help,
    Quit,
}

fn parse_index(token: Option<&str>, what: &str) -> Result<NodeIndex> {
    let Some(token) = token else {
        bail!("missing {}", what);
    };
    let index: usize = token
        .parse()
        .with_context(|| format!("invalid {} '{}'", what, token))?;
    Ok(NodeIndex::new(index))
}

fn parse_command(line: &str) -> Result<ShellCommand> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        bail!("empty command");
    };

    let command = match verb {
        "node" => {
            let Some(raw) = tokens.next() else {
                bail!("missing value");
            };
            let value: f64 = raw
                .parse()
                .with_context(|| format!("invalid value '{}'", raw))?;
            let parent = match tokens.next() {
                Some(token) => Some(parse_index(Some(token), "parent")?),
                None => None,
            };
            ShellCommand::AddNode { value, parent }
        }
        "edge" => ShellCommand::AddEdge {
            from: parse_index(tokens.next(), "source")?,
            to: parse_index(tokens.next(), "target")?,
        },
        "unedge" => ShellCommand::RemoveEdge {
            from: parse_index(tokens.next(), "source")?,
            to: parse_index(tokens.next(), "target")?,
        },
        "rm" => ShellCommand::RemoveNode(parse_index(tokens.next(), "node")?),
        "list" | "ls" => ShellCommand::List,
        "help" | ":help" | ":h" => ShellCommand::Help,
        "quit" | "exit" | ":quit" | ":q" => ShellCommand::Quit,
        other => bail!("unknown command '{}'", other),
    };

    if let Some(extra) = tokens.next() {
        bail!("unexpected argument '{}'", extra);
    }
    Ok(command)
}

fn run_shell(
    store: &mut GraphStore,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out, "Adjgraph Interactive Shell")?;
    writeln!(out, "Type help for commands, quit to exit.\n")?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Error: {:#}", e)?;
                continue;
            }
        };

        match command {
            ShellCommand::AddNode { value, parent } => {
                let (node, result) = store.add_node(value, parent);
                writeln!(out, "node #{} status={}", node.as_usize(), GraphStatus::from(&result))?;
            }
            ShellCommand::AddEdge { from, to } => {
                let result = store.add_edge(from, to);
                writeln!(out, "status={}", GraphStatus::from(&result))?;
            }
            ShellCommand::RemoveEdge { from, to } => {
                let result = store.remove_edge(from, to);
                writeln!(out, "status={}", GraphStatus::from(&result))?;
            }
            ShellCommand::RemoveNode(node) => {
                let result = store.remove_node(node);
                writeln!(out, "status={}", GraphStatus::from(&result))?;
            }
            ShellCommand::List => print_graph(store, out, format)?,
            ShellCommand::Help => {
                writeln!(out, "Commands:")?;
                writeln!(out, "  node <value> [parent]  Add a node, optionally under a parent")?;
                writeln!(out, "  edge <s> <t>           Add an edge")?;
                writeln!(out, "  unedge <s> <t>         Remove the first matching edge")?;
                writeln!(out, "  rm <n>                 Remove a node and reindex")?;
                writeln!(out, "  list                   Print the graph")?;
                writeln!(out, "  quit                   Exit shell")?;
            }
            ShellCommand::Quit => break,
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_output(script: &str) -> (GraphStore, String) {
        let mut store = GraphStore::new();
        let mut out = Vec::new();
        run_shell(&mut store, script.as_bytes(), &mut out, OutputFormat::Plain).unwrap();
        (store, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("node 1.5").unwrap(),
            ShellCommand::AddNode { value: 1.5, parent: None }
        );
        assert_eq!(
            parse_command("node -2 0").unwrap(),
            ShellCommand::AddNode { value: -2.0, parent: Some(NodeIndex::new(0)) }
        );
        assert_eq!(
            parse_command("edge 0 1").unwrap(),
            ShellCommand::AddEdge { from: NodeIndex::new(0), to: NodeIndex::new(1) }
        );
        assert_eq!(parse_command("rm 3").unwrap(), ShellCommand::RemoveNode(NodeIndex::new(3)));
        assert_eq!(parse_command("quit").unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("node").is_err());
        assert!(parse_command("node abc").is_err());
        assert!(parse_command("edge 0").is_err());
        assert!(parse_command("edge -1 0").is_err());
        assert!(parse_command("rm 1 2").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn test_demo_output() {
        let mut store = GraphStore::new();
        let mut out = Vec::new();
        run_demo(&mut store, &mut out, OutputFormat::Plain).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "Added root node #0 status=Success\n\
                        Added child node #1 status=Success\n\
                        Added edge (0,1) status=Success\n\
                        Graph Nodes and Adjacency Lists:\n\
                        Node 0 (1.23) -> 1 1 \n\
                        Node 1 (4.56) -> \n\
                        Removed edge status=Success\n\
                        Removed node #1 status=Success\n\
                        Graph Nodes and Adjacency Lists:\n\
                        Node 0 (1.23) -> \n";
        assert_eq!(text, expected);
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_shell_session() {
        let script = "node 1\nnode 2 0\nnode 3 7\nedge 1 1\nunedge 0 2\nrm 0\nbogus\nlist\nquit\nnode 9\n";
        let (store, text) = shell_output(script);

        assert!(text.contains("node #2 status=InvalidParent"));
        assert!(text.contains("status=InvalidEdge"));
        assert!(text.contains("Error: unknown command 'bogus'"));
        assert!(text.contains("Node 0 (2) -> 0 \n"));
        assert!(text.ends_with("Bye!\n"));

        // Commands after quit are not executed
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_table_format() {
        let mut store = GraphStore::new();
        store.add_node(1.0, None);
        store.add_node(2.0, Some(NodeIndex::new(0)));

        let mut out = Vec::new();
        print_graph(&store, &mut out, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Targets"));
        assert!(text.contains("2 node(s), 1 edge(s)"));

        let mut out = Vec::new();
        print_graph(&GraphStore::new(), &mut out, OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(empty graph)\n");
    }
}
