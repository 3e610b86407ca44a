use adjgraph::{AdjList, RenderOptions};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "adjgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Build a graph from an edge list and print it as DOT
    Render {
        /// Comma-separated edges, e.g. `0:2,1:3,1:4`
        edges: String,

        /// Build a directed graph
        #[arg(long, default_value_t = false)]
        directed: bool,

        /// Render options as JSON, e.g. `{"strict": true}`
        #[arg(long)]
        options: Option<String>,

        /// Also print the component labels as JSON
        #[arg(long, default_value_t = false)]
        components: bool,
    },
}

const BENCHES: &[&str] = &["adj_list_benchmark", "components_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Render {
            edges,
            directed,
            options,
            components,
        } => render(&edges, directed, options.as_deref(), components)?,
    }

    Ok(())
}

fn parse_edges(list: &str) -> Result<Vec<(i64, i64)>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| -> Result<(i64, i64)> {
            let (x, y) = pair
                .split_once(':')
                .with_context(|| format!("edge `{pair}` is not of the form X:Y"))?;
            let x = x.trim().parse::<i64>().with_context(|| format!("bad source in `{pair}`"))?;
            let y = y.trim().parse::<i64>().with_context(|| format!("bad target in `{pair}`"))?;
            Ok((x, y))
        })
        .collect()
}

fn render(list: &str, directed: bool, options: Option<&str>, components: bool) -> Result<()> {
    let mut graph = AdjList::new(directed);
    for (x, y) in parse_edges(list)? {
        graph.try_add_edge(x, y)?;
    }

    let options = match options {
        Some(json) => RenderOptions::from_json(json)?,
        None => RenderOptions::default(),
    };

    println!("{}", graph.render_with(&options));
    if components {
        println!("{}", serde_json::to_string(&graph.components())?);
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    for bench in BENCHES {
        println!("\n>>> {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {}", bench))?;

        if !status.success() {
            anyhow::bail!("Benchmark {} failed", bench);
        }
        println!("Finished {} in {:.2?}", bench, start.elapsed());
    }

    Ok(())
}

#[derive(Serialize)]
struct Summary {
    workload: String,
    mean_ns: f64,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_dir = Path::new("benchmark_results");
    fs::create_dir_all(report_dir)?;

    use std::io::Write;
    let mut file = fs::File::create(report_dir.join("report.md"))?;
    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;
    for (workload, mean_ns) in &results {
        writeln!(file, "| {} | {:.0} ns | {:.2} |", workload, mean_ns, 1e9 / mean_ns)?;
    }

    let summary: Vec<_> = results
        .iter()
        .map(|(workload, &mean_ns)| Summary {
            workload: workload.clone(),
            mean_ns,
        })
        .collect();
    fs::write(
        report_dir.join("report.json"),
        serde_json::to_string_pretty(&summary)?,
    )?;

    println!("Report written to {}", report_dir.display());
    Ok(())
}

/// Collects `new/estimates.json` mean times keyed by the workload path under `root`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload_dir) = run_dir.parent() else { continue };
        let Ok(workload) = workload_dir.strip_prefix(root) else { continue };

        let mean = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64());

        if let Some(mean_ns) = mean.filter(|&m| m > 0.0) {
            results.insert(workload.display().to_string(), mean_ns);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edge_lists() {
        assert_eq!(parse_edges("0:2, 1:3,").unwrap(), vec![(0, 2), (1, 3)]);
        assert_eq!(parse_edges("-1:4").unwrap(), vec![(-1, 4)]);
        assert!(parse_edges("0:2,13").is_err());
        assert!(parse_edges("a:1").is_err());
    }

    #[test]
    fn render_rejects_negative_vertices() {
        let err = render("0:1,-2:3", false, None, false).unwrap_err();
        assert!(err.to_string().contains("invalid vertex index -2"));
    }

    #[test]
    fn render_rejects_misspelled_options() {
        let err = render("0:1", false, Some(r#"{"stict": true}"#), false).unwrap_err();
        assert!(err.to_string().starts_with("invalid render options:"));
    }
}
