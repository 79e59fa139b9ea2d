use std::io::{stdout, BufWriter, Write};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, log_enabled, Level};
use took::Timer;

use crate::cli::ProgramArguments;
use apsp::all_pairs::johnson::solve;
use apsp::all_pairs::DiGraph;

mod cli;
mod io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ProgramArguments::parse();

    let load_timer = Timer::new();
    let graph = io::load_instance(args.instance.as_deref())?;
    info!(
        "instance with {} vertices and {} arcs loaded after {}",
        graph.num_nodes(),
        graph.num_arcs(),
        load_timer.took()
    );
    if log_enabled!(Level::Debug) {
        dump_adjacency(&graph);
    }

    let solve_timer = Timer::new();
    match solve(graph) {
        None => {
            info!("negative cycle detected after {}", solve_timer.took());
            println!("Negative cycle");
        }
        Some(matrix) => {
            info!("all-pairs distances computed after {}", solve_timer.took());
            let out = stdout();
            let mut out = BufWriter::new(out.lock());
            for row in matrix.iter_rows() {
                writeln!(out, "{}", format_row(row))?;
            }
        }
    }
    Ok(())
}

fn format_row(row: &[Option<i64>]) -> String {
    row.iter()
        .map(|dist| match dist {
            Some(dist) => dist.to_string(),
            None => "inf".to_string(),
        })
        .join(" ")
}

fn dump_adjacency(graph: &DiGraph<i64>) {
    for from in 0..graph.num_nodes() {
        for arc in graph.iter_outgoing_arcs(from) {
            debug!("arc {} -> {} with weight {}", arc.from + 1, arc.to + 1, arc.w);
        }
    }
}
