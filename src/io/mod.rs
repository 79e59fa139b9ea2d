use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::str::FromStr;

use anyhow::{bail, Context};

use apsp::all_pairs::DiGraph;
use apsp::{Arc, Vertex};

/// Reads an instance from the given file, or from standard input when no
/// path is given.
pub fn load_instance(path: Option<&str>) -> anyhow::Result<DiGraph<i64>> {
    match path {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("cannot open instance file {}", path))?;
            read_graph(BufReader::new(f))
        }
        None => read_graph(stdin().lock()),
    }
}

/// Instance format: two integers `V` and `E`, then `E` triples `u v w`, all
/// whitespace-separated. Endpoints are 1-based on the wire and converted to
/// 0-based indices; each triple encodes one directed arc (the forward
/// direction only). Weights fit `i32` and are widened to `i64` before any
/// accumulation.
pub fn read_graph(mut reader: impl BufRead) -> anyhow::Result<DiGraph<i64>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("reading instance")?;
    let mut tokens = input.split_ascii_whitespace();

    let num_nodes: Vertex = next_token(&mut tokens, "number of vertices")?;
    let num_arcs: usize = next_token(&mut tokens, "number of arcs")?;

    let mut arcs = Vec::with_capacity(num_arcs);
    for i in 0..num_arcs {
        let from: Vertex = next_token(&mut tokens, "arc tail")?;
        let to: Vertex = next_token(&mut tokens, "arc head")?;
        let w: i32 = next_token(&mut tokens, "arc weight")?;
        if from < 1 || from > num_nodes || to < 1 || to > num_nodes {
            bail!(
                "arc {} has endpoints {} {} outside 1..={}",
                i + 1,
                from,
                to,
                num_nodes
            );
        }
        arcs.push(Arc {
            from: from - 1,
            to: to - 1,
            w: w as i64,
        });
    }

    Ok(DiGraph::builder()
        .set_num_nodes(num_nodes)
        .add_arcs(arcs)
        .build())
}

fn next_token<'a, T>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = tokens
        .next()
        .with_context(|| format!("unexpected end of input, missing {}", what))?;
    token
        .parse::<T>()
        .with_context(|| format!("invalid {}: {:?}", what, token))
}
