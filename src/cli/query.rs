//! Query commands (total, hops, chain)

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{common_ancestor, total_orbits, transfer_hops, Body, OrbitGraph};
use crate::storage::MapFile;

/// Reads the map and indexes it, reporting its shape in verbose mode
fn load(output: &Output, map: &MapFile) -> Result<OrbitGraph> {
    output.verbose_ctx("load", &format!("Reading orbit map: {}", map.path().display()));

    let graph = map.load_graph()?;
    output.verbose_ctx("load", &format!("Indexed {} bodies", graph.len()));

    if output.is_verbose() {
        let roots: Vec<_> = graph.roots().iter().map(|b| b.as_str()).collect();
        match roots.len() {
            1 => output.verbose_ctx("load", &format!("Root: {}", roots[0])),
            0 => output.verbose_ctx("load", "No root found"),
            n => output.verbose_ctx("load", &format!("{} roots: {}", n, roots.join(", "))),
        }
    }

    Ok(graph)
}

/// Show the total number of direct and indirect orbits
pub fn total(output: &Output, map: &MapFile) -> Result<()> {
    let graph = load(output, map)?;
    let total = total_orbits(&graph).context("Failed to count orbits")?;

    output.result(
        &format!("Total: {}", total),
        &serde_json::json!({ "total": total }),
    );

    Ok(())
}

/// Show the transfers between the bodies `from` and `to` orbit
pub fn hops(output: &Output, map: &MapFile, from: &Body, to: &Body) -> Result<()> {
    let graph = load(output, map)?;
    let context = || format!("Failed to count transfers from {} to {}", from, to);

    if output.is_verbose() {
        let common = common_ancestor(&graph, from, to).with_context(context)?;
        output.verbose_ctx("hops", &format!("Nearest common ancestor: {}", common));
    }

    let hops = transfer_hops(&graph, from, to).with_context(context)?;

    output.result(
        &format!("Hops: {}", hops),
        &serde_json::json!({
            "from": from,
            "to": to,
            "hops": hops,
        }),
    );

    Ok(())
}

/// Show the ancestors of `body`, nearest first
pub fn chain(output: &Output, map: &MapFile, body: &Body, stop: Option<&Body>) -> Result<()> {
    let graph = load(output, map)?;
    let chain = graph
        .chain(body, stop)
        .with_context(|| format!("Failed to walk ancestors of {}", body))?;

    output.verbose_ctx("chain", &format!("{} has {} ancestors in chain", body, chain.len()));

    let text = if chain.is_empty() {
        "Chain: (root)".to_string()
    } else {
        let names: Vec<_> = chain.iter().map(|b| b.as_str()).collect();
        format!("Chain: {}", names.join(" -> "))
    };

    output.result(
        &text,
        &serde_json::json!({
            "body": body,
            "stop": stop,
            "chain": chain,
            "length": chain.len(),
        }),
    );

    Ok(())
}
