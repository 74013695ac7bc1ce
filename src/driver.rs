use std::fmt::Display;
use ordtree::{OrderedTree, Visit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::Config;
use log::*;

/// Draws `cfg.count` keys from `cfg.min_key..cfg.max_key`. The range must be
/// non-empty, see [`Config::validate`].
pub fn generate_keys(cfg: &Config, rng: &mut impl Rng) -> Vec<i64> {
    (0..cfg.count)
        .map(|_| rng.gen_range(cfg.min_key..cfg.max_key))
        .collect()
}

pub fn build_tree(keys: &[i64]) -> OrderedTree<i64> {
    let mut tree = OrderedTree::new();
    for &key in keys {
        debug!("randValue is {}", key);
        tree.insert(key);
    }
    tree
}

fn or_null<K: Display>(key: Option<&K>) -> String {
    match key {
        Some(key) => key.to_string(),
        None => "null".to_string(),
    }
}

/// Renders a visit as `key->(left, right)`, with `null` for a missing child.
pub fn format_visit<K: Display>(visit: &Visit<'_, K>) -> String {
    format!("{}->({}, {})", visit.key, or_null(visit.left), or_null(visit.right))
}

pub fn report<K: Display>(tree: &OrderedTree<K>) -> Vec<String> {
    tree.traverse()
        .map(|visit| format_visit(&visit))
        .collect()
}

/// Encodes the tree as JSON and parses it back into a fresh tree.
pub fn round_trip(tree: &OrderedTree<i64>) -> anyhow::Result<(String, OrderedTree<i64>)> {
    let json = serde_json::to_string(tree)?;
    let restored = serde_json::from_str(&json)?;
    Ok((json, restored))
}

#[derive(Debug)]
pub struct Output {
    pub tree: OrderedTree<i64>,
    pub report: Vec<String>,
    pub json: String,
    pub restored: Vec<String>,
}

impl Output {
    /// Layout of the generated tree, its JSON form, then the layout of the
    /// tree parsed back from that JSON.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.report.clone();
        lines.push(format!("json:{}", self.json));
        lines.push("restored:".to_string());
        lines.extend(self.restored.iter().cloned());
        lines
    }
}

pub fn run_with_rng(cfg: &Config, rng: &mut impl Rng) -> anyhow::Result<Output> {
    cfg.validate()?;
    let keys = generate_keys(cfg, rng);
    let tree = build_tree(&keys);
    info!("inserted {} keys, depth {}", tree.len(), tree.depth());
    let layout = report(&tree);

    let (json, parsed) = round_trip(&tree)?;
    debug!("parsed back {} keys", parsed.len());
    Ok(Output {
        report: layout,
        restored: report(&parsed),
        tree,
        json,
    })
}

pub fn run(cfg: &Config) -> anyhow::Result<Vec<String>> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(run_with_rng(cfg, &mut rng)?.lines())
}
