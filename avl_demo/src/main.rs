use std::fmt::Display;

use anyhow::Result;
use avl_tree::AVLTreeMap;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod scenario;

use args::{Options, Scenario};

fn main() -> Result<()> {
    let options = Options::parse();

    let filter = match &options.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    };
    tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

    let seed = options.seed.unwrap_or_else(rand::random);
    let printer = Printer { quiet: options.quiet };

    if matches!(options.scenario, Scenario::Basic | Scenario::All) {
        scenario::basic::run(&printer)?;
    }
    if matches!(options.scenario, Scenario::Rebalance | Scenario::All) {
        info!(seed, "running rebalance scenario");
        scenario::rebalance::run(&printer, seed)?;
    }
    if matches!(options.scenario, Scenario::Churn | Scenario::All) {
        info!(trials = options.trials, tree_size = options.tree_size, "running churn scenario");
        scenario::churn::run(options.trials, options.tree_size)?;
    }

    info!("all scenarios passed");
    Ok(())
}

/// Prints tree summaries and drawings to stdout.
pub struct Printer {
    quiet: bool,
}

impl Printer {
    pub fn tree<K: Display, V: Display>(&self, label: &str, tree: &AVLTreeMap<K, V>) {
        println!("{label}: size {}, height {}", tree.len(), tree.height());
        if !self.quiet {
            print!("{tree}");
            println!();
        }
    }

    pub fn line(&self, text: impl Display) {
        println!("{text}");
    }
}
