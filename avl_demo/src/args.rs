use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
pub struct Options {
    /// Which scenario to run.
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Seed for the shuffles. A random seed is drawn and logged when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of fill/empty/refill rounds in the churn scenario.
    #[arg(short, long, default_value_t = 1000)]
    pub trials: usize,

    /// Number of keys inserted per churn round.
    #[arg(long, default_value_t = 100)]
    pub tree_size: u32,

    /// Do not print tree drawings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter, e.g. `debug` or `avl_tree=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Basic,
    Rebalance,
    Churn,
    All,
}
