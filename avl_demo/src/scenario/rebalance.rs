use anyhow::{Result, ensure};
use avl_tree::AVLTreeMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::height_bound;
use crate::Printer;

/// Inserts the letters A through Y in a seeded random order, checking the height
/// bound after every insertion.
pub fn run(printer: &Printer, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut letters: Vec<char> = ('A'..='Y').collect();
    letters.shuffle(&mut rng);

    let mut tree = AVLTreeMap::new();
    for (value, key) in letters.iter().copied().enumerate() {
        ensure!(tree.insert(key, value), "{key} inserted twice");
        printer.tree(&format!("after inserting {key}"), &tree);

        let bound = height_bound(tree.len());
        ensure!(tree.height() <= bound, "height {} exceeds {bound} with {} entries", tree.height(), tree.len());
    }

    let keys: String = tree.keys().collect();
    ensure!(keys == "ABCDEFGHIJKLMNOPQRSTUVWXY", "keys are out of order: {keys}");
    Ok(())
}
