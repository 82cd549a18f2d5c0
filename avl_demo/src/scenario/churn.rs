use anyhow::{Result, ensure};
use avl_tree::AVLTreeMap;
use tracing::debug;

/// Repeatedly fills a tree, empties it key by key and fills it again.
pub fn run(trials: usize, tree_size: u32) -> Result<()> {
    let expected = usize::try_from(tree_size)?;

    for trial in 0..trials {
        let mut tree = AVLTreeMap::new();
        for key in 0..tree_size {
            tree.insert(key, key);
        }
        ensure!(tree.len() == expected, "trial {trial}: {} entries after filling", tree.len());

        for key in 0..tree_size {
            ensure!(tree.remove(&key), "trial {trial}: {key} missing");
        }
        ensure!(tree.is_empty(), "trial {trial}: {} entries after emptying", tree.len());

        for key in 0..tree_size {
            tree.insert(key, key);
        }
        ensure!(tree.len() == expected, "trial {trial}: {} entries after refilling", tree.len());
        debug!(trial, height = tree.height(), "trial complete");
    }
    Ok(())
}
