use anyhow::{Result, ensure};
use avl_tree::{AVLTreeError, AVLTreeMap};

use crate::Printer;

const LETTERS: [(&str, i32); 10] = [
    ("F", 5),
    ("B", 1),
    ("H", 7),
    ("A", 0),
    ("D", 3),
    ("G", 6),
    ("I", 8),
    ("C", 2),
    ("E", 4),
    ("J", 9),
];

const TEARDOWN: [&str; 10] = ["J", "B", "F", "D", "A", "E", "I", "G", "C", "H"];

/// Exercises every map operation on a small, hand-built tree of letters.
pub fn run(printer: &Printer) -> Result<()> {
    let empty: AVLTreeMap<String, i32> = AVLTreeMap::new();
    printer.tree("empty tree", &empty);
    ensure!(empty.is_empty() && empty.height() == 0, "a new tree must be empty");

    let mut tree = AVLTreeMap::new();
    for (key, value) in LETTERS {
        ensure!(tree.insert(key.to_string(), value), "{key} should be new");
    }
    printer.tree("letter tree", &tree);
    ensure!(tree.len() == 10, "expected 10 entries, found {}", tree.len());
    ensure!(tree.height() == 3, "expected height 3, found {}", tree.height());

    let copy = tree.clone();
    tree.clear();
    printer.tree("cleared original", &tree);
    printer.tree("copy", &copy);
    ensure!(tree.is_empty(), "clear must empty the tree");
    ensure!(copy.len() == 10, "clearing the original must not touch the copy");
    let mut tree = copy;

    printer.line(format_args!("contains A: {}", tree.contains_key("A")));
    printer.line(format_args!("contains X: {}", tree.contains_key("X")));
    ensure!(tree.contains_key("A") && !tree.contains_key("X"), "membership is wrong");

    ensure!(!tree.insert("A".to_string(), 100), "duplicate insert must be refused");
    ensure!(tree["A"] == 0, "duplicate insert must keep the first value");
    ensure!(!tree.remove("X"), "removing an absent key must report false");

    *tree.try_index_mut("D")? = 1337;
    printer.line(format_args!("D after update: {}", tree["D"]));
    ensure!(tree.get("D") == Some(&1337), "update through try_index_mut was lost");

    match tree.try_index("X") {
        Err(error @ AVLTreeError::KeyNotFound) => printer.line(format_args!("lookup of X failed: {error}")),
        other => anyhow::bail!("lookup of X should fail, got {other:?}"),
    }

    let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
    printer.line(format_args!("keys: {}", keys.join(" ")));
    ensure!(keys == ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"], "keys are out of order");

    let everything = tree.find_range("A", "J");
    printer.line(format_args!("values in A..=J: {everything:?}"));
    ensure!(everything.len() == 10, "full range missed entries");

    let middle = tree.find_range("E", "H");
    printer.line(format_args!("values in E..=H: {middle:?}"));
    ensure!(middle == [&4, &5, &6, &7], "E..=H should yield 4 5 6 7");

    for (removed, key) in TEARDOWN.iter().enumerate() {
        ensure!(tree.remove(*key), "{key} should be present");
        printer.tree(&format!("after removing {key}"), &tree);
        ensure!(tree.len() == TEARDOWN.len() - removed - 1, "size is wrong after removing {key}");
        for survivor in &TEARDOWN[removed + 1..] {
            ensure!(tree.contains_key(*survivor), "{survivor} lost after removing {key}");
        }
    }
    ensure!(tree.is_empty() && tree.height() == 0, "teardown must leave an empty tree");

    Ok(())
}
