//! Check command implementation: master data diagnosis.
//!
//! Loads each catalog on its own and reports entry counts, so broken or
//! misplaced master files are visible before a calculate run.

use anyhow::Result;
use mairate_core::Catalog;

pub fn run(current_catalog: &str, legacy_catalog: &str) -> Result<()> {
    check_one("current", current_catalog);
    check_one("legacy", legacy_catalog);
    Ok(())
}

fn check_one(label: &str, path: &str) {
    match Catalog::load(path) {
        Ok(catalog) if catalog.is_empty() => {
            println!("{:>8}: {} - EMPTY (missing file or no usable rows)", label, path);
        }
        Ok(catalog) => println!("{:>8}: {} - {} charts", label, path, catalog.len()),
        Err(e) => println!("{:>8}: {} - FAILED: {}", label, path, e),
    }
}
