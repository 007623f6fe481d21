use std::path::Path;

use favlink_core::favorites::FavoritesEditor;
use favlink_core::page::{PageLocator, PageSource, read_page, write_page};
use tracing::debug;

use super::{fail, load_config};
use crate::AddArgs;

pub fn run(config: Option<&Path>, args: &AddArgs) {
    // 1. Load config
    let cfg = load_config(config, "add");

    // 2. Resolve the page, remembering --output
    let page = match PageLocator::new(&cfg).resolve(args.output.as_deref()) {
        Ok(p) => p,
        Err(e) => fail("add", e),
    };
    debug!(page = %page.read_path.display(), source = ?page.source, "resolved page");

    // 3. Read it
    let input = match read_page(&page.read_path) {
        Ok(s) => s,
        Err(e) => fail("add", e),
    };

    let editor = FavoritesEditor::new(cfg.layout.clone());

    // 4. Optionally show what is there
    if args.list {
        match editor.list_groups(&input) {
            Ok(groups) => {
                println!("These groups are already present in the page:");
                for group in groups {
                    println!("\t{group}");
                }
                println!();
            }
            Err(e) => fail("add", e),
        }
    }

    // 5. Insert
    let outcome = match editor.apply_new_link(&input, &args.group, &args.link, &args.name) {
        Ok(o) => o,
        Err(e) => fail("add", e),
    };

    // 6. Write back
    if let Err(e) = write_page(&page.write_path, &outcome.content) {
        fail("add", e);
    }

    println!("OK   favlink add");
    if outcome.group_created {
        println!("group: {} (new)", outcome.group);
    } else {
        println!("group: {}", outcome.group);
    }
    println!("link:  {} -> {}", args.name, args.link);
    println!("page:  {}", page.write_path.display());
    if let PageSource::Override { seeded: true, .. } = page.source {
        println!("(created from template)");
    }
}
