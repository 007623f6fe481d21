use std::path::Path;

use favlink_core::config::{ConfigLoader, default_config_path};
use favlink_core::page::{PageLocator, check_page};

pub fn run(config: Option<&Path>) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL favlink doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    if let Err(e) = crate::logging::init(&rc) {
        println!("FAIL favlink doctor");
        println!("failed to open log file: {e}");
        std::process::exit(1);
    }

    let locator = PageLocator::new(&rc);
    let state = match locator.state() {
        Ok(s) => s,
        Err(e) => {
            println!("FAIL favlink doctor");
            println!("{e}");
            std::process::exit(1);
        }
    };
    let page = match locator.peek(None) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL favlink doctor");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("OK   favlink doctor");
    println!("path: {}", rc.config_path.display());
    println!("default_page: {}", rc.default_page.display());
    println!("template: {}", rc.template.display());
    println!("state_file: {}", rc.state_file.display());
    println!("custom_page: {}", state.custom_path().unwrap_or("(none)"));
    println!("page: {}", page.read_path.display());
    match check_page(&page.read_path) {
        Ok(()) => println!("page_status: ok"),
        Err(e) => println!("page_status: {e}"),
    }
    println!(
        "layout: {}.{} > {}",
        rc.layout.group_tag,
        rc.layout.group_class.split_ascii_whitespace().collect::<Vec<_>>().join("."),
        rc.layout.heading_tag
    );
}
