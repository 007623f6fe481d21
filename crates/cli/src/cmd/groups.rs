use std::path::Path;

use favlink_core::favorites::{FavoritesPage, Group, Link};
use favlink_core::page::{PageLocator, read_page};
use serde::Serialize;

use super::{fail, load_config};
use crate::GroupsArgs;

/// Group with its links, for JSON output.
#[derive(Debug, Serialize)]
pub struct GroupOutput {
    pub name: String,
    pub links: Vec<LinkOutput>,
}

#[derive(Debug, Serialize)]
pub struct LinkOutput {
    pub name: String,
    pub address: String,
}

impl From<Link> for LinkOutput {
    fn from(link: Link) -> Self {
        Self { name: link.display_name, address: link.address }
    }
}

impl GroupOutput {
    fn from_group(page: &FavoritesPage, group: Group) -> Self {
        let links = page.links(&group).into_iter().map(LinkOutput::from).collect();
        Self { name: group.name, links }
    }
}

pub fn run(config: Option<&Path>, args: &GroupsArgs) {
    let cfg = load_config(config, "groups");

    let page_path = match PageLocator::new(&cfg).peek(args.output.as_deref()) {
        Ok(p) => p.read_path,
        Err(e) => fail("groups", e),
    };

    let input = match read_page(&page_path) {
        Ok(s) => s,
        Err(e) => fail("groups", e),
    };

    let page = match FavoritesPage::parse(&input, cfg.layout.clone()) {
        Ok(p) => p,
        Err(e) => fail("groups", e),
    };

    if args.json {
        let output: Vec<GroupOutput> =
            page.groups().into_iter().map(|g| GroupOutput::from_group(&page, g)).collect();
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("groups", e),
        }
        return;
    }

    let groups = page.list_groups();
    if groups.is_empty() {
        println!("(no groups found)");
        return;
    }
    for group in &groups {
        println!("{group}");
    }
    println!("-- {} groups --", groups.len());
}
