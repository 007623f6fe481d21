use std::fs;
use std::path::Path;

use favlink_core::config::{LoggingConfig, ResolvedConfig};
use favlink_core::favorites::PageLayout;
use favlink_core::page::{BUILTIN_TEMPLATE, PageError, PageLocator, PageSource, PageState};
use tempfile::tempdir;

const TEMPLATE: &str = "<html><body><div></div></body></html>";

fn config(root: &Path) -> ResolvedConfig {
    fs::write(root.join("template.html"), TEMPLATE).unwrap();
    fs::write(root.join("default.html"), "<html><body><div>default</div></body></html>").unwrap();
    ResolvedConfig {
        config_path: root.join("config.toml"),
        default_page: root.join("default.html"),
        template: root.join("template.html"),
        state_file: root.join("state.toml"),
        layout: PageLayout::default(),
        logging: LoggingConfig::default(),
    }
}

#[test]
fn no_output_and_no_state_uses_default() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());

    let page = PageLocator::new(&cfg).resolve(None).unwrap();

    assert_eq!(page.source, PageSource::Default);
    assert_eq!(page.read_path, cfg.default_page);
    assert_eq!(page.write_path, cfg.default_page);
    assert!(!cfg.state_file.exists());
}

#[test]
fn no_output_uses_stored_page() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let custom = tmp.path().join("custom.html");
    PageState { custom_path: Some(format!("  {}  ", custom.display())) }
        .save(&cfg.state_file)
        .unwrap();

    let page = PageLocator::new(&cfg).resolve(Some("   ")).unwrap();

    assert_eq!(page.source, PageSource::Stored);
    assert_eq!(page.read_path, custom);
}

#[test]
fn first_output_is_remembered_and_seeded() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let custom = tmp.path().join("pages/custom.html");

    let page = PageLocator::new(&cfg).resolve(Some(&custom.to_string_lossy())).unwrap();

    assert_eq!(page.source, PageSource::Override { remembered: true, seeded: true });
    assert_eq!(page.read_path, custom);
    assert_eq!(fs::read_to_string(&custom).unwrap(), TEMPLATE);

    let state = PageState::load(&cfg.state_file).unwrap();
    assert_eq!(state.custom_path(), Some(custom.to_string_lossy().as_ref()));

    // Later runs without --output keep using it.
    let again = PageLocator::new(&cfg).resolve(None).unwrap();
    assert_eq!(again.source, PageSource::Stored);
    assert_eq!(again.read_path, custom);
}

#[test]
fn output_equal_to_stored_changes_nothing() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let custom = tmp.path().join("custom.html");
    fs::write(&custom, "<html>mine</html>").unwrap();
    PageState { custom_path: Some(custom.to_string_lossy().into_owned()) }
        .save(&cfg.state_file)
        .unwrap();

    let arg = format!(" {} ", custom.display());
    let page = PageLocator::new(&cfg).resolve(Some(&arg)).unwrap();

    assert_eq!(page.source, PageSource::Stored);
    assert_eq!(fs::read_to_string(&custom).unwrap(), "<html>mine</html>");
}

#[test]
fn different_output_replaces_stored_without_overwriting() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    PageState { custom_path: Some(tmp.path().join("old.html").to_string_lossy().into_owned()) }
        .save(&cfg.state_file)
        .unwrap();
    let existing = tmp.path().join("existing.html");
    fs::write(&existing, "<html>keep</html>").unwrap();

    let page = PageLocator::new(&cfg).resolve(Some(&existing.to_string_lossy())).unwrap();

    assert_eq!(page.source, PageSource::Override { remembered: true, seeded: false });
    assert_eq!(fs::read_to_string(&existing).unwrap(), "<html>keep</html>");
    let state = PageState::load(&cfg.state_file).unwrap();
    assert_eq!(state.custom_path(), Some(existing.to_string_lossy().as_ref()));
}

#[test]
fn missing_template_falls_back_to_builtin() {
    let tmp = tempdir().unwrap();
    let mut cfg = config(tmp.path());
    cfg.template = tmp.path().join("no-such-template.html");
    let custom = tmp.path().join("custom.html");

    PageLocator::new(&cfg).resolve(Some(&custom.to_string_lossy())).unwrap();

    assert_eq!(fs::read_to_string(&custom).unwrap(), BUILTIN_TEMPLATE);
}

#[test]
fn peek_has_no_side_effects() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let custom = tmp.path().join("custom.html");

    let page = PageLocator::new(&cfg).peek(Some(&custom.to_string_lossy())).unwrap();

    assert_eq!(page.read_path, custom);
    assert!(!custom.exists());
    assert!(!cfg.state_file.exists());
    assert_eq!(PageLocator::new(&cfg).peek(None).unwrap().source, PageSource::Default);
}

#[test]
fn output_with_wrong_extension_is_not_remembered() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let typo = tmp.path().join("fav.htm");

    let err = PageLocator::new(&cfg).resolve(Some(&typo.to_string_lossy())).unwrap_err();

    assert!(matches!(err, PageError::WrongExtension(_)));
    assert!(!typo.exists());
    assert!(!cfg.state_file.exists());
    let page = PageLocator::new(&cfg).resolve(None).unwrap();
    assert_eq!(page.source, PageSource::Default);
}
