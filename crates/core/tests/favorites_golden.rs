use insta::assert_snapshot;
use favlink_core::favorites::apply_new_link;

#[test]
fn golden_link_into_existing_group() {
    let input = include_str!("fixtures/favorites_simple.html");

    let out = apply_new_link(input, "Tools", "https://new.test", "New Tool").unwrap();

    assert_snapshot!("link_into_existing_group", out.content);
}

#[test]
fn golden_link_into_new_group() {
    let input = include_str!("fixtures/favorites_simple.html");

    let out = apply_new_link(input, "Music", "https://m.test", "M").unwrap();

    assert_snapshot!("link_into_new_group", out.content);
}

#[test]
fn golden_messy_page_is_normalized() {
    let input = include_str!("fixtures/favorites_messy.html");

    let out = apply_new_link(input, "Dev", "https://x.test", "X").unwrap();

    assert_snapshot!("messy_page_normalized", out.content);
}
