use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{Page, banner_block, render, tracking_url};
use crate::types::{Fragment, GroupId};

fn runner() -> TestRunner {
    TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    })
}

fn page(title: &str, id: Option<u64>, content: &str, banner: Option<&str>) -> Page {
    Page {
        title: title.to_string(),
        group_id: id.map(GroupId::new),
        content: Fragment::new(content),
        banner: banner.map(Fragment::new),
    }
}

#[test]
fn serial_lookup_example() {
    let html = render(&page("Serial Lookup", Some(310), "<P>Hello</P>", None));

    assert!(html.contains("<TITLE>Serial Lookup</TITLE>"));
    assert!(html.contains("sflogo.php?group_id=310&amp;type=1"));
    assert!(html.contains("<TD>\n<P>Hello</P>\n    </TD>"));
    assert!(!html.contains("<!-- banner -->"));
}

#[test]
fn title_is_substituted() {
    runner()
        .run(&".*", |title| {
            let html = render(&page(&title, None, "", None));
            let expected = format!("<TITLE>{title}</TITLE>");
            prop_assert!(html.contains(&expected));
            Ok(())
        })
        .unwrap();
}

#[test]
fn title_markup_is_kept_as_given() {
    let html = render(&page("Tom & Jerry <Tools>", Some(310), "", None));
    assert!(html.contains("<TITLE>Tom & Jerry <Tools></TITLE>"));
}

#[test]
fn group_id_lands_in_tracking_url() {
    runner()
        .run(&any::<u64>(), |id| {
            let html = render(&page("", Some(id), "", None));
            let expected = format!("?group_id={id}&amp;type=1\"");
            prop_assert!(html.contains(&expected));
            Ok(())
        })
        .unwrap();
}

#[test]
fn missing_group_id_leaves_parameter_blank() {
    assert_eq!(
        tracking_url(None),
        "http://sourceforge.net/sflogo.php?group_id=&type=1"
    );
    let html = render(&Page::default());
    assert!(html.contains("<TITLE></TITLE>"));
    assert!(html.contains("?group_id=&amp;type=1"));
}

#[test]
fn content_is_inlined_verbatim() {
    runner()
        .run(&".*", |content| {
            let html = render(&page("t", Some(1), &content, None));
            let start = html.find("<!-- center table -->").unwrap();
            let end = html.find("<!-- end center table -->").unwrap();
            prop_assert!(html[start..end].contains(content.as_str()));
            Ok(())
        })
        .unwrap();
}

#[test]
fn banner_follows_content_and_precedes_footer() {
    let html = render(&page("t", Some(1), "<P>main</P>", Some("<DIV>ad</DIV>")));
    let content = html.find("<P>main</P>").unwrap();
    let banner = html.find("<DIV>ad</DIV>").unwrap();
    let footer = html.find("<!-- footer table -->").unwrap();
    assert!(content < banner);
    assert!(banner < footer);
}

#[test]
fn absent_banner_removes_block_entirely() {
    runner()
        .run(&("[A-Za-z ]{0,12}", ".*", "[A-Za-z<>/ ]{1,24}"), |(title, content, banner)| {
            let with = render(&page(&title, Some(7), &content, Some(banner.as_str())));
            let without = render(&page(&title, Some(7), &content, None));
            let block = banner_block(Some(&Fragment::new(banner.clone())));
            prop_assert_eq!(with.replacen(&block, "", 1), without);
            Ok(())
        })
        .unwrap();
}

#[test]
fn render_is_idempotent() {
    runner()
        .run(
            &(".*", any::<Option<u64>>(), ".*", proptest::option::of(".*")),
            |(title, id, content, banner)| {
                let p = page(&title, id, &content, banner.as_deref());
                prop_assert_eq!(render(&p), render(&p.clone()));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn portal_links_are_fixed() {
    let html = render(&Page::default());
    for link in [
        "http://sourceforge.net/about.php",
        "http://sourceforge.net/partners.php",
        "http://sourceforge.net/contact.php",
        "http://sourceforge.net/account/logout.php",
        "http://sourceforge.net/images/sflogo2-steel.png",
        "http://sourceforge.net/images/valogo3.png",
    ] {
        assert!(html.contains(link), "missing {link}");
    }
}
