//! End-to-end filter behaviour through the public API.

mod common;

use actimg_core::activity_index::ActivityIndex;
use actimg_core::completion::CompletionState;
use actimg_core::config::FilterConfig;
use actimg_core::filter::{ActivityFilter, FilterOptions};
use actimg_core::snapshot::CourseSnapshot;

use common::RecordingHost;

const RESOURCE: &str = "https://lms.example.com/mod/resource/view.php?id=5";

fn run(host: &RecordingHost, html: &str) -> String {
    ActivityFilter::new(host, FilterConfig::default()).filter(html, &FilterOptions::new())
}

#[test]
fn no_course_context_returns_input_exactly() {
    let host = RecordingHost::new(None, 1).with_module(5, RESOURCE);
    let inputs = [
        r#"<a href="/mod/resource/view.php?id=5"><img src="r.png"></a>"#,
        "<p>unclosed <b>markup",
        "",
        "\u{feff}<div>bom</div>",
    ];
    for html in inputs {
        assert_eq!(run(&host, html), html);
    }
    assert_eq!(host.module_calls.get(), 0);
}

#[test]
fn unavailable_regardless_of_completion() {
    for state in [CompletionState::Incomplete, CompletionState::Complete] {
        let host = RecordingHost::new(Some(1), 1)
            .with_module(5, RESOURCE)
            .with_completion(5, 1, state, false);
        let out = run(&host, r#"<a href="/mod/resource/view.php?id=5"><img src="r.png"></a>"#);
        assert!(out.contains(
            r#"<span class="state-unavailable" title="Not available"><i class="fa fa-ban"></i></span><img src="r.png">"#
        ));
    }
}

#[test]
fn completed_and_incomplete_badges() {
    let host = RecordingHost::new(Some(1), 1)
        .with_module(5, RESOURCE)
        .with_module(6, "https://lms.example.com/mod/page/view.php?id=6")
        .with_completion(5, 1, CompletionState::Complete, true)
        .with_completion(6, 1, CompletionState::Incomplete, true);

    let out = run(
        &host,
        concat!(
            r#"<a href="/mod/resource/view.php?id=5"><img src="r.png"></a>"#,
            r#"<a href="/mod/page/view.php?id=6"><img src="p.png"></a>"#
        ),
    );
    assert!(out.contains(
        r#"<span class="state-completed" title="Completed"><i class="fa fa-check-circle-o"></i></span><img src="r.png">"#
    ));
    assert!(out.contains(
        r#"<span class="state-incomplete" title="Not completed"><i class="fa fa-circle-o"></i></span><img src="p.png">"#
    ));
}

#[test]
fn absolute_href_is_matched_by_path() {
    let host = RecordingHost::new(Some(1), 1).with_module(5, "/mod/resource/view.php?id=5");
    let out = run(
        &host,
        r#"<a href="https://example.com/mod/resource/view.php?id=5"><img src="r.png"></a>"#,
    );
    assert!(out.contains(r#"data-cmid="5""#));
    assert!(out.contains(r#"class="completion-info""#));
}

#[test]
fn two_images_or_no_children_are_byte_identical() {
    let host = RecordingHost::new(Some(1), 1).with_module(5, RESOURCE);
    let two = r#"<a href="/mod/resource/view.php?id=5"><img src="a.png"> <img src="b.png"></a>"#;
    let empty = r#"<a href="/mod/resource/view.php?id=5"></a>"#;
    assert_eq!(run(&host, two), two);
    assert_eq!(run(&host, empty), empty);

    let mixed = format!(r#"<div>{two}{empty}<a href="/mod/resource/view.php?id=5"><img src="c.png"></a></div>"#);
    let out = run(&host, &mixed);
    assert!(out.contains(two));
    assert!(out.contains(empty));
    assert!(out.contains("state-incomplete"));
}

#[test]
fn filtering_own_output_keeps_fixed_class() {
    let host = RecordingHost::new(Some(1), 1).with_module(5, RESOURCE);
    let html = r#"<a class="legacy" href="/mod/resource/view.php?id=5"><img src="r.png"></a>"#;
    let mut filter = ActivityFilter::new(&host, FilterConfig::default());
    let once = filter.filter(html, &FilterOptions::new());
    let twice = filter.filter(&once, &FilterOptions::new());
    assert!(twice.contains(r#"class="completion-info""#));
    assert!(!twice.contains("legacy"));
    assert_eq!(twice.matches("completion-info").count(), 1);
}

#[test]
fn user_change_requeries_completion_provider() {
    let host = RecordingHost::new(Some(1), 1).with_module(5, RESOURCE);
    let mut index = ActivityIndex::new();
    index.get(1, 1, &host);
    index.get(1, 1, &host);
    assert_eq!(host.completion_calls.borrow().as_slice(), &[(5, 1)]);

    index.get(1, 2, &host);
    assert_eq!(host.completion_calls.borrow().as_slice(), &[(5, 1), (5, 2)]);
    assert_eq!(host.module_calls.get(), 2);
}

#[test]
fn separate_requests_do_not_share_cache() {
    let alice = RecordingHost::new(Some(1), 1)
        .with_module(5, RESOURCE)
        .with_completion(5, 1, CompletionState::Complete, true);
    let bob = RecordingHost::new(Some(1), 2).with_module(5, RESOURCE);
    let html = r#"<a href="/mod/resource/view.php?id=5"><img src="r.png"></a>"#;

    assert!(run(&alice, html).contains("state-completed"));
    assert!(run(&bob, html).contains("state-incomplete"));
    assert_eq!(bob.completion_calls.borrow().as_slice(), &[(5, 2)]);
}

#[test]
fn snapshot_host_drives_the_filter() {
    let json = r#"{
        "wwwroot": "https://lms.example.com",
        "course_id": 3,
        "user_id": 7,
        "modules": [
            {"id": 31, "name": "Quiz", "url": "/mod/quiz/view.php?id=31",
             "users": {"7": {"state": 2}, "8": {"state": 0, "uservisible": false}}}
        ]
    }"#;
    let html = r#"<p><a href="https://lms.example.com/mod/quiz/view.php?id=31"><img src="q.png" style="float:left"></a></p>"#;

    let snap = CourseSnapshot::from_json(json.as_bytes()).unwrap();
    let out = ActivityFilter::new(&snap, FilterConfig::default()).filter(html, &FilterOptions::new());
    assert_eq!(
        out,
        concat!(
            r#"<p><a href="https://lms.example.com/mod/quiz/view.php?id=31" data-cmid="31" class="completion-info">"#,
            r#"<span class="state-completed" title="Completed"><i class="fa fa-check-circle-o"></i></span>"#,
            r#"<img src="q.png"></a></p>"#
        )
    );

    let other = snap.with_user(8);
    let out = ActivityFilter::new(&other, FilterConfig::default()).filter(html, &FilterOptions::new());
    assert!(out.contains("state-unavailable"));
}
