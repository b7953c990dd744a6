//! View controller behaviour across message sequences.

use pretty_assertions::assert_eq;
use weldon_core::{NavIntent, NavMessage, PostId, View, ViewController, ViewMode};

const MESSAGES: [NavMessage; 10] = [
    NavMessage::GoHome,
    NavMessage::GoToBlogList,
    NavMessage::SelectPost(PostId(1)),
    NavMessage::SelectPost(PostId(2)),
    NavMessage::SelectPost(PostId(0)),
    NavMessage::SelectPost(PostId(404)),
    NavMessage::Navigate(NavIntent::Home),
    NavMessage::Navigate(NavIntent::Services),
    NavMessage::Navigate(NavIntent::Blog),
    NavMessage::Navigate(NavIntent::Contact),
];

fn state(c: &ViewController) -> (ViewMode, Option<PostId>) {
    (c.mode(), c.selected_post())
}

fn assert_invariant(c: &ViewController) {
    assert_eq!(
        c.selected_post().is_some(),
        c.mode() == ViewMode::PostDetail,
        "selection must exist exactly in post-detail: {:?}",
        c.view()
    );
    if c.mode() == ViewMode::PostDetail {
        assert!(c.current_post().is_some());
    }
}

/// Every sequence of up to four messages.
fn sequences(len: usize) -> Vec<Vec<NavMessage>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|seq| {
                MESSAGES.into_iter().map(move |msg| {
                    let mut next = seq.clone();
                    next.push(msg);
                    next
                })
            })
            .collect();
    }
    out
}

#[test]
fn selection_iff_post_detail_after_every_transition() {
    for len in 1..=4 {
        for seq in sequences(len) {
            let mut c = ViewController::new();
            for msg in seq {
                let t = c.dispatch(msg);
                assert_eq!(t.to, c.view());
                assert_invariant(&c);
            }
        }
    }
}

#[test]
fn go_home_is_idempotent() {
    let mut c = ViewController::new();
    c.select_post(PostId(3));
    c.go_home();
    let after_first = c.clone();
    for _ in 0..5 {
        let t = c.go_home();
        assert!(!t.changed());
        assert_eq!(c, after_first);
    }
}

#[test]
fn go_to_blog_list_is_idempotent() {
    let mut c = ViewController::new();
    c.go_to_blog_list();
    c.go_to_blog_list();
    assert_eq!(state(&c), (ViewMode::BlogList, None));
}

#[test]
fn valid_selection_opens_detail() {
    for id in [1, 2, 3].map(PostId) {
        for start in [
            NavMessage::GoHome,
            NavMessage::GoToBlogList,
            NavMessage::SelectPost(PostId(1)),
        ] {
            let mut c = ViewController::new();
            c.dispatch(start);
            c.select_post(id);
            assert_eq!(state(&c), (ViewMode::PostDetail, Some(id)));
        }
    }
}

#[test]
fn invalid_selection_fails_closed() {
    for start in MESSAGES {
        let mut c = ViewController::new();
        c.dispatch(start);
        c.select_post(PostId(99));
        assert_eq!(state(&c), (ViewMode::BlogList, None));
    }
}

#[test]
fn scenario_home_to_blog_list() {
    let mut c = ViewController::new();
    assert_eq!(state(&c), (ViewMode::Home, None));
    c.go_to_blog_list();
    assert_eq!(state(&c), (ViewMode::BlogList, None));
}

#[test]
fn scenario_blog_list_to_post() {
    let mut c = ViewController::new();
    c.go_to_blog_list();
    c.select_post(PostId(2));
    assert_eq!(state(&c), (ViewMode::PostDetail, Some(PostId(2))));
}

#[test]
fn scenario_post_to_home() {
    let mut c = ViewController::new();
    c.select_post(PostId(2));
    let t = c.go_home();
    assert_eq!(t.from, View::PostDetail(PostId(2)));
    assert_eq!(state(&c), (ViewMode::Home, None));
}

#[test]
fn services_request_lands_home_from_any_state() {
    let target: NavIntent = "services".parse().unwrap();
    for start in MESSAGES {
        let mut c = ViewController::new();
        c.dispatch(start);
        c.on_navigation_request(target);
        assert_eq!(state(&c), (ViewMode::Home, None));
    }
}

#[test]
fn blog_request_lands_on_list() {
    let mut c = ViewController::new();
    c.select_post(PostId(1));
    c.on_navigation_request(NavIntent::Blog);
    assert_eq!(state(&c), (ViewMode::BlogList, None));
}
