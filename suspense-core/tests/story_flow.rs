//! Integration tests for the observable session behavior: log growth,
//! restart-vs-reset, and a full walk through the demo script.

use std::sync::Arc;
use suspense_core::{script, Session, StoryError, StoryGraph};

fn demo_session() -> Session {
    let graph = Arc::new(script::demo_story().unwrap());
    Session::new(graph).unwrap()
}

/// Follow the choice with the given label from the current scene.
fn pick(session: &mut Session, label: &str) {
    let target = session
        .current_node()
        .unwrap()
        .choices
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| panic!("no choice labeled {label:?}"))
        .target_key
        .clone();
    session.choose(&target).unwrap();
}

#[test]
fn demo_walkthrough_to_the_cold_ending() {
    let mut session = demo_session();

    pick(&mut session, "继续上楼");
    assert_eq!(session.current_key(), "lobby");

    pick(&mut session, "等男子A回来");
    assert_eq!(session.current_key(), "wait_for_A");

    pick(&mut session, "拒绝离开");
    assert_eq!(session.current_key(), "refuse_help");

    pick(&mut session, "重新开始");
    assert_eq!(session.current_key(), "start");

    // start, lobby, wait_for_A, refuse_help, start
    assert_eq!(session.log().len(), 5);
    let visited: Vec<&str> = session.log().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        visited,
        ["start", "lobby", "wait_for_A", "refuse_help", "start"]
    );
}

#[test]
fn narrative_restart_keeps_the_log() {
    let mut session = demo_session();
    pick(&mut session, "继续上楼");
    pick(&mut session, "等男子A回来");
    pick(&mut session, "拒绝离开");
    pick(&mut session, "重新开始");

    // Back at the start scene with the full history intact.
    let start_text = session.graph().lookup("start").unwrap().text.clone();
    assert_eq!(session.current_node().unwrap().text, start_text);
    assert_eq!(session.log().len(), 5);

    // A second play-through keeps appending to the same log.
    pick(&mut session, "继续上楼");
    assert_eq!(session.log().len(), 6);
}

#[test]
fn reset_starts_a_fresh_play_through() {
    let mut session = demo_session();
    pick(&mut session, "继续上楼");
    pick(&mut session, "巡视左边房门");
    assert_eq!(session.log().len(), 3);

    session.reset().unwrap();
    assert_eq!(session.current_key(), "start");
    assert_eq!(session.log().len(), 1);
}

#[test]
fn log_grows_by_one_per_choice_with_duplicates() {
    let mut session = demo_session();
    let before = session.log().len();

    // choose() accepts any key in the graph, including the current one.
    session.choose("start").unwrap();
    session.choose("start").unwrap();

    assert_eq!(session.log().len(), before + 2);
    let last = &session.log()[session.log().len() - 1];
    let prev = &session.log()[session.log().len() - 2];
    assert_eq!(last, prev);
}

#[test]
fn full_demo_graph_is_reachable_from_start() {
    // A walk over declared choices touches every scene; the demo script
    // has no orphaned content.
    let graph = script::demo_story().unwrap();
    let mut seen = std::collections::HashSet::new();
    let mut queue = vec![graph.start_key().to_string()];
    while let Some(key) = queue.pop() {
        if !seen.insert(key.clone()) {
            continue;
        }
        for choice in &graph.lookup(&key).unwrap().choices {
            queue.push(choice.target_key.clone());
        }
    }
    assert_eq!(seen.len(), graph.len());
}

#[test]
fn external_story_with_dangling_edge_fails_up_front() {
    let json = r#"{
        "startKey": "start",
        "scenes": [
            {
                "key": "start",
                "text": "你站在楼下。",
                "choices": [{ "label": "上楼", "targetKey": "missing_floor" }]
            }
        ]
    }"#;
    let err = StoryGraph::from_json(json).unwrap_err();
    assert!(matches!(err, StoryError::DanglingChoice { .. }));
}
