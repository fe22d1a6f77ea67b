//! Tests for the search input controller

use super::*;
use crate::search_input::host::{HostCall, RecordingHost};
use proptest::prelude::*;

fn teams() -> Vec<Suggestion> {
    vec![
        Suggestion::new(1, "Team A", "team-a"),
        Suggestion::new(2, "Team B", "team-b"),
    ]
}

fn numbered(n: usize) -> Vec<Suggestion> {
    (0..n)
        .map(|i| Suggestion::new(format!("s{}", i), format!("Item {}", i), format!("item-{}", i)))
        .collect()
}

fn controller() -> SearchInputController {
    SearchInputController::new(SearchInputOptions::default())
}

fn controlled(value: &str) -> SearchInputController {
    SearchInputController::new(SearchInputOptions {
        value: ValueSource::Controlled(value.to_string()),
        ..SearchInputOptions::default()
    })
}

fn type_text(c: &mut SearchInputController, text: &str, now: u64, host: &mut RecordingHost) {
    c.handle(InputEvent::Input(text.to_string()), now, host);
}

fn key(c: &mut SearchInputController, k: NavKey, host: &mut RecordingHost) -> bool {
    c.handle(InputEvent::Key(k), 0, host)
}

mod construction {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = controller();
        assert_eq!(c.current_value(), "");
        assert!(!c.panel_visible());
        assert_eq!(c.active_index(), None);
        assert!(!c.is_focused());
        assert_eq!(c.max_suggestions(), 5);
        assert_eq!(c.value_mode(), ValueMode::Uncontrolled);
        assert!(!c.is_search_pending());
    }

    #[test]
    fn test_initial_uncontrolled_value() {
        let c = SearchInputController::new(SearchInputOptions {
            value: ValueSource::Uncontrolled {
                initial: Some("roadmap".into()),
            },
            ..SearchInputOptions::default()
        });
        assert_eq!(c.current_value(), "roadmap");
    }

    #[test]
    fn test_controlled_mode_is_fixed_at_construction() {
        let c = controlled("abc");
        assert_eq!(c.value_mode(), ValueMode::Controlled);
        assert_eq!(c.current_value(), "abc");
    }
}

mod typing_and_debounce {
    use super::*;

    #[test]
    fn test_typing_updates_value_and_opens_panel() {
        let mut c = controller();
        let mut host = RecordingHost::new();

        type_text(&mut c, "t", 0, &mut host);

        assert_eq!(c.current_value(), "t");
        assert!(c.panel_visible());
        assert_eq!(host.changes(), vec!["t"]);
        assert!(host.searches().is_empty());
        assert!(c.is_search_pending());
        assert_eq!(c.next_deadline(), Some(300));
    }

    #[test]
    fn test_search_fires_after_quiet_period_with_last_text() {
        let mut c = controller();
        let mut host = RecordingHost::new();

        type_text(&mut c, "t", 0, &mut host);
        type_text(&mut c, "te", 100, &mut host);
        type_text(&mut c, "tea", 200, &mut host);
        assert!(!c.tick(400, &mut host));
        type_text(&mut c, "team", 450, &mut host);

        assert!(!c.tick(749, &mut host));
        assert!(c.tick(750, &mut host));
        assert!(!c.tick(2_000, &mut host));
        assert_eq!(host.searches(), vec!["team"]);
    }

    #[test]
    fn test_submit_only_never_searches_on_timer() {
        let mut c = SearchInputController::new(SearchInputOptions {
            search_on_submit_only: true,
            ..SearchInputOptions::default()
        });
        let mut host = RecordingHost::new();

        type_text(&mut c, "team", 0, &mut host);
        assert!(!c.is_search_pending());
        assert!(!c.tick(10_000, &mut host));
        assert!(host.searches().is_empty());

        key(&mut c, NavKey::Enter, &mut host);
        assert_eq!(host.searches(), vec!["team"]);
    }

    #[test]
    fn test_fire_by_token() {
        let mut c = controller();
        let mut host = RecordingHost::new();

        type_text(&mut c, "a", 0, &mut host);
        let stale = c.pending_timer().unwrap();
        type_text(&mut c, "ab", 10, &mut host);
        let live = c.pending_timer().unwrap();

        assert!(!c.fire(stale, &mut host));
        assert!(c.fire(live, &mut host));
        assert_eq!(host.searches(), vec!["ab"]);
    }

    #[test]
    fn test_dispose_cancels_pending_search() {
        let mut c = controller();
        let mut host = RecordingHost::new();

        type_text(&mut c, "team", 0, &mut host);
        c.dispose();

        assert!(!c.is_search_pending());
        assert!(!c.tick(u64::MAX, &mut host));
        assert!(host.searches().is_empty());
        assert!(!c.panel_visible());
    }

    #[test]
    fn test_typing_resets_active_index() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        assert_eq!(c.active_index(), Some(0));

        type_text(&mut c, "team ", 10, &mut host);
        assert_eq!(c.active_index(), None);
    }
}

mod suggestions {
    use super::*;

    #[test]
    fn test_replacing_list_resets_selection_even_if_in_range() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(numbered(4));
        type_text(&mut c, "item", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        assert_eq!(c.active_index(), Some(0));

        c.set_suggestions(numbered(4));
        assert_eq!(c.active_index(), None);
    }

    #[test]
    fn test_view_caps_and_highlights() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(numbered(8));
        type_text(&mut c, "item 1", 0, &mut host);

        let view = c.view();
        assert!(view.panel_visible);
        assert_eq!(view.value, "item 1");
        assert_eq!(view.suggestions.len(), 5);
        assert_eq!(c.capped_len(), 5);
        assert_eq!(c.suggestions().len(), 8);
        assert!(view.suggestions[1].segments.iter().any(|s| s.matched && s.text == "Item 1"));
        assert!(view.suggestions[0].segments.iter().all(|s| !s.matched));
        assert!(!view.show_no_results);
    }

    #[test]
    fn test_view_reports_no_results_for_query_without_candidates() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        type_text(&mut c, "zzz", 0, &mut host);

        let view = c.view();
        assert!(view.panel_visible);
        assert!(view.show_no_results);
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn test_hidden_panel_never_reports_no_results() {
        let c = controller();
        assert!(!c.view().show_no_results);
    }

    #[test]
    fn test_disabled_suggestions_never_show_panel() {
        let mut c = SearchInputController::new(SearchInputOptions {
            show_suggestions: false,
            ..SearchInputOptions::default()
        });
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());

        c.handle(InputEvent::Focus, 0, &mut host);
        type_text(&mut c, "team", 0, &mut host);
        assert!(!c.panel_visible());
        assert!(!key(&mut c, NavKey::Down, &mut host));
        assert_eq!(c.active_index(), None);

        // Debounced search still runs
        assert!(c.tick(300, &mut host));
    }
}

mod keyboard {
    use super::*;

    #[test]
    fn test_arrows_ignored_while_panel_hidden() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());

        assert!(!key(&mut c, NavKey::Down, &mut host));
        assert!(!key(&mut c, NavKey::Up, &mut host));
        assert_eq!(c.active_index(), None);
    }

    #[test]
    fn test_arrows_ignored_with_empty_list() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        type_text(&mut c, "x", 0, &mut host);

        assert!(!key(&mut c, NavKey::Down, &mut host));
        assert_eq!(c.active_index(), None);
    }

    #[test]
    fn test_arrows_cycle_over_capped_list_only() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(numbered(9));
        type_text(&mut c, "i", 0, &mut host);

        key(&mut c, NavKey::Up, &mut host);
        assert_eq!(c.active_index(), Some(4));
        key(&mut c, NavKey::Down, &mut host);
        assert_eq!(c.active_index(), Some(0));
    }

    #[test]
    fn test_enter_on_active_commits_suggestion() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        host.clear();

        assert!(key(&mut c, NavKey::Enter, &mut host));

        assert_eq!(c.current_value(), "team-b");
        assert!(!c.panel_visible());
        assert_eq!(c.active_index(), None);
        assert_eq!(
            host.calls,
            vec![
                HostCall::Change {
                    text: "team-b".into()
                },
                HostCall::SuggestionSelect {
                    suggestion: teams()[1].clone()
                },
            ]
        );
    }

    #[test]
    fn test_commit_cancels_pending_search() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "te", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        key(&mut c, NavKey::Enter, &mut host);

        assert!(!c.tick(1_000, &mut host));
        assert!(host.searches().is_empty());
    }

    #[test]
    fn test_enter_without_selection_submits_search_then_enter() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        host.clear();

        assert!(key(&mut c, NavKey::Enter, &mut host));

        assert_eq!(
            host.calls,
            vec![
                HostCall::Search {
                    text: "team".into()
                },
                HostCall::Enter {
                    text: "team".into()
                },
            ]
        );
        assert!(!c.panel_visible());
        assert_eq!(c.current_value(), "team");
        // The debounced search was superseded by the explicit one
        assert!(!c.tick(1_000, &mut host));
        assert_eq!(host.searches(), vec!["team"]);
    }

    #[test]
    fn test_submit_event_matches_enter_without_selection() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        type_text(&mut c, "q", 0, &mut host);
        host.clear();

        c.handle(InputEvent::Submit, 5, &mut host);
        assert_eq!(host.searches(), vec!["q"]);
        assert_eq!(host.count(|c| matches!(c, HostCall::Enter { .. })), 1);
        assert!(!c.is_search_pending());
    }

    #[test]
    fn test_escape_closes_without_touching_value() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        host.clear();

        assert!(key(&mut c, NavKey::Escape, &mut host));
        assert!(!c.panel_visible());
        assert_eq!(c.active_index(), None);
        assert_eq!(c.current_value(), "team");
        assert!(host.calls.is_empty());

        assert!(!key(&mut c, NavKey::Escape, &mut host), "already closed");
    }
}

mod focus_and_pointer {
    use super::*;

    #[test]
    fn test_focus_opens_with_candidates() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());

        c.handle(InputEvent::Focus, 0, &mut host);
        assert!(c.is_focused());
        assert!(c.panel_visible());
        assert_eq!(host.calls, vec![HostCall::Focus]);
    }

    #[test]
    fn test_focus_stays_closed_with_nothing_to_show() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.handle(InputEvent::Focus, 0, &mut host);
        assert!(!c.panel_visible());
    }

    #[test]
    fn test_blur_alone_keeps_panel_open() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);

        c.handle(InputEvent::Blur, 0, &mut host);
        assert!(!c.is_focused());
        assert!(c.panel_visible());
        assert_eq!(host.count(|c| matches!(c, HostCall::Blur)), 1);
    }

    #[test]
    fn test_click_on_suggestion_after_blur_commits() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);

        c.handle(InputEvent::PointerDown { inside: true }, 0, &mut host);
        c.handle(InputEvent::Blur, 0, &mut host);
        assert!(c.handle(InputEvent::Select(0), 0, &mut host));

        assert_eq!(c.current_value(), "team-a");
        assert_eq!(host.selections()[0].id, crate::suggestion::SuggestionId::Number(1));
        assert!(!c.panel_visible());
    }

    #[test]
    fn test_outside_pointer_dismisses() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);

        assert!(c.handle(InputEvent::PointerDown { inside: false }, 0, &mut host));
        assert!(!c.panel_visible());
        assert_eq!(c.active_index(), None);
        assert_eq!(c.current_value(), "team");
    }

    #[test]
    fn test_inside_pointer_is_not_dismissal() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);

        assert!(!c.handle(InputEvent::PointerDown { inside: true }, 0, &mut host));
        assert!(c.panel_visible());
    }

    #[test]
    fn test_select_out_of_range_or_hidden_is_ignored() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());

        assert!(!c.handle(InputEvent::Select(0), 0, &mut host), "panel hidden");
        type_text(&mut c, "team", 0, &mut host);
        assert!(!c.handle(InputEvent::Select(5), 0, &mut host));
        assert!(host.selections().is_empty());
    }

    #[test]
    fn test_hover_does_not_move_keyboard_cursor() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);

        c.handle(InputEvent::Hover(Some(1)), 0, &mut host);
        assert_eq!(c.hovered_index(), Some(1));
        assert_eq!(c.active_index(), None);
        assert_eq!(c.view().hovered_index, Some(1));

        key(&mut c, NavKey::Down, &mut host);
        assert_eq!(c.active_index(), Some(0));
        assert_eq!(c.hovered_index(), Some(1));
    }
}

mod clear {
    use super::*;

    #[test]
    fn test_uncontrolled_clear_fires_each_callback_once() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        type_text(&mut c, "team", 0, &mut host);
        c.handle(InputEvent::Blur, 0, &mut host);
        host.clear();

        c.handle(InputEvent::Clear, 10, &mut host);

        assert_eq!(c.current_value(), "");
        assert!(c.is_focused());
        assert_eq!(
            host.calls,
            vec![
                HostCall::Change { text: "".into() },
                HostCall::Search { text: "".into() },
                HostCall::Clear,
            ]
        );
        // The timer armed by "team" must not fire afterwards
        assert!(!c.tick(1_000, &mut host));
        assert_eq!(host.searches(), vec![""]);
    }

    #[test]
    fn test_clear_keeps_panel_open_over_remaining_candidates() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.handle(InputEvent::Focus, 0, &mut host);
        type_text(&mut c, "team", 0, &mut host);
        c.set_suggestions(teams());
        host.clear();

        c.handle(InputEvent::Clear, 10, &mut host);

        assert!(c.panel_visible());
        assert!(c.is_focused());
        assert_eq!(c.active_index(), None);
        assert_eq!(
            host.calls,
            vec![
                HostCall::Change { text: "".into() },
                HostCall::Search { text: "".into() },
                HostCall::Clear,
            ]
        );

        assert!(key(&mut c, NavKey::Down, &mut host));
        assert_eq!(c.active_index(), Some(0));
    }

    #[test]
    fn test_clear_without_candidates_leaves_panel_closed() {
        let mut c = controller();
        let mut host = RecordingHost::new();
        c.handle(InputEvent::Focus, 0, &mut host);
        type_text(&mut c, "team", 0, &mut host);
        assert!(c.panel_visible());

        c.handle(InputEvent::Clear, 10, &mut host);

        assert!(!c.panel_visible());
        assert!(!key(&mut c, NavKey::Down, &mut host));
    }
}

mod controlled_mode {
    use super::*;

    #[test]
    fn test_typing_notifies_but_never_self_adopts() {
        let mut c = controlled("");
        let mut host = RecordingHost::new();

        type_text(&mut c, "t", 0, &mut host);
        assert_eq!(host.changes(), vec!["t"]);
        assert_eq!(c.current_value(), "");

        c.sync_external(Some("T"));
        assert_eq!(c.current_value(), "T");
    }

    #[test]
    fn test_debounce_carries_typed_text_even_when_host_lags() {
        let mut c = controlled("");
        let mut host = RecordingHost::new();

        type_text(&mut c, "team", 0, &mut host);
        c.tick(300, &mut host);
        assert_eq!(host.searches(), vec!["team"]);
    }

    #[test]
    fn test_host_value_change_resets_selection() {
        let mut c = controlled("team");
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);

        assert!(!c.sync_external(Some("team")));
        assert_eq!(c.active_index(), Some(0));
        assert!(c.sync_external(Some("team x")));
        assert_eq!(c.active_index(), None);
    }

    #[test]
    fn test_commit_in_controlled_mode_waits_for_host() {
        let mut c = controlled("team");
        let mut host = RecordingHost::new();
        c.set_suggestions(teams());
        type_text(&mut c, "team", 0, &mut host);
        key(&mut c, NavKey::Down, &mut host);
        key(&mut c, NavKey::Enter, &mut host);

        assert_eq!(c.current_value(), "team");
        assert_eq!(host.changes().last(), Some(&"team-a"));
        c.sync_external(Some("team-a"));
        assert_eq!(c.current_value(), "team-a");
    }
}

#[test]
fn test_end_to_end_pick_first_team() {
    let mut c = controller();
    let mut host = RecordingHost::new();

    c.handle(InputEvent::Focus, 0, &mut host);
    for (i, text) in ["t", "te", "tea", "team"].iter().enumerate() {
        type_text(&mut c, text, i as u64 * 50, &mut host);
    }
    assert!(c.panel_visible());
    assert_eq!(c.active_index(), None);

    // Host answers the debounced search
    assert!(c.tick(450, &mut host));
    assert_eq!(host.searches(), vec!["team"]);
    c.set_suggestions(teams());

    key(&mut c, NavKey::Down, &mut host);
    assert_eq!(c.active_index(), Some(0));
    key(&mut c, NavKey::Enter, &mut host);

    assert_eq!(c.current_value(), "team-a");
    let selected = host.selections();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, crate::suggestion::SuggestionId::Number(1));
    assert!(!c.panel_visible());
    assert_eq!(c.active_index(), None);
}

#[derive(Debug, Clone)]
enum Step {
    Type(u64),
    Down,
    Up,
    Replace(usize),
    Escape,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..400).prop_map(Step::Type),
        Just(Step::Down),
        Just(Step::Up),
        (0usize..9).prop_map(Step::Replace),
        Just(Step::Escape),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The active index never leaves the capped list, and any replacement
    // or value change leaves it unset.
    #[test]
    fn prop_active_index_invariant(steps in prop::collection::vec(step(), 0..40)) {
        let mut c = controller();
        let mut host = RecordingHost::new();
        let mut now = 0;

        for (i, s) in steps.into_iter().enumerate() {
            match s {
                Step::Type(gap) => {
                    now += gap;
                    c.tick(now, &mut host);
                    c.handle(InputEvent::Input(format!("q{}", i)), now, &mut host);
                    prop_assert_eq!(c.active_index(), None);
                }
                Step::Down => { c.handle(InputEvent::Key(NavKey::Down), now, &mut host); }
                Step::Up => { c.handle(InputEvent::Key(NavKey::Up), now, &mut host); }
                Step::Replace(n) => {
                    c.set_suggestions(numbered(n));
                    prop_assert_eq!(c.active_index(), None);
                }
                Step::Escape => { c.handle(InputEvent::Key(NavKey::Escape), now, &mut host); }
            }
            if let Some(i) = c.active_index() {
                prop_assert!(i < c.capped_len());
                prop_assert!(c.panel_visible());
            }
        }
    }

    // At most one search per quiet window, carrying the last keystroke's text
    #[test]
    fn prop_one_search_per_window(gaps in prop::collection::vec(0u64..600, 1..30)) {
        let delay = 300;
        let mut c = controller();
        let mut host = RecordingHost::new();
        let mut now = 0;
        let mut expected = Vec::new();
        let mut last: Option<String> = None;

        for (i, gap) in gaps.iter().enumerate() {
            let next = now + gap;
            // Poll every millisecond of the gap, as a busy event loop would
            for t in now..=next {
                c.tick(t, &mut host);
            }
            if *gap >= delay {
                if let Some(text) = last.take() {
                    expected.push(text);
                }
            }
            now = next;
            let text = format!("q{}", i);
            c.handle(InputEvent::Input(text.clone()), now, &mut host);
            last = Some(text);
        }
        c.tick(now + delay, &mut host);
        if let Some(text) = last {
            expected.push(text);
        }

        prop_assert_eq!(host.searches(), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
