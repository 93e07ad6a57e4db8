use super::*;
use crate::ids::SolutionId;
use crate::model::{Solution, Status};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
struct MemoryRegistry {
    items: Vec<Solution>,
    moves: usize,
}

impl MemoryRegistry {
    fn new(items: Vec<Solution>) -> Self {
        Self { items, moves: 0 }
    }
}

impl SolutionRegistry for MemoryRegistry {
    fn solutions(&self) -> &[Solution] {
        &self.items
    }

    fn move_status(&mut self, id: &str, to: Status) -> Result<StatusMove, RegistryError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id.as_str() == id)
            .ok_or(RegistryError::UnknownId)?;
        let from = item.status;
        item.status = to;
        self.moves += 1;
        Ok(StatusMove {
            id: item.id.clone(),
            from,
            to,
            progress: item.progress,
            revision: self.moves as u64,
        })
    }
}

fn item(id: &str, title: &str, status: Status, tags: &[&str]) -> Solution {
    Solution {
        id: SolutionId::try_new(id).unwrap(),
        title: title.to_string(),
        description: format!("{title} description"),
        impact: String::new(),
        status,
        progress: match status {
            Status::Planned => 0,
            Status::InProgress => 40,
            Status::Completed => 100,
        },
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        date: None,
        link: None,
        related_ids: Vec::new(),
        detail_renderer_key: None,
        thumbnail_url: None,
        preview_text: None,
    }
}

fn sample() -> Vec<Solution> {
    vec![
        item(
            "legacy",
            "Legacy System Dependencies",
            Status::Planned,
            &["integration", "audit"],
        ),
        item("pipeline", "Data Pipeline Rebuild", Status::InProgress, &["data"]),
        item(
            "portal",
            "Customer Portal",
            Status::Completed,
            &["web", "integration"],
        ),
        item("mesh", "Service Mesh Rollout", Status::InProgress, &["infra"]),
    ]
}

fn ids(items: &[&Solution]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}

fn columns() -> Vec<BucketRegion> {
    vec![
        BucketRegion {
            bucket: Status::Planned,
            rect: Rect::new(0.0, 0.0, 300.0, 800.0),
        },
        BucketRegion {
            bucket: Status::InProgress,
            rect: Rect::new(300.0, 0.0, 300.0, 800.0),
        },
        BucketRegion {
            bucket: Status::Completed,
            rect: Rect::new(600.0, 0.0, 300.0, 800.0),
        },
    ]
}

fn session() -> BoardSession<MemoryRegistry> {
    let mut session =
        BoardSession::new(MemoryRegistry::new(sample()), SessionConfig::default()).unwrap();
    session.apply(BoardIntent::SetRegions { regions: columns() });
    session
}

fn status_of(session: &BoardSession<MemoryRegistry>, id: &str) -> Status {
    session.registry().get(id).unwrap().status
}

#[test]
fn empty_filter_is_identity() {
    let items = sample();
    let out = filter(&items, &FilterState::default());
    assert_eq!(out.len(), items.len());
    assert!(out.iter().zip(items.iter()).all(|(a, b)| a.id == b.id));

    let blank = FilterState {
        query: "   ".to_string(),
        ..FilterState::default()
    };
    assert!(blank.is_empty());
    assert_eq!(filter(&items, &blank).len(), items.len());
}

#[test]
fn text_match_is_case_insensitive_on_title_or_description() {
    let items = sample();
    let mut state = FilterState::default();
    state.set_query("LEGACY");
    assert_eq!(ids(&filter(&items, &state)), vec!["legacy"]);

    state.set_query("rebuild description");
    assert_eq!(ids(&filter(&items, &state)), vec!["pipeline"]);
}

#[test]
fn surrounding_spaces_in_a_query_are_significant() {
    let items = sample();
    let mut state = FilterState::default();
    state.set_query("legacy");
    assert_eq!(ids(&filter(&items, &state)), vec!["legacy"]);

    // "Legacy System Dependencies" starts with "legacy", so nothing precedes it.
    state.set_query(" legacy");
    assert!(filter(&items, &state).is_empty());
    state.set_query(" System");
    assert_eq!(ids(&filter(&items, &state)), vec!["legacy"]);
    assert!(!state.is_empty());
}

#[test]
fn criteria_combine_as_intersection() {
    let items = sample();
    let query = FilterState {
        query: "e".to_string(),
        ..FilterState::default()
    };
    let tag = FilterState {
        tag: Some("integration".to_string()),
        ..FilterState::default()
    };
    let category = FilterState {
        category: Some(Status::Completed),
        ..FilterState::default()
    };
    let all = FilterState {
        query: "e".to_string(),
        tag: Some("integration".to_string()),
        category: Some(Status::Completed),
    };

    let set = |state: &FilterState| -> BTreeSet<String> {
        filter(&items, state)
            .into_iter()
            .map(|item| item.id.to_string())
            .collect()
    };
    let expected: BTreeSet<String> = set(&query)
        .intersection(&set(&tag))
        .cloned()
        .collect::<BTreeSet<_>>()
        .intersection(&set(&category))
        .cloned()
        .collect();
    assert_eq!(set(&all), expected);
    assert_eq!(ids(&filter(&items, &all)), vec!["portal"]);
}

#[test]
fn tag_match_is_exact() {
    let items = sample();
    let state = FilterState {
        tag: Some("Integration".to_string()),
        ..FilterState::default()
    };
    assert!(filter(&items, &state).is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let items = sample();
    let state = FilterState {
        category: Some(Status::InProgress),
        ..FilterState::default()
    };
    assert_eq!(ids(&filter(&items, &state)), vec!["pipeline", "mesh"]);
}

#[test]
fn toggles_clear_on_second_click() {
    let mut state = FilterState::default();
    state.toggle_tag("data");
    assert_eq!(state.tag.as_deref(), Some("data"));
    state.toggle_tag("infra");
    assert_eq!(state.tag.as_deref(), Some("infra"));
    state.toggle_tag("infra");
    assert_eq!(state.tag, None);

    state.toggle_category(Status::Planned);
    assert_eq!(state.category, Some(Status::Planned));
    state.toggle_category(Status::Planned);
    assert_eq!(state.category, None);
}

#[test]
fn categorize_partitions_totally_and_disjointly() {
    let items = sample();
    let buckets = categorize(&items);
    assert_eq!(buckets.total(), items.len());
    let mut seen = BTreeSet::new();
    for (status, in_bucket) in buckets.iter() {
        for item in in_bucket {
            assert_eq!(item.status, status);
            assert!(seen.insert(item.id.to_string()), "item in two buckets");
        }
    }
    assert_eq!(seen.len(), items.len());

    let empty: Vec<Solution> = Vec::new();
    let buckets = categorize(&empty);
    assert_eq!(buckets, Buckets::default());
}

#[test]
fn category_filter_then_categorize() {
    let items = vec![
        item("a", "A", Status::Planned, &[]),
        item("b", "B", Status::InProgress, &[]),
    ];
    let state = FilterState {
        category: Some(Status::Planned),
        ..FilterState::default()
    };
    let buckets = categorize(filter(&items, &state));
    assert_eq!(ids(&buckets.planned), vec!["a"]);
    assert!(buckets.in_progress.is_empty());
    assert!(buckets.completed.is_empty());
}

#[test]
fn tag_catalog_keeps_first_seen_order() {
    assert_eq!(
        tag_catalog(&sample()),
        vec!["integration", "audit", "data", "web", "infra"]
    );
}

#[test]
fn hit_test_uses_half_open_regions() {
    let regions = columns();
    assert_eq!(hit_test(&regions, Point::new(10.0, 10.0)), Some(Status::Planned));
    assert_eq!(
        hit_test(&regions, Point::new(300.0, 10.0)),
        Some(Status::InProgress)
    );
    assert_eq!(hit_test(&regions, Point::new(900.0, 10.0)), None);
    assert_eq!(hit_test(&regions, Point::new(10.0, -1.0)), None);
    assert_eq!(hit_test(&[], Point::new(10.0, 10.0)), None);
    assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).contains(Point::new(0.0, 0.0)));
}

#[test]
fn drag_threshold_must_be_positive() {
    assert!(DragController::new(0.0).is_err());
    assert!(DragController::new(f64::NAN).is_err());
    assert!(DragController::new(3.0).is_ok());
}

#[test]
fn press_without_travel_is_a_click() {
    let mut drag = DragController::default();
    let id = SolutionId::try_new("legacy").unwrap();
    drag.pointer_down(id.clone(), Status::Planned, Point::new(10.0, 10.0));
    let moved = drag.pointer_move(Point::new(12.0, 11.0), &columns());
    assert_eq!(
        moved,
        DragEffect::Noop {
            reason: DragNoopReason::ThresholdNotReached
        }
    );
    assert_eq!(drag.dragged_item(), None);
    let released = drag.pointer_up(Point::new(12.0, 11.0), &columns());
    assert_eq!(released, DragEffect::Click { item: id });
    assert!(drag.is_idle());
}

#[test]
fn drag_tracks_hover_bucket() {
    let mut drag = DragController::default();
    let id = SolutionId::try_new("legacy").unwrap();
    drag.pointer_down(id.clone(), Status::Planned, Point::new(10.0, 10.0));
    let started = drag.pointer_move(Point::new(40.0, 10.0), &columns());
    assert_eq!(
        started,
        DragEffect::DragStarted {
            item: id.clone(),
            hover: Some(Status::Planned)
        }
    );
    assert_eq!(drag.dragged_item(), Some(&id));
    let changed = drag.pointer_move(Point::new(650.0, 10.0), &columns());
    assert_eq!(
        changed,
        DragEffect::HoverChanged {
            item: id.clone(),
            hover: Some(Status::Completed)
        }
    );
    assert_eq!(drag.hover_bucket(), Some(Status::Completed));
    assert_eq!(
        drag.pointer_move(Point::new(660.0, 20.0), &columns()),
        DragEffect::Noop {
            reason: DragNoopReason::HoverUnchanged
        }
    );
}

#[test]
fn second_press_during_drag_is_ignored() {
    let mut drag = DragController::default();
    let first = SolutionId::try_new("legacy").unwrap();
    let second = SolutionId::try_new("mesh").unwrap();
    drag.pointer_down(first.clone(), Status::Planned, Point::new(10.0, 10.0));
    assert_eq!(
        drag.pointer_down(second, Status::InProgress, Point::new(0.0, 0.0)),
        DragEffect::Noop {
            reason: DragNoopReason::DragAlreadyActive
        }
    );
    assert_eq!(drag.cancel(), DragEffect::Canceled {
        item: Some(first),
        reason: DragCancelReason::PointerCancel
    });
    assert_eq!(
        drag.cancel(),
        DragEffect::Noop {
            reason: DragNoopReason::IdleWithoutActiveDrag
        }
    );
}

#[test]
fn dropping_on_another_bucket_moves_only_that_item() {
    let mut session = session();
    let before: Vec<(String, Status)> = session
        .registry()
        .solutions()
        .iter()
        .map(|item| (item.id.to_string(), item.status))
        .collect();

    session.apply(BoardIntent::PointerDown {
        item: "pipeline".to_string(),
        x: 350.0,
        y: 50.0,
    });
    session.apply(BoardIntent::PointerMove { x: 500.0, y: 60.0 });
    session.apply(BoardIntent::PointerMove { x: 700.0, y: 60.0 });
    let outcome = session.apply(BoardIntent::PointerUp { x: 700.0, y: 60.0 });

    match outcome {
        IntentOutcome::StatusMoved { change } => {
            assert_eq!(change.id.as_str(), "pipeline");
            assert_eq!(change.from, Status::InProgress);
            assert_eq!(change.to, Status::Completed);
        }
        other => panic!("expected a status move, got {other:?}"),
    }
    for (id, status) in before {
        let now = status_of(&session, &id);
        if id == "pipeline" {
            assert_eq!(now, Status::Completed);
        } else {
            assert_eq!(now, status, "{id} must not change");
        }
    }
    assert!(session.drag().is_idle());
}

#[test]
fn dropping_on_origin_bucket_is_a_noop() {
    let mut session = session();
    session.apply(BoardIntent::PointerDown {
        item: "pipeline".to_string(),
        x: 350.0,
        y: 50.0,
    });
    session.apply(BoardIntent::PointerMove { x: 650.0, y: 50.0 });
    session.apply(BoardIntent::PointerMove { x: 400.0, y: 90.0 });
    let outcome = session.apply(BoardIntent::PointerUp { x: 400.0, y: 90.0 });
    assert_eq!(
        outcome,
        IntentOutcome::Drag {
            effect: DragEffect::Canceled {
                item: Some(SolutionId::try_new("pipeline").unwrap()),
                reason: DragCancelReason::OriginBucket
            }
        }
    );
    assert_eq!(status_of(&session, "pipeline"), Status::InProgress);
    assert_eq!(session.registry().moves, 0);
    assert!(session.drag().is_idle());
}

#[test]
fn dropping_outside_every_bucket_is_a_noop() {
    let mut session = session();
    session.apply(BoardIntent::PointerDown {
        item: "legacy".to_string(),
        x: 20.0,
        y: 20.0,
    });
    session.apply(BoardIntent::PointerMove { x: 650.0, y: 20.0 });
    let outcome = session.apply(BoardIntent::PointerUp {
        x: 2000.0,
        y: 2000.0,
    });
    assert!(matches!(
        outcome,
        IntentOutcome::Drag {
            effect: DragEffect::Canceled {
                reason: DragCancelReason::OutsideBuckets,
                ..
            }
        }
    ));
    assert_eq!(status_of(&session, "legacy"), Status::Planned);
    assert_eq!(session.registry().moves, 0);
}

#[test]
fn cancel_mid_drag_leaves_registry_untouched() {
    let mut session = session();
    session.apply(BoardIntent::PointerDown {
        item: "legacy".to_string(),
        x: 20.0,
        y: 20.0,
    });
    session.apply(BoardIntent::PointerMove { x: 650.0, y: 20.0 });
    session.apply(BoardIntent::PointerCancel);
    assert!(session.drag().is_idle());
    assert_eq!(session.registry().moves, 0);
    let outcome = session.apply(BoardIntent::PointerUp { x: 650.0, y: 20.0 });
    assert_eq!(
        outcome,
        IntentOutcome::Drag {
            effect: DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag
            }
        }
    );
}

#[test]
fn click_falls_through_to_selection() {
    let mut session = session();
    session.apply(BoardIntent::PointerDown {
        item: "portal".to_string(),
        x: 620.0,
        y: 40.0,
    });
    let outcome = session.apply(BoardIntent::PointerUp { x: 621.0, y: 41.0 });
    assert_eq!(
        outcome,
        IntentOutcome::Opened {
            item: SolutionId::try_new("portal").unwrap()
        }
    );
    assert_eq!(session.detail().unwrap().title, "Customer Portal");
    assert_eq!(session.registry().moves, 0);
}

#[test]
fn pointer_down_on_unknown_item_is_ignored() {
    let mut session = session();
    let outcome = session.apply(BoardIntent::PointerDown {
        item: "ghost".to_string(),
        x: 1.0,
        y: 1.0,
    });
    assert_eq!(
        outcome,
        IntentOutcome::Noop {
            reason: NoopReason::UnknownSolution
        }
    );
    assert!(session.drag().is_idle());
}

#[test]
fn renderer_resolution_always_falls_back() {
    let renderers = RendererRegistry::with_builtins();
    for key in [None, Some(""), Some("  "), Some("NoSuchRenderer"), Some("generic")] {
        let resolved = renderers.resolve(key);
        assert_eq!(resolved.key, GENERIC_RENDERER);
        assert!(resolved.is_fallback());
    }
    assert_eq!(renderers.resolve(Some(" case_study ")).key, CASE_STUDY_RENDERER);

    let mut sol = item("legacy", "Legacy System Dependencies", Status::Planned, &[]);
    sol.detail_renderer_key = Some("NoSuchRenderer".to_string());
    let (key, content) = renderers.render(&sol);
    assert_eq!(key, GENERIC_RENDERER);
    assert_eq!(
        content.blocks.first(),
        Some(&ContentBlock::Paragraph {
            text: "Legacy System Dependencies description".to_string()
        })
    );
}

#[test]
fn renderer_registration_and_removal() {
    let mut renderers = RendererRegistry::empty();
    assert_eq!(renderers.keys(), vec![GENERIC_RENDERER]);
    assert_eq!(
        renderers.register("  ", |_| RenderedContent::default()),
        Err(RendererKeyError::Empty)
    );
    renderers
        .register("timeline", |solution| {
            let mut content = RenderedContent::default();
            content.push(ContentBlock::Heading {
                text: solution.title.clone(),
            });
            content
        })
        .unwrap();
    assert!(renderers.contains("timeline"));
    assert_eq!(renderers.resolve(Some("timeline")).key, "timeline");
    assert!(!renderers.unregister(GENERIC_RENDERER));
    assert!(renderers.unregister("timeline"));
    assert_eq!(renderers.resolve(Some("timeline")).key, GENERIC_RENDERER);
}

#[test]
fn impact_summary_splits_points() {
    let mut sol = item("mesh", "Service Mesh Rollout", Status::InProgress, &[]);
    sol.impact = "Cut latency by 30%. Unified tracing".to_string();
    let content = render_impact_summary(&sol);
    assert!(content.blocks.contains(&ContentBlock::Bullets {
        items: vec!["Cut latency by 30%".to_string(), "Unified tracing".to_string()]
    }));
}

#[test]
fn related_items_skip_only_dangling_ids() {
    let mut items = sample();
    items[0].related_ids = vec![
        "pipeline".to_string(),
        "nonexistent".to_string(),
        "legacy".to_string(),
        "pipeline".to_string(),
    ];
    let registry = MemoryRegistry::new(items);
    let source = registry.get("legacy").unwrap();
    let related = resolve_related(&registry, source);
    assert_eq!(ids(&related), vec!["pipeline", "legacy", "pipeline"]);
}

#[test]
fn modal_shows_one_related_card_for_partially_dangling_refs() {
    let mut items = sample();
    items[2].related_ids = vec!["mesh".to_string(), "nonexistent".to_string()];
    let mut session =
        BoardSession::new(MemoryRegistry::new(items), SessionConfig::default()).unwrap();
    session.apply(BoardIntent::SelectItem {
        item: "portal".to_string(),
    });
    let detail = session.detail().unwrap();
    assert_eq!(detail.related.len(), 1);
    assert_eq!(detail.related[0].id.as_str(), "mesh");
    assert_eq!(detail.status_label, "Showcase");
}

#[test]
fn related_navigation_replaces_content_with_bounded_history() {
    let mut session = session();
    session.apply(BoardIntent::SelectItem {
        item: "legacy".to_string(),
    });
    session.apply(BoardIntent::OpenRelated {
        item: "mesh".to_string(),
    });
    assert_eq!(session.detail().unwrap().id.as_str(), "mesh");
    assert!(session.detail().unwrap().can_go_back);

    assert_eq!(
        session.apply(BoardIntent::Back),
        IntentOutcome::Opened {
            item: SolutionId::try_new("legacy").unwrap()
        }
    );
    assert_eq!(
        session.apply(BoardIntent::Back),
        IntentOutcome::Noop {
            reason: NoopReason::NoPreviousItem
        }
    );

    let mut modal = DetailModal::default();
    modal.open(SolutionId::try_new("legacy").unwrap());
    for _ in 0..(MAX_BACK_STACK * 2) {
        modal.open_related(SolutionId::try_new("mesh").unwrap());
    }
    assert_eq!(modal.back_depth(), MAX_BACK_STACK);
}

#[test]
fn closing_the_modal_mutates_nothing() {
    let mut session = session();
    let before = session.registry().solutions().to_vec();
    session.apply(BoardIntent::SelectItem {
        item: "legacy".to_string(),
    });
    assert_eq!(session.apply(BoardIntent::CloseModal), IntentOutcome::Closed);
    assert!(session.detail().is_none());
    assert_eq!(session.registry().solutions(), before.as_slice());
    assert_eq!(
        session.apply(BoardIntent::CloseModal),
        IntentOutcome::Noop {
            reason: NoopReason::ModalClosed
        }
    );
}

#[test]
fn layout_mode_follows_viewport_changes() {
    let mut session = session();
    assert_eq!(session.layout_mode(), LayoutMode::Wide);
    assert_eq!(
        session.apply(BoardIntent::SetViewport { width: 420 }),
        IntentOutcome::LayoutChanged {
            mode: LayoutMode::Narrow
        }
    );
    assert_eq!(session.view().mode(), LayoutMode::Narrow);
    assert_eq!(
        session.apply(BoardIntent::SetViewport { width: 500 }),
        IntentOutcome::Updated
    );
    assert_eq!(
        session.apply(BoardIntent::SetViewport {
            width: DEFAULT_BREAKPOINT
        }),
        IntentOutcome::LayoutChanged {
            mode: LayoutMode::Wide
        }
    );
}

#[test]
fn wide_and_narrow_show_the_same_content() {
    let mut session = session();
    session.apply(BoardIntent::ToggleTag {
        tag: "integration".to_string(),
    });
    let wide_columns = match session.view() {
        BoardView::Wide { columns, .. } => columns,
        other => panic!("expected wide view, got {other:?}"),
    };
    assert_eq!(
        wide_columns.iter().map(|c| c.count).collect::<Vec<_>>(),
        vec![1, 0, 1]
    );

    session.apply(BoardIntent::SetViewport { width: 400 });
    for column in &wide_columns {
        session.apply(BoardIntent::SelectTab {
            bucket: column.bucket,
        });
        match session.view() {
            BoardView::Narrow { tabs, active, .. } => {
                assert_eq!(&active, column);
                let counts: Vec<usize> = tabs.iter().map(|tab| tab.count).collect();
                assert_eq!(counts, vec![1, 0, 1]);
                assert_eq!(tabs.iter().filter(|tab| tab.active).count(), 1);
            }
            other => panic!("expected narrow view, got {other:?}"),
        }
    }
}

#[test]
fn narrow_panels_and_category_follow_tab() {
    let mut session = session();
    session.apply(BoardIntent::SetViewport { width: 360 });
    session.apply(BoardIntent::TogglePanel {
        panel: Panel::Search,
    });
    session.apply(BoardIntent::ToggleCategory {
        category: Status::Completed,
    });
    match session.view() {
        BoardView::Narrow {
            active,
            search_panel_open,
            tags_panel_open,
            ..
        } => {
            assert_eq!(active.bucket, Status::Completed);
            assert!(search_panel_open);
            assert!(!tags_panel_open);
        }
        other => panic!("expected narrow view, got {other:?}"),
    }
}

#[test]
fn board_marks_dragged_card_and_drop_target() {
    let mut session = session();
    session.apply(BoardIntent::PointerDown {
        item: "legacy".to_string(),
        x: 20.0,
        y: 20.0,
    });
    session.apply(BoardIntent::PointerMove { x: 350.0, y: 20.0 });
    let BoardView::Wide { columns, .. } = session.view() else {
        panic!("expected wide view");
    };
    let target: Vec<Status> = columns
        .iter()
        .filter(|column| column.is_drop_target)
        .map(|column| column.bucket)
        .collect();
    assert_eq!(target, vec![Status::InProgress]);
    let dragging: Vec<&str> = columns
        .iter()
        .flat_map(|column| column.items.iter())
        .filter(|card| card.is_dragging)
        .map(|card| card.id.as_str())
        .collect();
    assert_eq!(dragging, vec!["legacy"]);
}

#[test]
fn intents_deserialize_from_tagged_json() {
    let intent: BoardIntent =
        serde_json::from_str(r#"{"intent":"toggle_category","category":"workbench"}"#).unwrap();
    assert_eq!(
        intent,
        BoardIntent::ToggleCategory {
            category: Status::InProgress
        }
    );
    let intent: BoardIntent = serde_json::from_str(
        r#"{"intent":"set_regions","regions":[{"bucket":"planned","rect":{"x":0,"y":0,"width":10,"height":10}}]}"#,
    )
    .unwrap();
    assert!(matches!(intent, BoardIntent::SetRegions { regions } if regions.len() == 1));
    let intent: BoardIntent = serde_json::from_str(r#"{"intent":"close_modal"}"#).unwrap();
    assert_eq!(intent, BoardIntent::CloseModal);
}

#[test]
fn session_rejects_bad_config() {
    let config = SessionConfig {
        breakpoint: 0,
        ..SessionConfig::default()
    };
    assert_eq!(
        BoardSession::new(MemoryRegistry::new(sample()), config).unwrap_err(),
        SessionConfigError::ZeroBreakpoint
    );
    let config = SessionConfig {
        drag_threshold: -1.0,
        ..SessionConfig::default()
    };
    assert!(matches!(
        BoardSession::new(MemoryRegistry::new(sample()), config).unwrap_err(),
        SessionConfigError::Drag(_)
    ));
}
