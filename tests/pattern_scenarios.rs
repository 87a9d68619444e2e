//! Scenario tests: one walkthrough per pattern, driven through the public
//! reducers the way a host UI would drive them.

use patternkit::model::{CollectionEvent, FilterSelection, Item, ItemId, NodeId, SortDescriptor};
use patternkit::source::FeedSource;
use patternkit::state::{
    handle_collection_action, handle_expansion_action, handle_overlay_action, CollectionAction,
    CollectionState, ExpansionAction, ExpansionMode, ExpansionState, GallerySettings,
    GalleryState, LightboxState, OverlayAction, StepperState, ZoomConfig,
};
use patternkit::stories::{find_story, fixtures};

/// 24 products; the first five are "Rare", the rest "Common".
fn catalog_items() -> Vec<Item> {
    (0..24)
        .map(|i| {
            let rarity = if i < 5 { "Rare" } else { "Common" };
            Item::new(
                ItemId::new(format!("sku-{i:02}")).expect("valid id"),
                format!("SKU {i}"),
            )
            .with_attr("rarity", rarity)
            .with_attr("price", (i % 4) as i64)
        })
        .collect()
}

fn node(id: &str) -> NodeId {
    NodeId::new(id).expect("valid id")
}

// ===== Collection =====

#[test]
fn filter_change_on_last_page_resets_to_first_page() {
    let items = catalog_items();
    let state = CollectionState::new(8);

    let (state, events) = handle_collection_action(state, CollectionAction::SetPage(3), &items);
    assert_eq!(state.page(), 3);
    assert_eq!(events, vec![CollectionEvent::PageChanged { page: 3 }]);
    assert_eq!(state.view(&items).page.total_pages, 3);

    let (state, events) = handle_collection_action(
        state,
        CollectionAction::SetFilter {
            key: "rarity".to_string(),
            value: FilterSelection::from_raw("Rare"),
        },
        &items,
    );

    let view = state.view(&items);
    assert_eq!(state.page(), 1);
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.items.len(), 5);
    assert_eq!(
        events,
        vec![
            CollectionEvent::FilterChanged {
                key: "rarity".to_string(),
                value: FilterSelection::Is("Rare".to_string()),
            },
            CollectionEvent::PageChanged { page: 1 },
        ]
    );
}

#[test]
fn sort_change_keeps_the_current_page() {
    let items = catalog_items();
    let (state, _) = handle_collection_action(
        CollectionState::new(8),
        CollectionAction::SetPage(2),
        &items,
    );
    let (state, events) = handle_collection_action(
        state,
        CollectionAction::SetSort(Some(SortDescriptor::desc("price"))),
        &items,
    );

    assert_eq!(state.page(), 2);
    assert!(matches!(
        events.as_slice(),
        [CollectionEvent::SortChanged { sort: Some(_) }]
    ));
}

#[test]
fn page_request_past_the_end_clamps() {
    let items = catalog_items();
    let (state, _) = handle_collection_action(
        CollectionState::new(8),
        CollectionAction::SetPage(99),
        &items,
    );
    assert_eq!(state.page(), 3);

    let (state, events) = handle_collection_action(state, CollectionAction::NextPage, &items);
    assert_eq!(state.page(), 3);
    assert!(events.is_empty(), "no page change past the end");
}

#[test]
fn filter_with_no_matches_yields_an_empty_single_page() {
    let items = catalog_items();
    let (state, _) = handle_collection_action(
        CollectionState::new(8),
        CollectionAction::SetFilter {
            key: "rarity".to_string(),
            value: FilterSelection::from_raw("Legendary"),
        },
        &items,
    );

    let view = state.view(&items);
    assert!(view.items.is_empty());
    assert!(view.page.is_empty());
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.page.range_label(), "0 of 0");
}

#[test]
fn activating_an_unknown_item_emits_nothing() {
    let items = catalog_items();
    let unknown = ItemId::new("sku-99").expect("valid id");
    let (_, events) = handle_collection_action(
        CollectionState::new(8),
        CollectionAction::ActivateItem(unknown),
        &items,
    );
    assert!(events.is_empty());
}

// ===== Expansion =====

#[test]
fn exclusive_mode_keeps_only_the_last_expanded_node() {
    let state = ExpansionState::new(ExpansionMode::Exclusive);
    let state = handle_expansion_action(state, ExpansionAction::Expand(node("src")));
    let state = handle_expansion_action(state, ExpansionAction::Expand(node("public")));

    assert_eq!(state.expanded(), &[node("public")]);
}

#[test]
fn inclusive_mode_keeps_both_nodes() {
    let state = ExpansionState::new(ExpansionMode::Inclusive);
    let state = handle_expansion_action(state, ExpansionAction::Expand(node("src")));
    let state = handle_expansion_action(state, ExpansionAction::Expand(node("public")));

    assert!(state.is_expanded(&node("src")));
    assert!(state.is_expanded(&node("public")));
    assert_eq!(state.len(), 2);
}

// ===== Overlay =====

#[test]
fn previous_from_first_image_wraps_to_last() {
    let lightbox = LightboxState::new(3, ZoomConfig::default());
    let (lightbox, _) = handle_overlay_action(lightbox, OverlayAction::Open(0));
    let (lightbox, _) = handle_overlay_action(lightbox, OverlayAction::Previous);

    assert_eq!(lightbox.index(), Some(2));
}

#[test]
fn zoom_in_at_maximum_stays_at_maximum() {
    let zoom = ZoomConfig {
        min: 1.0,
        max: 3.0,
        step: 0.5,
        initial: 3.0,
    };
    let lightbox = LightboxState::new(3, zoom);
    let (lightbox, _) = handle_overlay_action(lightbox, OverlayAction::Open(1));
    assert_eq!(lightbox.zoom(), Some(3.0));

    let (lightbox, event) = handle_overlay_action(lightbox, OverlayAction::ZoomIn);
    assert_eq!(lightbox.zoom(), Some(3.0));
    assert!(event.is_none());
}

#[test]
fn opening_out_of_range_leaves_the_overlay_closed() {
    let lightbox = LightboxState::new(3, ZoomConfig::default());
    let (lightbox, event) = handle_overlay_action(lightbox, OverlayAction::Open(3));
    assert!(!lightbox.is_open());
    assert!(event.is_none());
}

// ===== Stepper =====

#[test]
fn back_on_first_step_is_a_no_op() {
    let mut stepper = StepperState::new(3, false);
    assert!(stepper.back().is_none());
    assert_eq!(stepper.active(), Some(0));
}

#[test]
fn linear_stepper_rejects_forward_jumps() {
    let mut stepper = StepperState::new(3, true);
    assert!(stepper.go_to(2).is_none());
    assert_eq!(stepper.active(), Some(0));

    stepper.advance();
    stepper.advance();
    assert_eq!(stepper.active(), Some(2));
    assert!(
        stepper.go_to(0).is_some(),
        "backward jumps are always allowed"
    );
    assert!(stepper.go_to(2).is_some(), "completed steps stay reachable");
}

// ===== Infinite feed =====

#[test]
fn gallery_feed_loads_until_exhausted() {
    let catalog = fixtures::demo_catalog().expect("fixture builds");
    let mut state = GalleryState::new(catalog, GallerySettings::default()).expect("gallery builds");
    let (feed_story, _) = find_story("feed").expect("feed story");
    state.select_story(feed_story);

    let mut source = FeedSource::inline();
    // Taller than the whole feed, so every completion re-triggers the sentinel
    state.set_feed_viewport(100);

    let mut rounds = 0;
    while let Some(request) = state.take_load_request() {
        rounds += 1;
        assert!(rounds <= 20, "feed never settled");
        source.submit(request);
        for response in source.poll() {
            let batch = response.result.expect("inline batch");
            state.apply_feed_batch(response.token, batch);
        }
    }

    assert_eq!(state.feed_items().len(), fixtures::FEED_TOTAL);
    assert!(state.feed.is_exhausted());
}
