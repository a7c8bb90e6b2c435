use std::collections::HashSet;

use netsketch::{
    Editor, NetsketchError,
    config::AppConfig,
    geometry::{Bounds, Point, Size},
    identifier::{NodeId, SegmentId},
    interaction::{
        InputEvent, InteractionController, InteractionState, Modifiers, Propagation, PropertyEdit,
        Selection,
    },
    model::DiagramModel,
    node_kind::NodeKind,
    resize::ResizeHandle,
};

fn drop_node(editor: &mut Editor, kind: &str, at: Point) -> NodeId {
    editor.handle_event(InputEvent::PaletteDragStart { kind: kind.into() });
    editor.handle_event(InputEvent::Drop { screen: at });
    editor.model().nodes().last().expect("node dropped").id()
}

fn shift_click(editor: &mut Editor, node: NodeId) {
    editor.handle_event(InputEvent::NodePointerDown {
        node,
        modifiers: Modifiers::SHIFT,
    });
}

fn select_segment(editor: &mut Editor) -> SegmentId {
    let id = editor.add_segment().id();
    editor.handle_event(InputEvent::SegmentClick { segment: id });
    id
}

fn resize_to(editor: &mut Editor, segment: SegmentId, handle: ResizeHandle, to: Point) -> Bounds {
    editor.handle_event(InputEvent::HandlePointerDown { segment, handle });
    editor.handle_event(InputEvent::PointerMove { screen: to });
    editor.handle_event(InputEvent::PointerUp);
    editor.model().segment(segment).expect("segment exists").bounds()
}

#[test]
fn test_node_ids_unique_and_ordered() {
    let mut editor = Editor::default();
    let kinds = ["server", "router", "wifi", "bogus", "database"];
    let ids: Vec<NodeId> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| drop_node(&mut editor, kind, Point::new(i as f32 * 10.0, 0.0)))
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    let order: Vec<NodeId> = editor.model().nodes().map(|n| n.id()).collect();
    assert_eq!(order, ids);

    let labels: Vec<&str> = editor.model().nodes().map(|n| n.label()).collect();
    assert_eq!(
        labels,
        vec!["server-1", "router-2", "wifi-3", "server-4", "database-5"]
    );
}

#[test]
fn test_drag_moves_only_target() {
    let mut editor = Editor::default();
    let a = drop_node(&mut editor, "server", Point::new(100.0, 100.0));
    let b = drop_node(&mut editor, "router", Point::new(200.0, 200.0));

    editor.handle_event(InputEvent::NodePointerDown {
        node: a,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(
        editor.controller().state(),
        InteractionState::DraggingNode { node: a }
    );
    editor.handle_event(InputEvent::PointerMove {
        screen: Point::new(432.5, 17.25),
    });
    editor.handle_event(InputEvent::PointerUp);

    assert_eq!(
        editor.model().node(a).unwrap().position(),
        Point::new(432.5, 17.25)
    );
    assert_eq!(
        editor.model().node(b).unwrap().position(),
        Point::new(200.0, 200.0)
    );
    assert!(editor.controller().state().is_idle());
    assert_eq!(editor.controller().selection(), Selection::Node(a));
}

#[test]
fn test_resize_se_clamps_to_minimum() {
    let mut editor = Editor::default();
    let segment = select_segment(&mut editor);

    let bounds = resize_to(&mut editor, segment, ResizeHandle::Se, Point::new(40.0, 40.0));
    assert_eq!(
        bounds,
        Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(50.0, 50.0))
    );
}

#[test]
fn test_resize_nw_keeps_opposite_corner() {
    let mut editor = Editor::default();
    let segment = select_segment(&mut editor);

    let bounds = resize_to(
        &mut editor,
        segment,
        ResizeHandle::Nw,
        Point::new(1000.0, 1000.0),
    );
    assert_eq!(
        bounds,
        Bounds::new_from_top_left(Point::new(300.0, 200.0), Size::new(50.0, 50.0))
    );
}

#[test]
fn test_handle_of_unselected_segment_ignored() {
    let mut editor = Editor::default();
    let segment = editor.add_segment().id();

    let propagation = editor.handle_event(InputEvent::HandlePointerDown {
        segment,
        handle: ResizeHandle::Se,
    });
    assert_eq!(propagation, Propagation::Stop);
    assert!(editor.controller().state().is_idle());
}

#[test]
fn test_import_dedups_within_script() {
    let mut editor = Editor::default();
    let summary = editor.import("A -> B\nB -> C\nA -> A").unwrap();

    assert_eq!(summary.nodes_created, 3);
    let labels: Vec<&str> = editor.model().nodes().map(|n| n.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);

    let model = editor.model();
    let pairs: Vec<(&str, &str)> = model
        .resolved_connections()
        .map(|(_, from, to)| (from.label(), to.label()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
}

#[test]
fn test_import_failure_reports_applied_lines() {
    let mut editor = Editor::default();
    let err = editor.import("A -> B\n -> C").unwrap_err();

    assert!(matches!(
        &err,
        NetsketchError::Import { applied, .. } if applied.relations == 1
    ));
    assert!(err.to_string().starts_with("import failed, check the format"));
    assert_eq!(editor.model().connection_count(), 1);
}

#[test]
fn test_self_connect_keeps_waiting() {
    let mut editor = Editor::default();
    let a = drop_node(&mut editor, "server", Point::new(0.0, 0.0));
    let b = drop_node(&mut editor, "switch", Point::new(50.0, 0.0));

    shift_click(&mut editor, a);
    shift_click(&mut editor, a);
    shift_click(&mut editor, a);
    assert_eq!(editor.model().connection_count(), 0);
    assert_eq!(
        editor.controller().state(),
        InteractionState::ConnectingFrom { node: a }
    );

    shift_click(&mut editor, b);
    assert_eq!(editor.model().connection_count(), 1);
    assert!(editor.controller().state().is_idle());

    let connection = editor.model().connections().next().unwrap();
    assert_eq!((connection.from(), connection.to()), (a, b));
    assert_eq!(connection.label(), "Connection");
}

#[test]
fn test_export_skips_dangling_connection() {
    let mut model = DiagramModel::default();
    let a = model
        .add_node(NodeKind::Server, Point::new(100.0, 100.0), None)
        .id();
    let b = model
        .add_node(NodeKind::Firewall, Point::new(300.0, 100.0), None)
        .id();
    model.add_connection(a, b, "live").unwrap();
    model
        .add_connection(b, NodeId::from_raw(9_999), "dangling")
        .unwrap();

    let svg = netsketch::export::svg::Svg::new(
        "unused.svg",
        netsketch::export::svg::SvgStyle::default(),
    )
    .render_string(&model);

    assert_eq!(svg.matches(r#"class="node-rect""#).count(), 2);
    assert_eq!(svg.matches("<line").count(), 1);
    assert!(!svg.contains("dangling"));
}

#[test]
fn test_export_ignores_selection() {
    let mut editor = Editor::default();
    let a = drop_node(&mut editor, "cloud", Point::new(100.0, 100.0));
    let before = editor.export_svg().unwrap();

    editor.handle_event(InputEvent::NodePointerDown {
        node: a,
        modifiers: Modifiers::NONE,
    });
    editor.handle_event(InputEvent::PointerUp);
    assert_eq!(editor.export_svg().unwrap(), before);
}

#[test]
fn test_clear_all_resets_everything() {
    let mut editor = Editor::default();
    let a = drop_node(&mut editor, "server", Point::new(0.0, 0.0));
    editor.import("x -> y").unwrap();
    editor.add_segment();
    shift_click(&mut editor, a);
    editor.handle_event(InputEvent::PaletteDragStart {
        kind: "router".into(),
    });

    editor.clear_all();

    assert!(editor.model().is_empty());
    assert!(editor.controller().state().is_idle());
    assert!(editor.controller().selection().is_none());
    assert_eq!(editor.controller().pending_kind(), None);

    let b = drop_node(&mut editor, "server", Point::new(0.0, 0.0));
    assert_ne!(a, b);
}

#[test]
fn test_property_edits_follow_selection() {
    let mut editor = Editor::default();
    let a = drop_node(&mut editor, "server", Point::new(0.0, 0.0));

    assert!(!editor.apply_edit(PropertyEdit::NodeLabel("web".into())));

    editor.handle_event(InputEvent::NodePointerDown {
        node: a,
        modifiers: Modifiers::NONE,
    });
    editor.handle_event(InputEvent::PointerUp);
    assert!(editor.apply_edit(PropertyEdit::NodeLabel("web".into())));
    assert!(editor.apply_edit(PropertyEdit::NodeServices("http\n\nssh".into())));
    assert!(!editor.apply_edit(PropertyEdit::SegmentLabel("dmz".into())));

    let node = editor.model().node(a).unwrap();
    assert_eq!(node.label(), "web");
    assert_eq!(node.metadata().services, vec!["http", "", "ssh"]);
}

#[test]
fn test_canvas_origin_from_config() {
    let config: AppConfig = serde_json::from_str(r#"{"canvas": {"origin_x": 20, "origin_y": 40}}"#)
        .expect("valid config");
    let mut editor = Editor::new(config);
    let a = drop_node(&mut editor, "server", Point::new(120.0, 140.0));

    assert_eq!(
        editor.model().node(a).unwrap().position(),
        Point::new(100.0, 100.0)
    );
}

#[test]
fn test_write_svg_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network-diagram.svg");

    let mut editor = Editor::default();
    editor.import("lb -> app").unwrap();
    editor.write_svg(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<?xml"));
    assert!(written.contains("lb"));
}

#[test]
fn test_write_svg_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");

    let err = Editor::default().write_svg(&path).unwrap_err();
    assert!(matches!(err, NetsketchError::Export(_)));
}

#[test]
fn test_controller_round_trips_through_json() {
    let mut model = DiagramModel::default();
    let mut controller = InteractionController::default();
    let node = model
        .add_node(NodeKind::Monitor, Point::new(0.0, 0.0), None)
        .id();
    controller.handle(
        &mut model,
        InputEvent::NodePointerDown {
            node,
            modifiers: Modifiers::SHIFT,
        },
    );

    let json = serde_json::to_string(&controller).unwrap();
    let restored: InteractionController = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, controller);
    assert_eq!(restored.state().connecting_from(), Some(node));
}

#[test]
fn test_events_deserialize_from_host_json() {
    let event: InputEvent =
        serde_json::from_str(r#"{"type": "handle-pointer-down", "segment": 3, "handle": "nw"}"#)
            .unwrap();
    assert_eq!(
        event,
        InputEvent::HandlePointerDown {
            segment: SegmentId::from_raw(3),
            handle: ResizeHandle::Nw,
        }
    );
}
