//! Pointer-driven editing: dragging, connecting, resizing and selection.
//!
//! The [`InteractionController`] consumes [`InputEvent`]s from the host,
//! interprets them against its [`InteractionState`] and [`Selection`], and
//! mutates a [`DiagramModel`]. The controller is a plain value; hosts may
//! serialize it together with the model to restore an editing session.
//!
//! # Transitions
//!
//! | Event                          | From                   | To                        |
//! |--------------------------------|------------------------|---------------------------|
//! | node pointer-down              | any                    | `DraggingNode`            |
//! | node pointer-down + shift      | `ConnectingFrom(a)`    | `Idle` (creates `a -> b`) |
//! | node pointer-down + shift on a | `ConnectingFrom(a)`    | `ConnectingFrom(a)`       |
//! | node pointer-down + shift      | other                  | `ConnectingFrom`          |
//! | handle pointer-down            | any (selected segment) | `ResizingSegment`         |
//! | pointer-up                     | drag or resize         | `Idle`                    |
//! | background click               | any                    | `Idle`                    |

mod event;
mod state;

pub use event::{InputEvent, Modifiers, Propagation, PropertyEdit};
pub use state::{InteractionState, Selection};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use netsketch_core::{
    geometry::{CanvasTransform, Point},
    identifier::{NodeId, SegmentId},
    node_kind::NodeKind,
    resize::{self, ResizeHandle},
};

use crate::model::{DEFAULT_CONNECTION_LABEL, DiagramModel, NodeField};

/// State machine turning host input events into model mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionController {
    state: InteractionState,
    selection: Selection,
    /// Node kind carried by the palette drag in progress.
    pending_kind: Option<NodeKind>,
    transform: CanvasTransform,
}

impl InteractionController {
    /// Creates an idle controller for a canvas placed by `transform`.
    pub fn new(transform: CanvasTransform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending_kind(&self) -> Option<NodeKind> {
        self.pending_kind
    }

    pub fn transform(&self) -> CanvasTransform {
        self.transform
    }

    /// Moves the canvas origin, e.g. after the host layout changed.
    pub fn set_transform(&mut self, transform: CanvasTransform) {
        self.transform = transform;
    }

    /// Applies one input event to `model`.
    pub fn handle(&mut self, model: &mut DiagramModel, event: InputEvent) -> Propagation {
        trace!(event:? = event, state:? = self.state; "Handling input event");

        match event {
            InputEvent::PaletteDragStart { kind } => {
                self.pending_kind = Some(NodeKind::from_token_or_default(&kind));
                Propagation::Continue
            }
            InputEvent::Drop { screen } => {
                self.drop_pending(model, screen);
                Propagation::Continue
            }
            InputEvent::NodePointerDown { node, modifiers } => {
                if modifiers.shift {
                    self.connect_to(model, node);
                } else {
                    self.select(Selection::Node(node));
                    self.transition(InteractionState::DraggingNode { node });
                }
                Propagation::Continue
            }
            InputEvent::PointerMove { screen } => {
                self.pointer_move(model, screen);
                Propagation::Continue
            }
            InputEvent::PointerUp => {
                if matches!(
                    self.state,
                    InteractionState::DraggingNode { .. } | InteractionState::ResizingSegment { .. }
                ) {
                    self.transition(InteractionState::Idle);
                }
                Propagation::Continue
            }
            InputEvent::BackgroundClick => {
                self.select(Selection::None);
                if self.state.connecting_from().is_some() {
                    self.transition(InteractionState::Idle);
                }
                Propagation::Continue
            }
            InputEvent::ConnectionClick { connection } => {
                self.select(Selection::Connection(connection));
                Propagation::Stop
            }
            InputEvent::SegmentClick { segment } => {
                self.select(Selection::Segment(segment));
                Propagation::Stop
            }
            InputEvent::HandlePointerDown { segment, handle } => {
                self.start_resize(segment, handle);
                Propagation::Stop
            }
        }
    }

    /// Applies a property edit to the selected entity.
    ///
    /// Returns `false` when the edit does not match the selection or the
    /// selected entity no longer exists.
    pub fn apply_edit(&self, model: &mut DiagramModel, edit: PropertyEdit) -> bool {
        match (self.selection, edit) {
            (Selection::Node(id), PropertyEdit::NodeLabel(label)) => {
                model.update_node_field(id, NodeField::Label(label))
            }
            (Selection::Node(id), PropertyEdit::NodeIp(ip)) => {
                model.update_node_field(id, NodeField::Ip(ip))
            }
            (Selection::Node(id), PropertyEdit::NodeNetworks(text)) => {
                model.update_node_field(id, NodeField::Networks(split_lines(&text)))
            }
            (Selection::Node(id), PropertyEdit::NodeServices(text)) => {
                model.update_node_field(id, NodeField::Services(split_lines(&text)))
            }
            (Selection::Connection(id), PropertyEdit::ConnectionLabel(label)) => {
                model.update_connection_label(id, label)
            }
            (Selection::Segment(id), PropertyEdit::SegmentLabel(label)) => {
                model.update_segment_label(id, label)
            }
            (selection, edit) => {
                debug!(selection:? = selection, edit:? = edit; "Edit does not match selection");
                false
            }
        }
    }

    /// Returns to `Idle` with nothing selected and no palette drag pending.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.selection = Selection::None;
        self.pending_kind = None;
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            debug!(from:? = self.state, to:? = next; "Interaction state changed");
        }
        self.state = next;
    }

    fn select(&mut self, selection: Selection) {
        trace!(selection:? = selection; "Selection changed");
        self.selection = selection;
    }

    fn drop_pending(&mut self, model: &mut DiagramModel, screen: Point) {
        let Some(kind) = self.pending_kind.take() else {
            debug!("Ignoring drop without a palette drag");
            return;
        };
        let position = self.transform.to_canvas(screen);
        model.add_node(kind, position, None);
    }

    fn connect_to(&mut self, model: &mut DiagramModel, node: NodeId) {
        let Some(source) = self.state.connecting_from() else {
            self.transition(InteractionState::ConnectingFrom { node });
            return;
        };

        match model.add_connection(source, node, DEFAULT_CONNECTION_LABEL) {
            Ok(_) => self.transition(InteractionState::Idle),
            Err(err) => debug!(err:err; "Connection not created"),
        }
    }

    fn start_resize(&mut self, segment: SegmentId, handle: ResizeHandle) {
        if self.selection.segment() != Some(segment) {
            debug!(segment:% = segment; "Ignoring handle of unselected segment");
            return;
        }
        self.transition(InteractionState::ResizingSegment { segment, handle });
    }

    fn pointer_move(&mut self, model: &mut DiagramModel, screen: Point) {
        let pointer = self.transform.to_canvas(screen);
        match self.state {
            InteractionState::DraggingNode { node } => {
                model.update_node_position(node, pointer);
            }
            InteractionState::ResizingSegment { segment, handle } => {
                let Some(current) = model.segment(segment).map(|s| s.bounds()) else {
                    debug!(segment:% = segment; "Resized segment no longer exists");
                    return;
                };
                model.update_segment_geometry(segment, resize::resize(current, pointer, handle));
            }
            InteractionState::Idle | InteractionState::ConnectingFrom { .. } => {}
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsketch_core::geometry::Size;

    fn setup() -> (InteractionController, DiagramModel, NodeId, NodeId) {
        let mut model = DiagramModel::default();
        let a = model
            .add_node(NodeKind::Server, Point::new(100.0, 100.0), None)
            .id();
        let b = model
            .add_node(NodeKind::Router, Point::new(300.0, 100.0), None)
            .id();
        (InteractionController::default(), model, a, b)
    }

    fn shift_down(node: NodeId) -> InputEvent {
        InputEvent::NodePointerDown {
            node,
            modifiers: Modifiers::SHIFT,
        }
    }

    #[test]
    fn test_palette_drop_creates_node_at_canvas_position() {
        let mut model = DiagramModel::default();
        let mut controller = InteractionController::new(CanvasTransform::new(Point::new(250.0, 0.0)));

        controller.handle(
            &mut model,
            InputEvent::PaletteDragStart {
                kind: "firewall".to_string(),
            },
        );
        controller.handle(
            &mut model,
            InputEvent::Drop {
                screen: Point::new(400.0, 120.0),
            },
        );

        let node = model.nodes().next().unwrap();
        assert_eq!(node.kind(), NodeKind::Firewall);
        assert_eq!(node.position(), Point::new(150.0, 120.0));
        assert_eq!(node.label(), "firewall-1");
        assert_eq!(controller.pending_kind(), None);
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let mut model = DiagramModel::default();
        let mut controller = InteractionController::default();
        controller.handle(
            &mut model,
            InputEvent::Drop {
                screen: Point::default(),
            },
        );
        assert!(model.is_empty());
    }

    #[test]
    fn test_unknown_palette_kind_becomes_server() {
        let mut model = DiagramModel::default();
        let mut controller = InteractionController::default();
        controller.handle(
            &mut model,
            InputEvent::PaletteDragStart {
                kind: "mainframe".to_string(),
            },
        );
        assert_eq!(controller.pending_kind(), Some(NodeKind::Server));
    }

    #[test]
    fn test_drag_moves_only_dragged_node() {
        let (mut controller, mut model, a, b) = setup();
        controller.handle(
            &mut model,
            InputEvent::NodePointerDown {
                node: a,
                modifiers: Modifiers::NONE,
            },
        );
        assert_eq!(controller.selection(), Selection::Node(a));
        assert_eq!(controller.state(), InteractionState::DraggingNode { node: a });

        controller.handle(
            &mut model,
            InputEvent::PointerMove {
                screen: Point::new(42.0, 24.0),
            },
        );
        controller.handle(&mut model, InputEvent::PointerUp);

        assert_eq!(model.node(a).unwrap().position(), Point::new(42.0, 24.0));
        assert_eq!(model.node(b).unwrap().position(), Point::new(300.0, 100.0));
        assert!(controller.state().is_idle());
    }

    #[test]
    fn test_shift_click_protocol_creates_connection() {
        let (mut controller, mut model, a, b) = setup();
        controller.handle(&mut model, shift_down(a));
        assert_eq!(controller.state().connecting_from(), Some(a));

        controller.handle(&mut model, shift_down(b));
        assert!(controller.state().is_idle());

        let connection = model.connections().next().unwrap();
        assert_eq!((connection.from(), connection.to()), (a, b));
        assert_eq!(connection.label(), "Connection");
    }

    #[test]
    fn test_shift_click_same_node_keeps_connecting() {
        let (mut controller, mut model, a, _) = setup();
        controller.handle(&mut model, shift_down(a));
        controller.handle(&mut model, shift_down(a));

        assert_eq!(model.connection_count(), 0);
        assert_eq!(controller.state(), InteractionState::ConnectingFrom { node: a });
    }

    #[test]
    fn test_pointer_up_preserves_connecting() {
        let (mut controller, mut model, a, _) = setup();
        controller.handle(&mut model, shift_down(a));
        controller.handle(&mut model, InputEvent::PointerUp);
        assert_eq!(controller.state().connecting_from(), Some(a));
    }

    #[test]
    fn test_background_click_cancels_connecting_and_selection() {
        let (mut controller, mut model, a, _) = setup();
        controller.handle(
            &mut model,
            InputEvent::NodePointerDown {
                node: a,
                modifiers: Modifiers::NONE,
            },
        );
        controller.handle(&mut model, InputEvent::PointerUp);
        controller.handle(&mut model, shift_down(a));
        controller.handle(&mut model, InputEvent::BackgroundClick);

        assert!(controller.selection().is_none());
        assert!(controller.state().is_idle());
    }

    #[test]
    fn test_clicks_select_exclusively_and_stop() {
        let (mut controller, mut model, a, b) = setup();
        let connection = model.add_connection(a, b, "link").unwrap().id();
        let segment = model.add_segment().id();

        let stop = controller.handle(&mut model, InputEvent::ConnectionClick { connection });
        assert_eq!(stop, Propagation::Stop);
        assert_eq!(controller.selection().connection(), Some(connection));
        assert_eq!(controller.selection().node(), None);

        let stop = controller.handle(&mut model, InputEvent::SegmentClick { segment });
        assert_eq!(stop, Propagation::Stop);
        assert_eq!(controller.selection(), Selection::Segment(segment));
    }

    #[test]
    fn test_resize_requires_selected_segment() {
        let mut model = DiagramModel::default();
        let mut controller = InteractionController::default();
        let segment = model.add_segment().id();

        let handle_down = InputEvent::HandlePointerDown {
            segment,
            handle: ResizeHandle::Se,
        };
        assert_eq!(controller.handle(&mut model, handle_down.clone()), Propagation::Stop);
        assert!(controller.state().is_idle());

        controller.handle(&mut model, InputEvent::SegmentClick { segment });
        controller.handle(&mut model, handle_down);
        assert_eq!(
            controller.state(),
            InteractionState::ResizingSegment {
                segment,
                handle: ResizeHandle::Se
            }
        );
    }

    #[test]
    fn test_resize_follows_pointer_from_current_geometry() {
        let mut model = DiagramModel::default();
        let mut controller = InteractionController::default();
        let segment = model.add_segment().id();

        controller.handle(&mut model, InputEvent::SegmentClick { segment });
        controller.handle(
            &mut model,
            InputEvent::HandlePointerDown {
                segment,
                handle: ResizeHandle::Nw,
            },
        );
        for (x, y) in [(40.0, 40.0), (30.0, 20.0)] {
            controller.handle(
                &mut model,
                InputEvent::PointerMove {
                    screen: Point::new(x, y),
                },
            );
        }
        controller.handle(&mut model, InputEvent::PointerUp);

        let bounds = model.segment(segment).unwrap().bounds();
        assert_eq!(bounds.min_point(), Point::new(30.0, 20.0));
        assert_eq!(bounds.to_size(), Size::new(320.0, 230.0));
        assert!(controller.state().is_idle());
    }

    #[test]
    fn test_edits_follow_selection() {
        let (mut controller, mut model, a, _) = setup();
        assert!(!controller.apply_edit(&mut model, PropertyEdit::NodeIp("10.0.0.1".into())));

        controller.handle(
            &mut model,
            InputEvent::NodePointerDown {
                node: a,
                modifiers: Modifiers::NONE,
            },
        );
        assert!(controller.apply_edit(&mut model, PropertyEdit::NodeIp("10.0.0.1".into())));
        assert!(controller.apply_edit(
            &mut model,
            PropertyEdit::NodeServices("http\nssh\n".into())
        ));
        assert!(!controller.apply_edit(&mut model, PropertyEdit::SegmentLabel("nope".into())));

        let metadata = model.node(a).unwrap().metadata();
        assert_eq!(metadata.ip, "10.0.0.1");
        assert_eq!(metadata.services, vec!["http", "ssh", ""]);
    }

    #[test]
    fn test_reset() {
        let (mut controller, mut model, a, _) = setup();
        controller.handle(&mut model, shift_down(a));
        controller.handle(
            &mut model,
            InputEvent::PaletteDragStart {
                kind: "cloud".into(),
            },
        );
        controller.reset();
        assert_eq!(controller, InteractionController::default());
    }
}
