use crate::geometry::{Point, Rect};

use tb_core::Status;

/// Pointer travel (pixels) required before a press turns into a drag.
/// Keeps plain clicks on card buttons from starting a gesture.
pub const DEFAULT_ACTIVATION_DISTANCE: f32 = 5.0;

/// What a drop on a given target means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropKind {
    /// A column surface; dropping files the card under that status
    Column(Status),
    /// Another card; dropping adopts that card's current column
    Card(String),
}

/// One droppable region declared by the host for the current layout pass.
/// Declaration order is significant: columns first, then cards, and
/// collision ties resolve toward the earliest declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub kind: DropKind,
    pub rect: Rect,
}

impl DropTarget {
    pub fn column(status: Status, rect: Rect) -> Self {
        Self {
            kind: DropKind::Column(status),
            rect,
        }
    }

    pub fn card(task_id: impl Into<String>, rect: Rect) -> Self {
        Self {
            kind: DropKind::Card(task_id.into()),
            rect,
        }
    }
}

/// A finished gesture, handed to the board view for resolution.
/// `target` is None when the card was dropped over nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragConclusion {
    pub task_id: String,
    pub target: Option<DropKind>,
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Pointer is down but has not traveled the activation distance yet
    Pending {
        task_id: String,
        origin: Rect,
        press: Point,
    },
    Dragging {
        task_id: String,
        origin: Rect,
        press: Point,
        position: Point,
    },
    /// Keyboard-driven drag stepping through the declared target list
    KeyboardDragging { task_id: String, selection: usize },
}

/// Gesture state machine for moving cards between columns.
///
/// The engine is purely local: it tracks pointer/keyboard state against the
/// declared drop targets and reports a `DragConclusion` on release. All data
/// mutation happens in the board view, never here.
pub struct DragEngine {
    activation_distance: f32,
    targets: Vec<DropTarget>,
    gesture: Gesture,
}

impl DragEngine {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            activation_distance,
            targets: Vec::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Replace the declared drop targets for the current layout pass.
    /// Safe to call mid-gesture; the host re-declares after every reflow.
    pub fn set_targets(&mut self, targets: Vec<DropTarget>) {
        self.targets = targets;
    }

    pub fn targets(&self) -> &[DropTarget] {
        &self.targets
    }

    /// Pointer pressed down on a card. Ignored unless idle.
    pub fn press(&mut self, task_id: impl Into<String>, origin: Rect, at: Point) {
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }
        self.gesture = Gesture::Pending {
            task_id: task_id.into(),
            origin,
            press: at,
        };
    }

    /// Pointer moved. Promotes a pending press to a drag once the
    /// activation distance is reached.
    pub fn move_to(&mut self, at: Point) {
        match &mut self.gesture {
            Gesture::Pending {
                task_id,
                origin,
                press,
            } => {
                if press.distance_to(at) >= self.activation_distance {
                    self.gesture = Gesture::Dragging {
                        task_id: std::mem::take(task_id),
                        origin: *origin,
                        press: *press,
                        position: at,
                    };
                }
            }
            Gesture::Dragging { position, .. } => {
                *position = at;
            }
            _ => {}
        }
    }

    /// Pointer released or keyboard drop. A press that never became a drag
    /// yields None so the host can treat it as a click.
    pub fn release(&mut self) -> Option<DragConclusion> {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            Gesture::Idle | Gesture::Pending { .. } => None,
            Gesture::Dragging {
                task_id,
                origin,
                press,
                position,
            } => {
                let rect = origin.translated(position.x - press.x, position.y - press.y);
                let target = self
                    .collide(&task_id, rect)
                    .map(|index| self.targets[index].kind.clone());
                Some(DragConclusion { task_id, target })
            }
            Gesture::KeyboardDragging { task_id, selection } => {
                let target = self.targets.get(selection).map(|t| t.kind.clone());
                Some(DragConclusion { task_id, target })
            }
        }
    }

    /// Abort the gesture with no conclusion (Escape)
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Pick a card up with the keyboard. The candidate target starts at the
    /// card's own column and `key_next`/`key_prev` step from there.
    pub fn begin_keyboard(&mut self, task_id: impl Into<String>, current: Status) {
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }
        let task_id = task_id.into();
        let selection = self
            .targets
            .iter()
            .position(|t| t.kind == DropKind::Column(current))
            .or_else(|| self.targets.iter().position(|t| !is_own_card(t, &task_id)));
        let Some(selection) = selection else {
            return;
        };
        self.gesture = Gesture::KeyboardDragging { task_id, selection };
    }

    pub fn key_next(&mut self) {
        self.step_selection(true);
    }

    pub fn key_prev(&mut self) {
        self.step_selection(false);
    }

    fn step_selection(&mut self, forward: bool) {
        let Gesture::KeyboardDragging { task_id, selection } = &mut self.gesture else {
            return;
        };
        let len = self.targets.len();
        if len == 0 {
            return;
        }
        let mut index = (*selection).min(len - 1);
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if !is_own_card(&self.targets[index], task_id) {
                *selection = index;
                return;
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self.gesture,
            Gesture::Dragging { .. } | Gesture::KeyboardDragging { .. }
        )
    }

    /// Id of the card currently being dragged
    pub fn active_task(&self) -> Option<&str> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Pending { task_id, .. }
            | Gesture::Dragging { task_id, .. }
            | Gesture::KeyboardDragging { task_id, .. } => Some(task_id),
        }
    }

    /// Current bounding box of the dragged card (pointer drags only)
    pub fn dragged_rect(&self) -> Option<Rect> {
        match &self.gesture {
            Gesture::Dragging {
                origin,
                press,
                position,
                ..
            } => Some(origin.translated(position.x - press.x, position.y - press.y)),
            _ => None,
        }
    }

    /// Target the drop would land on if released now
    pub fn hovered(&self) -> Option<&DropTarget> {
        match &self.gesture {
            Gesture::Dragging { task_id, .. } => {
                let rect = self.dragged_rect()?;
                self.collide(task_id, rect).map(|index| &self.targets[index])
            }
            Gesture::KeyboardDragging { selection, .. } => self.targets.get(*selection),
            _ => None,
        }
    }

    /// Among targets overlapping the dragged rect, pick the one whose
    /// center lies closest to the dragged rect's center. Equal distances
    /// keep the earliest declared target. The dragged card's own target
    /// never matches.
    fn collide(&self, task_id: &str, rect: Rect) -> Option<usize> {
        let center = rect.center();
        let mut best: Option<(usize, f32)> = None;
        for (index, target) in self.targets.iter().enumerate() {
            if is_own_card(target, task_id) {
                continue;
            }
            if !target.rect.intersects(&rect) {
                continue;
            }
            let distance = target.rect.center().distance_to(center);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl Default for DragEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

fn is_own_card(target: &DropTarget, task_id: &str) -> bool {
    matches!(&target.kind, DropKind::Card(id) if id == task_id)
}
