use super::value_objects::{HandleId, Selection, ValueSpace};

/// Domain entity - one draggable endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    pub id: HandleId,
    value: i32,
}

impl Handle {
    pub fn new(id: HandleId, value: i32, space: &ValueSpace) -> Self {
        Self { id, value: space.clamp(value) }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Store a new value, clamped into the value space. Returns `true` when it changed.
    pub fn set_value(&mut self, value: i32, space: &ValueSpace) -> bool {
        let clamped = space.clamp(value);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }
}

/// Domain entity - both handles of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlePair {
    handles: [Handle; 2],
}

impl HandlePair {
    pub fn new(value1: i32, value2: i32, space: &ValueSpace) -> Self {
        Self {
            handles: [
                Handle::new(HandleId::First, value1, space),
                Handle::new(HandleId::Second, value2, space),
            ],
        }
    }

    pub fn get(&self, id: HandleId) -> &Handle {
        &self.handles[id.index()]
    }

    pub fn get_mut(&mut self, id: HandleId) -> &mut Handle {
        &mut self.handles[id.index()]
    }

    pub fn values(&self) -> (i32, i32) {
        (self.handles[0].value(), self.handles[1].value())
    }

    pub fn selection(&self) -> Selection {
        let (a, b) = self.values();
        Selection::from_values(a, b)
    }
}

/// Drag session state. At most one handle is dragged at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(HandleId),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn active_handle(&self) -> Option<HandleId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(*id),
        }
    }

    /// Start dragging `handle`. Returns the session that was replaced, if any.
    pub fn begin(&mut self, handle: HandleId) -> Option<HandleId> {
        let previous = self.active_handle();
        *self = DragState::Dragging(handle);
        previous
    }

    /// Stop dragging. Returns the handle that was released; `None` when already idle.
    pub fn end(&mut self) -> Option<HandleId> {
        let released = self.active_handle();
        *self = DragState::Idle;
        released
    }
}
