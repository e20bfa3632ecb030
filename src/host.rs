// What the engine needs from whoever hosts it: frame scheduling, event
// subscriptions, the container box and the device pixel density.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::types::Bounds;

pub type FrameCallback = Box<dyn FnOnce()>;
pub type Listener = Rc<dyn Fn(&HostEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerLeave,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// Pointer moved; viewport coordinates
    PointerMove { client_x: f32, client_y: f32 },
    /// Pointer left the viewport
    PointerLeave,
    /// Container box changed; CSS pixels
    Resize { width: f32, height: f32, device_pixel_ratio: f32 },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove { .. } => EventKind::PointerMove,
            HostEvent::PointerLeave => EventKind::PointerLeave,
            HostEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

pub trait Host {
    /// Container box in viewport CSS pixels.
    fn container_bounds(&self) -> Bounds;
    fn device_pixel_ratio(&self) -> f32;

    /// Run `callback` once on the next display refresh.
    fn request_frame(&self, callback: FrameCallback) -> FrameId;
    /// Drop a pending frame request. Unknown ids are ignored.
    fn cancel_frame(&self, id: FrameId);

    fn subscribe(&self, kind: EventKind, listener: Listener) -> ListenerId;
    /// Detach a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Frame queue plus listener registry, shared by the concrete hosts.
#[derive(Default)]
pub struct Dispatcher {
    next_id: Cell<u64>,
    frames: RefCell<Vec<(FrameId, FrameCallback)>>,
    listeners: RefCell<Vec<(ListenerId, EventKind, Listener)>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let id = FrameId(self.next_id());
        self.frames.borrow_mut().push((id, callback));
        id
    }

    pub fn cancel_frame(&self, id: FrameId) {
        self.frames.borrow_mut().retain(|(pending, _)| *pending != id);
    }

    pub fn subscribe(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.borrow_mut().push((id, kind, listener));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(registered, _, _)| *registered != id);
    }

    /// Deliver `event` to every listener of its kind, in subscription order.
    pub fn dispatch(&self, event: &HostEvent) {
        let kind = event.kind();
        // snapshot first: listeners may (un)subscribe while running
        let targets: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, l)| Rc::clone(l))
            .collect();
        for listener in targets {
            listener(event);
        }
    }

    /// Run every frame callback that was pending when the refresh began.
    /// Requests made during the run wait for the next refresh.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.frames.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}
