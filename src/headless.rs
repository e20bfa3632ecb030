// A host with no display: frames and events happen only when the caller says so.
// Used for snapshots and for driving the engine deterministically in tests.

use std::cell::Cell;

use crate::host::{
    Dispatcher, EventKind, FrameCallback, FrameId, Host, HostEvent, Listener, ListenerId,
};
use crate::types::Bounds;

pub struct HeadlessHost {
    dispatcher: Dispatcher,
    bounds: Cell<Bounds>,
    device_pixel_ratio: Cell<f32>,
}

impl HeadlessHost {
    pub fn new(bounds: Bounds, device_pixel_ratio: f32) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            bounds: Cell::new(bounds),
            device_pixel_ratio: Cell::new(device_pixel_ratio),
        }
    }

    /// Change the container size and notify resize listeners.
    pub fn resize(&self, width: f32, height: f32) {
        let bounds = Bounds { width, height, ..self.bounds.get() };
        self.bounds.set(bounds);
        self.dispatcher.dispatch(&HostEvent::Resize {
            width,
            height,
            device_pixel_ratio: self.device_pixel_ratio.get(),
        });
    }

    /// Change density (e.g. window moved to another monitor) and notify resize listeners.
    pub fn set_device_pixel_ratio(&self, device_pixel_ratio: f32) {
        self.device_pixel_ratio.set(device_pixel_ratio);
        let bounds = self.bounds.get();
        self.resize(bounds.width, bounds.height);
    }

    /// Move the container within the viewport (scrolling). No event fires.
    pub fn set_origin(&self, x: f32, y: f32) {
        self.bounds.set(Bounds { x, y, ..self.bounds.get() });
    }

    /// Pointer moved to viewport coordinates (x,y).
    pub fn move_pointer(&self, client_x: f32, client_y: f32) {
        self.dispatcher.dispatch(&HostEvent::PointerMove { client_x, client_y });
    }

    pub fn leave_pointer(&self) {
        self.dispatcher.dispatch(&HostEvent::PointerLeave);
    }

    /// Simulate one display refresh. Returns how many callbacks ran.
    pub fn advance_frame(&self) -> usize {
        self.dispatcher.run_frame()
    }

    pub fn pending_frames(&self) -> usize {
        self.dispatcher.pending_frames()
    }

    pub fn listener_count(&self) -> usize {
        self.dispatcher.listener_count()
    }
}

impl Host for HeadlessHost {
    fn container_bounds(&self) -> Bounds {
        self.bounds.get()
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.get()
    }

    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        self.dispatcher.request_frame(callback)
    }

    fn cancel_frame(&self, id: FrameId) {
        self.dispatcher.cancel_frame(id);
    }

    fn subscribe(&self, kind: EventKind, listener: Listener) -> ListenerId {
        self.dispatcher.subscribe(kind, listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.dispatcher.unsubscribe(id);
    }
}
