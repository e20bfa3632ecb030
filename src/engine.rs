//! Dot grid engine
//!
//! Wires the pieces to a [`Host`]:
//! - resize events rescale the surface and swap in a new grid generation
//! - pointer events update the tracked pointer position
//! - a self-rescheduling frame callback repaints with whatever is current
//!
//! `stop` (or dropping the engine) cancels the pending frame and detaches
//! every listener in the same step.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::color::ColorConfig;
use crate::config::DotConfig;
use crate::host::{EventKind, FrameId, Host, HostEvent, ListenerId};
use crate::pointer::PointerTracker;
use crate::render::paint_frame;
use crate::surface::{apply_resize, Surface};
use crate::types::{Grid, Point};

/// State read by the frame loop and written by the event listeners.
struct Shared {
    config: DotConfig,
    colors: ColorConfig,
    grid: RefCell<Rc<Grid>>,
    pointer: PointerTracker,
    surface: Weak<RefCell<Surface>>,
    running: Cell<bool>,
    pending_frame: Cell<Option<FrameId>>,
    frames_drawn: Cell<u64>,
}

impl Shared {
    fn rebuild(&self, width: f32, height: f32, device_pixel_ratio: f32) {
        if !self.running.get() {
            return;
        }
        // surface gone or busy: skip this rebuild
        let Some(surface) = self.surface.upgrade() else { return };
        let Ok(mut surface) = surface.try_borrow_mut() else { return };

        let dots = apply_resize(&mut surface, width, height, device_pixel_ratio, &self.config);
        let next: Rc<Grid> = Rc::from(dots);
        self.grid.replace(next);
    }

    fn draw(&self) {
        let Some(surface) = self.surface.upgrade() else { return };
        let Ok(mut surface) = surface.try_borrow_mut() else { return };

        // one generation for the whole frame
        let grid = self.grid.borrow().clone();
        paint_frame(
            &mut surface,
            &grid,
            &self.pointer,
            self.config.dot_diameter,
            self.config.proximity,
            &self.colors,
        );
        self.frames_drawn.set(self.frames_drawn.get() + 1);
    }
}

/// Request the next frame; the callback repaints and requests again.
fn schedule_frame<H: Host + ?Sized + 'static>(host: &Rc<H>, shared: &Rc<Shared>) {
    let weak_host = Rc::downgrade(host);
    let state = Rc::clone(shared);
    let id = host.request_frame(Box::new(move || {
        state.pending_frame.set(None);
        if !state.running.get() {
            return;
        }
        state.draw();
        if let Some(host) = weak_host.upgrade() {
            schedule_frame(&host, &state);
        }
    }));
    shared.pending_frame.set(Some(id));
}

pub struct DotGrid<H: Host + ?Sized + 'static> {
    host: Rc<H>,
    shared: Rc<Shared>,
    listeners: RefCell<Vec<ListenerId>>,
}

impl<H: Host + ?Sized + 'static> DotGrid<H> {
    /// Mount on `host`, drawing into `surface`.
    ///
    /// The surface is held weakly; once the caller drops it every rebuild
    /// and draw becomes a no-op.
    pub fn mount(host: Rc<H>, surface: &Rc<RefCell<Surface>>, config: DotConfig) -> Self {
        let colors = ColorConfig::from_hex(&config.base_color, &config.active_color);
        let shared = Rc::new(Shared {
            config,
            colors,
            grid: RefCell::new(Rc::from(Vec::new())),
            pointer: PointerTracker::new(),
            surface: Rc::downgrade(surface),
            running: Cell::new(true),
            pending_frame: Cell::new(None),
            frames_drawn: Cell::new(0),
        });

        // initial grid
        let bounds = host.container_bounds();
        shared.rebuild(bounds.width, bounds.height, host.device_pixel_ratio());

        let mut listeners = Vec::with_capacity(3);

        let state = Rc::clone(&shared);
        let weak_host = Rc::downgrade(&host);
        listeners.push(host.subscribe(
            EventKind::PointerMove,
            Rc::new(move |event: &HostEvent| {
                let HostEvent::PointerMove { client_x, client_y } = *event else { return };
                let Some(host) = weak_host.upgrade() else { return };
                state.pointer.move_to(client_x, client_y, host.container_bounds());
            }),
        ));

        let state = Rc::clone(&shared);
        listeners.push(host.subscribe(
            EventKind::PointerLeave,
            Rc::new(move |_: &HostEvent| state.pointer.leave()),
        ));

        let state = Rc::clone(&shared);
        listeners.push(host.subscribe(
            EventKind::Resize,
            Rc::new(move |event: &HostEvent| {
                if let HostEvent::Resize { width, height, device_pixel_ratio } = *event {
                    state.rebuild(width, height, device_pixel_ratio);
                }
            }),
        ));

        schedule_frame(&host, &shared);
        info!(
            dots = shared.grid.borrow().len(),
            width = bounds.width,
            height = bounds.height,
            "dot grid mounted"
        );

        Self { host, shared, listeners: RefCell::new(listeners) }
    }

    /// Cancel the pending frame and detach all listeners. Safe to call twice.
    pub fn stop(&self) {
        if !self.shared.running.replace(false) {
            return;
        }
        if let Some(id) = self.shared.pending_frame.take() {
            self.host.cancel_frame(id);
        }
        for id in self.listeners.borrow_mut().drain(..) {
            self.host.unsubscribe(id);
        }
        info!(frames = self.shared.frames_drawn.get(), "dot grid stopped");
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    /// Current grid generation.
    pub fn grid(&self) -> Rc<Grid> {
        self.shared.grid.borrow().clone()
    }

    pub fn pointer(&self) -> Point {
        self.shared.pointer.position()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.shared.frames_drawn.get()
    }

    pub fn colors(&self) -> ColorConfig {
        self.shared.colors
    }
}

impl<H: Host + ?Sized + 'static> Drop for DotGrid<H> {
    fn drop(&mut self) {
        if self.shared.running.get() {
            debug!("dot grid dropped while running");
        }
        self.stop();
    }
}
