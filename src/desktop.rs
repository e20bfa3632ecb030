// Window host: a minifb window that shows the surface and feeds the engine
// its refresh ticks, mouse movement and size changes.
// Visual: a resizable window filled with the dot grid that lights up under the mouse.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use minifb::{Key, MouseMode, Window, WindowOptions};
use tracing::{debug, info};

use crate::config::WindowConfig;
use crate::error::Error;
use crate::host::{
    Dispatcher, EventKind, FrameCallback, FrameId, Host, HostEvent, Listener, ListenerId,
};
use crate::surface::Surface;
use crate::types::{Bounds, Point};

pub struct DesktopHost {
    window: RefCell<Window>, // the on-screen window you see
    dispatcher: Dispatcher,
    device_pixel_ratio: f32,
    size: Cell<(usize, usize)>,     // last seen window size, physical pixels
    pointer: Cell<Option<Point>>,   // last seen mouse position, CSS pixels
}

impl DesktopHost {
    /// Open a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(config: &WindowConfig) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(&config.title, config.width, config.height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(config.target_fps);

        let device_pixel_ratio = config.effective_device_pixel_ratio();
        let size = window.get_size();
        info!(width = size.0, height = size.1, device_pixel_ratio, "window opened");

        Ok(Self {
            window: RefCell::new(window),
            dispatcher: Dispatcher::new(),
            device_pixel_ratio,
            size: Cell::new(size),
            pointer: Cell::new(None),
        })
    }

    /// Returns false when the user closes the window or holds ESC.
    pub fn is_open(&self) -> bool {
        let window = self.window.borrow();
        window.is_open() && !window.is_key_down(Key::Escape)
    }

    /// Drive the host until the window closes: events, then frame callbacks,
    /// then present `surface`.
    pub fn run(&self, surface: &Rc<RefCell<Surface>>) -> Result<(), Error> {
        while self.is_open() {
            self.poll_resize();
            self.poll_pointer();
            self.dispatcher.run_frame();
            self.present(surface)?;
        }
        Ok(())
    }

    fn css(&self, physical: usize) -> f32 {
        physical as f32 / self.device_pixel_ratio
    }

    fn poll_resize(&self) {
        let size = self.window.borrow().get_size();
        if size == self.size.get() {
            return;
        }
        self.size.set(size);
        debug!(width = size.0, height = size.1, "window resized");
        self.dispatcher.dispatch(&HostEvent::Resize {
            width: self.css(size.0),
            height: self.css(size.1),
            device_pixel_ratio: self.device_pixel_ratio,
        });
    }

    /// Visual: moving the mouse lights up nearby dots; leaving the window dims them all.
    fn poll_pointer(&self) {
        let now = self
            .window
            .borrow()
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x / self.device_pixel_ratio, y / self.device_pixel_ratio));
        if now == self.pointer.get() {
            return;
        }
        self.pointer.set(now);
        match now {
            Some(p) => self
                .dispatcher
                .dispatch(&HostEvent::PointerMove { client_x: p.x, client_y: p.y }),
            None => self.dispatcher.dispatch(&HostEvent::PointerLeave),
        }
    }

    /// Push the surface pixels to the screen.
    /// Visual: the window immediately displays the latest frame.
    fn present(&self, surface: &Rc<RefCell<Surface>>) -> Result<(), Error> {
        let mut window = self.window.borrow_mut();
        let surface = surface.borrow();
        let frame = surface.frame();
        if frame.width == 0 || frame.height == 0 {
            // nothing to show; still pump window events
            window.update();
            return Ok(());
        }
        window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

impl Host for DesktopHost {
    fn container_bounds(&self) -> Bounds {
        let (w, h) = self.size.get();
        Bounds::new(0.0, 0.0, self.css(w), self.css(h))
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
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
