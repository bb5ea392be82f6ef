use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render;
use crate::surface;
use instant::Instant;
use ripple_core::{DistortionSettings, PointerTracker, RipplePool};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub pool: RipplePool,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub settings: Rc<RefCell<DistortionSettings>>,

    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub running: bool,
}

impl<'a> FrameContext<'a> {
    /// Run one frame. Returns false once the context has been disposed.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Pointer travel since the previous frame decides whether a wave spawns.
        let sample = self.pointer.borrow_mut().sample();
        self.pool.on_sample(sample);

        let settings = {
            let mut s = self.settings.borrow_mut();
            s.advance(dt_sec);
            *s
        };

        if let (Some(g), Some(viewport)) = (&mut self.gpu, dom::window_viewport(&self.window)) {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&settings, viewport, self.pool.active_waves()) {
                Ok(()) => {}
                Err(e) if surface::should_reconfigure(&e) => g.reconfigure_surface(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        // Decay after drawing so a fresh wave shows at its initial values.
        self.pool.advance_frame();
        true
    }

    pub fn dispose(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pool.dispose();
        log::info!("[ripple] effect disposed");
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_waves: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_waves).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            log::info!("[ripple] frame loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
