#![cfg(target_arch = "wasm32")]
use instant::Instant;
use ripple_core::{DistortionSettings, PointerTracker, RippleConfig, RipplePool};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod shaders;
mod surface;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // An invalid configuration stops here; there is no degraded mode.
    let config = RippleConfig::default().with_rotation_seed(rand::random());
    let mut pool = RipplePool::new(config)?;
    log::info!("[ripple] pool capacity={}", pool.capacity());

    let pointer = Rc::new(RefCell::new(PointerTracker::default()));
    pool.attach(events::wire_pointer_tracking(&window, pointer.clone())?);

    let settings = Rc::new(RefCell::new(DistortionSettings::default()));
    events::wire_global_keydown(settings.clone());
    overlay::update_hint(&document, &settings.borrow());
    overlay::show_hint(&document);

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas, pool.capacity()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pool,
        pointer,
        settings,
        window,
        canvas,
        gpu,
        last_instant: Instant::now(),
        running: true,
    }));
    events::wire_teardown(frame_ctx.clone());
    frame::start_loop(frame_ctx);

    Ok(())
}
