use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tear the effect down when the page goes away: stops the frame loop and
/// releases the pointer subscription held by the pool.
pub fn wire_teardown(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().dispose();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
