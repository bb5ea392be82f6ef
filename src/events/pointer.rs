use crate::dom;
use ripple_core::{Detach, PointerTracker, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The window `mousemove` listener feeding the pointer tracker.
///
/// Unlike the other listeners this one is kept alive (not `forget`-ed) so the
/// ripple pool can remove it when it is disposed.
pub struct PointerListener {
    target: web::Window,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

impl Detach for PointerListener {
    fn detach(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback("mousemove", self.closure.as_ref().unchecked_ref());
        log::info!("[input] mousemove listener removed");
    }
}

pub fn wire_pointer_tracking(
    window: &web::Window,
    tracker: Rc<RefCell<PointerTracker>>,
) -> anyhow::Result<Subscription> {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(viewport) = dom::window_viewport(&wnd) else {
            return;
        };
        tracker
            .borrow_mut()
            .move_to_client(ev.client_x() as f32, ev.client_y() as f32, &viewport);
    }) as Box<dyn FnMut(_)>);

    window
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("mousemove listener: {:?}", e))?;

    Ok(Subscription::new(PointerListener {
        target: window.clone(),
        closure,
    }))
}
