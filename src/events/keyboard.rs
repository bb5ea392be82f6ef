use crate::controls::{action_for_key, ControlAction};
use crate::overlay;
use ripple_core::DistortionSettings;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    settings: &Rc<RefCell<DistortionSettings>>,
    document: &web::Document,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key(), ev.shift_key()) else {
        return;
    };
    ev.prevent_default();
    if action == ControlAction::ToggleHint {
        overlay::toggle_hint(document);
        return;
    }
    let changed = action.apply(&mut settings.borrow_mut());
    if changed {
        let s = *settings.borrow();
        log::info!(
            "[keys] progress={:.2} scale={:.2}",
            s.progress(),
            s.scale()
        );
        overlay::update_hint(document, &s);
        overlay::show_hint(document);
    }
}

pub fn wire_global_keydown(settings: Rc<RefCell<DistortionSettings>>) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &settings, &document);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
