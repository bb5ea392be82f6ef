use ripple_core::DistortionSettings;
use web_sys as web;

/// Update the hint overlay with the current distortion controls
pub fn update_hint(document: &web::Document, settings: &DistortionSettings) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let hint_html = format!(
            "<div style='color: #e6e6e6; font: 13px system-ui; background: rgba(17, 17, 17, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(255, 255, 255, 0.15);'>Progress: {:.2} [ ] • Scale: {:.2} - = • 0 reset • h hide</div>",
            settings.progress(),
            settings.scale()
        );
        el.set_inner_html(&hint_html);
    }
}

pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        el.set_attribute("style", "").ok();
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id("hint-overlay")
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        if is_hint_hidden(document) {
            _ = el.set_attribute("style", "");
        } else {
            _ = el.set_attribute("style", "display:none");
        }
    }
}
