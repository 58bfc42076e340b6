//! Browser scroll-reveal wiring: intersection observation and smooth anchors.

use platform_host::RevealService;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Visibility fraction at which a card counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Bottom inset pulling the reveal trigger line above the viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, Copy, Default)]
/// Reveal service backed by `IntersectionObserver` and native smooth scrolling.
///
/// Observer and listener closures are leaked on purpose; both run for the
/// page's lifetime.
pub struct WebRevealService;

impl RevealService for WebRevealService {
    fn observe_reveals(&self, selector: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            observe_reveals(selector)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = selector;
            Ok(())
        }
    }

    fn bind_smooth_anchors(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            bind_smooth_anchors()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn observe_reveals(selector: &str) -> Result<(), String> {
    let document = document()?;

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::wrap(
        Box::new(|entries: js_sys::Array, _observer| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(target) = entry.target().dyn_into::<web_sys::HtmlElement>() else {
                    continue;
                };
                let style = target.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            }
        }),
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|err| format!("failed to create intersection observer: {err:?}"))?;
    on_intersect.forget();

    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| format!("invalid reveal selector `{selector}`: {err:?}"))?;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&element);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn bind_smooth_anchors() -> Result<(), String> {
    let document = document()?;
    let anchors = document
        .query_selector_all("a[href^='#']")
        .map_err(|err| format!("anchor query failed: {err:?}"))?;

    for index in 0..anchors.length() {
        let Some(node) = anchors.item(index) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };

        let target_selector = anchor.get_attribute("href").unwrap_or_default();
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |event: web_sys::MouseEvent| {
                event.prevent_default();
                let Ok(target) = document_for_click().query_selector(&target_selector) else {
                    return;
                };
                let Some(target) = target else {
                    return;
                };
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            },
        ));
        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| format!("anchor listener registration failed: {err:?}"))?;
        on_click.forget();
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn document_for_click() -> web_sys::Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document present while handling a click")
}
