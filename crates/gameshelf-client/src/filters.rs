use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use gameshelf_core::{FilterKey, compute_subset, filter_key_from_attr};

use crate::app::SharedApp;
use crate::diag::console_warn;
use crate::render;

/// Attribute carrying a control's filter key. The reserved "all" control is a
/// markup concern and ships with the page rather than being generated here.
pub const FILTER_ATTR: &str = "data-filter";

const ACTIVE_CLASS: &str = "active";

/// Build one control per distinct tag and register the single shared
/// activation handler. Called once after the initial load.
pub fn init_filters(app: &SharedApp) {
    {
        let ctx = app.borrow();
        let Some(catalog) = ctx.catalog.as_ref() else {
            return;
        };
        for label in catalog.tag_labels() {
            let button = match ctx.document.create_element("button") {
                Ok(b) => b,
                Err(e) => {
                    console_warn!("failed to create filter control: {e:?}");
                    continue;
                },
            };
            button.set_class_name("filter-btn");
            if let Err(e) = button.set_attribute(FILTER_ATTR, &label.key) {
                console_warn!("failed to key filter control {}: {e:?}", label.key);
                continue;
            }
            button.set_text_content(Some(&label.display));
            if let Err(e) = ctx.filter_mount.append_child(&button) {
                console_warn!("failed to append filter control: {e:?}");
            }
        }
    }
    attach_activation_handler(app);
}

/// One delegated click listener on the filter bar; individual controls carry
/// their key in `data-filter`, so a dynamic control set needs no re-wiring.
fn attach_activation_handler(app: &SharedApp) {
    let bar = app.borrow().filter_mount.clone();
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(Event)>::new(move |evt: Event| {
        let Some(control) = activation_control(&evt) else {
            return;
        };
        let Some(key) = filter_key_from_attr(control.get_attribute(FILTER_ATTR).as_deref()) else {
            return;
        };
        on_filter_activated(&app, &control, key);
    });
    if let Err(e) = bar.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        console_warn!("failed to attach filter activation handler: {e:?}");
    }
    closure.forget();
}

/// Resolve the filter control an activation originated from, if any.
/// Activations elsewhere in the bar are ignored.
fn activation_control(evt: &Event) -> Option<Element> {
    let target = evt.target()?;
    let element = target.dyn_into::<Element>().ok()?;
    element.closest("[data-filter]").ok().flatten()
}

/// Mark the control active, recompute the working subset from the immutable
/// catalog, and re-render. Stateless per activation: never derived from the
/// previously displayed subset.
pub fn on_filter_activated(app: &SharedApp, control: &Element, key: FilterKey) {
    let mut ctx = app.borrow_mut();
    mark_only_active(&ctx.filter_mount, control);
    ctx.active = key.clone();
    let Some(catalog) = ctx.catalog.as_ref() else {
        return;
    };
    let subset = compute_subset(catalog, &key);
    render::render_list(&ctx.document, &ctx.list_mount, &subset, &ctx.theme);
}

/// Deactivate every control, then mark the activated one.
fn mark_only_active(bar: &Element, control: &Element) {
    if let Ok(controls) = bar.query_selector_all("[data-filter]") {
        for i in 0..controls.length() {
            if let Some(node) = controls.item(i)
                && let Some(el) = node.dyn_ref::<Element>()
            {
                let _ = el.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }
    let _ = control.class_list().add_1(ACTIVE_CLASS);
}
