use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use gameshelf_core::GameRecord;
use gameshelf_core::placeholder::placeholder_data_uri;

use crate::diag::console_warn;
use crate::loader::LoadError;
use crate::theme::Theme;

/// Card attribute holding the fallback image URI for its thumbnail.
pub const PLACEHOLDER_ATTR: &str = "data-placeholder";

/// Guard attribute: present once the fallback swap has run for an image.
pub const FALLBACK_APPLIED_ATTR: &str = "data-fallback-applied";

/// Replace the card list with one card per record, in input order.
///
/// A pure projection of its input: the previous display is cleared
/// unconditionally, an empty input yields a single "no results" message, and
/// the catalog itself is never touched.
pub fn render_list(document: &Document, mount: &Element, games: &[&GameRecord], theme: &Theme) {
    mount.set_inner_html("");
    if games.is_empty() {
        append_message(document, mount, "no-results", "No games match this filter.");
        return;
    }
    for game in games {
        match build_card(document, game, theme) {
            Ok(card) => {
                if let Err(e) = mount.append_child(&card) {
                    console_warn!("failed to append card: {e:?}");
                }
            },
            Err(e) => {
                console_warn!("failed to build card for {}: {e:?}", game.display_title());
            },
        }
    }
}

/// Replace the card list with a single visible load-failure message.
pub fn render_load_error(document: &Document, mount: &Element, error: &LoadError) {
    mount.set_inner_html("");
    append_message(
        document,
        mount,
        "load-error",
        &format!("Failed to load games: {error}"),
    );
}

fn append_message(document: &Document, mount: &Element, class: &str, text: &str) {
    match document.create_element("p") {
        Ok(el) => {
            el.set_class_name(class);
            el.set_text_content(Some(text));
            if let Err(e) = mount.append_child(&el) {
                console_warn!("failed to append {class} message: {e:?}");
            }
        },
        Err(e) => console_warn!("failed to create {class} message: {e:?}"),
    }
}

fn build_card(document: &Document, game: &GameRecord, theme: &Theme) -> Result<Element, JsValue> {
    let card = document.create_element("article")?;
    card.set_class_name("card");
    // Folded tag list as queryable metadata, independent of the badges.
    card.set_attribute("data-tags", &game.folded_tags().join(","))?;

    let placeholder = placeholder_data_uri(game.display_title(), &theme.placeholder);
    let img = document.create_element("img")?;
    img.set_class_name("thumb");
    img.set_attribute("alt", game.display_title())?;
    img.set_attribute(PLACEHOLDER_ATTR, &placeholder)?;
    img.set_attribute("src", game.thumbnail.as_deref().unwrap_or(&placeholder))?;
    attach_thumbnail_fallback(&img);
    card.append_child(&img)?;

    let title = document.create_element("h3")?;
    title.set_class_name("title");
    title.set_text_content(Some(game.display_title()));
    card.append_child(&title)?;

    let description = document.create_element("p")?;
    description.set_class_name("description");
    description.set_text_content(Some(game.display_description()));
    card.append_child(&description)?;

    let tags = document.create_element("div")?;
    tags.set_class_name("tags");
    for tag in &game.tags {
        let badge = document.create_element("span")?;
        badge.set_class_name("tag");
        badge.set_text_content(Some(tag));
        tags.append_child(&badge)?;
    }
    card.append_child(&tags)?;

    let actions = document.create_element("div")?;
    actions.set_class_name("actions");
    let play = action_link(document, "play", "Play", game.play_href())?;
    actions.append_child(&play)?;
    let source = action_link(document, "source", "Source", game.source_href())?;
    actions.append_child(&source)?;
    card.append_child(&actions)?;

    Ok(card)
}

/// Action control opening its target in a new browsing context.
fn action_link(
    document: &Document,
    class: &str,
    label: &str,
    href: &str,
) -> Result<Element, JsValue> {
    let anchor = document.create_element("a")?;
    anchor.set_class_name(class);
    anchor.set_attribute("href", href)?;
    anchor.set_attribute("target", "_blank")?;
    anchor.set_attribute("rel", "noopener noreferrer")?;
    anchor.set_text_content(Some(label));
    Ok(anchor)
}

/// Bind the image-failure callback: on `error`, substitute the placeholder.
fn attach_thumbnail_fallback(img: &Element) {
    let img_ref = img.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        apply_thumbnail_fallback(&img_ref);
    });
    if let Err(e) = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())
    {
        console_warn!("failed to attach thumbnail fallback: {e:?}");
    }
    closure.forget();
}

/// Swap a failed thumbnail for its recorded placeholder, at most once.
///
/// The guard attribute makes re-entry a no-op, so a failing placeholder can
/// never loop the swap.
pub fn apply_thumbnail_fallback(img: &Element) {
    if img.get_attribute(FALLBACK_APPLIED_ATTR).is_some() {
        return;
    }
    if let Err(e) = img.set_attribute(FALLBACK_APPLIED_ATTR, "true") {
        console_warn!("failed to mark thumbnail fallback: {e:?}");
        return;
    }
    let Some(placeholder) = img.get_attribute(PLACEHOLDER_ATTR) else {
        return;
    };
    if let Err(e) = img.set_attribute("src", &placeholder) {
        console_warn!("failed to swap thumbnail for placeholder: {e:?}");
    }
}
