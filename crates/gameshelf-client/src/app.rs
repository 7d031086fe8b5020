use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use gameshelf_core::{Catalog, FilterKey};

use crate::theme::Theme;

/// Mount point for the rendered card list; assumed to pre-exist in the page.
pub const LIST_MOUNT_ID: &str = "game-list";

/// Mount point for the filter controls; assumed to pre-exist in the page.
pub const FILTER_MOUNT_ID: &str = "filter-bar";

/// Loading indicator inside the list mount, removed once the catalog loads.
pub const LOADING_ID: &str = "loading";

/// Catalog location used when the list mount carries no `data-src`.
pub const DEFAULT_CATALOG_URL: &str = "games.json";

/// Page context shared by the loader, renderer, and filter controller.
///
/// The catalog is written exactly once (at load) and read thereafter; WASM is
/// single-threaded, so `Rc<RefCell<_>>` sharing suffices.
pub struct App {
    pub document: Document,
    pub list_mount: Element,
    pub filter_mount: Element,
    pub theme: Theme,
    pub catalog: Option<Catalog>,
    pub active: FilterKey,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(document: Document, list_mount: Element, filter_mount: Element) -> Self {
        Self {
            document,
            list_mount,
            filter_mount,
            theme: Theme::load(),
            catalog: None,
            active: FilterKey::All,
        }
    }

    /// Resolve the pre-existing mount points, or `None` when the surrounding
    /// page does not carry them.
    pub fn mount(document: Document) -> Option<Self> {
        let list_mount = document.get_element_by_id(LIST_MOUNT_ID)?;
        let filter_mount = document.get_element_by_id(FILTER_MOUNT_ID)?;
        Some(Self::new(document, list_mount, filter_mount))
    }

    /// Catalog source location: the list mount's `data-src`, or the default.
    pub fn catalog_url(&self) -> String {
        self.list_mount
            .get_attribute("data-src")
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string())
    }
}
