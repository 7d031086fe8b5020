use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use gameshelf_core::{Catalog, FilterKey, compute_subset};

use crate::app::{LOADING_ID, SharedApp};
use crate::diag::console_error;
use crate::{filters, render};

/// Failure to populate the catalog. The initial load is the only operation
/// that can fail the session; no retry, no partial catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Http { status: u16, status_text: String },
    Network(String),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status,
                status_text,
            } => write!(f, "catalog request failed: {status} {status_text}"),
            Self::Network(m) => write!(f, "catalog request failed: {m}"),
            Self::Parse(m) => write!(f, "catalog is not a valid game list: {m}"),
        }
    }
}

/// Issue the single catalog read and parse the response body.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Network("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not yield a response".to_string()))?;
    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let body = response
        .text()
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".to_string()))?;
    Catalog::from_json(&text).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Load the catalog once and bring up the page.
///
/// Exactly one of {display populated, error message shown}: on success the
/// loading indicator goes away, the catalog is stored in the context, the
/// full list renders, and the filter controls are built; on failure a single
/// error message replaces the card list, the error also goes to the console
/// diagnostic channel, and the catalog stays unset.
pub async fn boot(app: SharedApp) {
    let url = app.borrow().catalog_url();
    match fetch_catalog(&url).await {
        Ok(catalog) => {
            remove_loading_indicator(&app);
            app.borrow_mut().catalog = Some(catalog);
            {
                let ctx = app.borrow();
                if let Some(catalog) = ctx.catalog.as_ref() {
                    let full = compute_subset(catalog, &FilterKey::All);
                    render::render_list(&ctx.document, &ctx.list_mount, &full, &ctx.theme);
                }
            }
            filters::init_filters(&app);
        },
        Err(err) => {
            console_error!("catalog load failed: {err}");
            let ctx = app.borrow();
            render::render_load_error(&ctx.document, &ctx.list_mount, &err);
        },
    }
}

fn remove_loading_indicator(app: &SharedApp) {
    if let Some(el) = app.borrow().document.get_element_by_id(LOADING_ID) {
        el.remove();
    }
}
