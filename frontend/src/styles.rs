use web_sys::{Document, Element, HtmlHeadElement};

use crate::bootstrap::{js_error_to_string, BootstrapError};

const NORMALIZE_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/normalize.css@8.0.1/normalize.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSource {
    /// Linked by URL
    Remote(&'static str),
    /// Compiled into the binary and injected as a `<style>` element
    Inline(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct GlobalStylesheet {
    pub name: &'static str,
    pub source: StyleSource,
}

/// Applied in this order: later sheets override earlier ones.
pub const GLOBAL_STYLESHEETS: [GlobalStylesheet; 3] = [
    GlobalStylesheet {
        name: "normalize",
        source: StyleSource::Remote(NORMALIZE_CSS_URL),
    },
    GlobalStylesheet {
        name: "reset",
        source: StyleSource::Inline(include_str!("../assets/reset.css")),
    },
    GlobalStylesheet {
        name: "general-styles",
        source: StyleSource::Inline(include_str!("../assets/general-styles.css")),
    },
];

/// Somewhere stylesheets can be appended, one after the other.
pub trait StyleTarget {
    fn append(&mut self, sheet: &GlobalStylesheet) -> Result<(), BootstrapError>;
}

pub fn load_global_styles<T: StyleTarget>(target: &mut T) -> Result<(), BootstrapError> {
    for sheet in &GLOBAL_STYLESHEETS {
        target.append(sheet)?;
    }

    Ok(())
}

/// The `<head>` of a live document.
pub struct DocumentHead {
    document: Document,
    head: HtmlHeadElement,
}

impl DocumentHead {
    pub fn new(document: Document) -> Result<Self, BootstrapError> {
        let head = document
            .head()
            .ok_or_else(|| BootstrapError::Dom("Document has no <head>".to_string()))?;
        Ok(Self { document, head })
    }
}

impl StyleTarget for DocumentHead {
    fn append(&mut self, sheet: &GlobalStylesheet) -> Result<(), BootstrapError> {
        let element = stylesheet_element(&self.document, sheet)
            .map_err(|e| BootstrapError::Dom(js_error_to_string(&e)))?;
        self.head
            .append_child(&element)
            .map_err(|e| BootstrapError::Dom(js_error_to_string(&e)))?;
        Ok(())
    }
}

fn stylesheet_element(
    document: &Document,
    sheet: &GlobalStylesheet,
) -> Result<Element, wasm_bindgen_futures::wasm_bindgen::JsValue> {
    let element = match sheet.source {
        StyleSource::Remote(url) => {
            let link = document.create_element("link")?;
            link.set_attribute("rel", "stylesheet")?;
            link.set_attribute("href", url)?;
            link
        }
        StyleSource::Inline(css) => {
            let style = document.create_element("style")?;
            style.set_text_content(Some(css));
            style
        }
    };
    element.set_attribute("data-stylesheet", sheet.name)?;
    Ok(element)
}
