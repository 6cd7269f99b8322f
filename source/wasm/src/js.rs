use {
    gloo::utils::document,
    std::{
        fmt::Display,
        rc::Rc,
    },
    wasm_bindgen::JsValue,
    web_sys::Element,
};

pub trait Log {
    fn log(&self, m: &str);
}

/// Writes to the browser developer console.
pub struct ConsoleLog;

impl Log for ConsoleLog {
    fn log(&self, m: &str) {
        web_sys::console::error_1(&JsValue::from_str(m));
    }
}

pub trait LogJsErr {
    /// Log and discard the error, in side-effect positions where there's
    /// nothing better to do with it.
    fn log(self, log: &Rc<dyn Log>, context: &dyn Display);
}

impl<T, E: std::fmt::Debug> LogJsErr for Result<T, E> {
    fn log(self, log: &Rc<dyn Log>, context: &dyn Display) {
        if let Err(e) = self {
            log.log(&format!("{}: {:?}", context, e));
        }
    }
}

#[derive(Clone)]
pub struct Env {
    /// Prefix for api paths; empty means same-origin relative requests.
    pub base_url: String,
}

pub fn scan_env() -> Env {
    let mut base_url = String::new();
    if let Ok(Some(meta)) = document().query_selector("meta[name=\"api-base\"]") {
        if let Some(content) = meta.get_attribute("content") {
            base_url = content.trim_end_matches('/').to_string();
        }
    }
    return Env { base_url: base_url };
}

pub fn el_by_id(id: &str) -> Option<Element> {
    return document().get_element_by_id(id);
}

pub fn create_el(tag: &str) -> Result<Element, String> {
    return document()
        .create_element(tag)
        .map_err(|e| format!("Error creating [{}] element: {:?}", tag, e));
}

pub fn append(parent: &Element, child: &Element) -> Result<(), String> {
    parent.append_child(child).map_err(|e| format!("Error appending child element: {:?}", e))?;
    return Ok(());
}
