//! CSRF cookie lookup.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Find the raw value of cookie `name` in a `document.cookie` string.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

/// Read and URI-decode cookie `name` from the document.
#[cfg(feature = "hydrate")]
pub fn read_cookie(document: &web_sys::Document, name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let cookies = match document.dyn_ref::<web_sys::HtmlDocument>()?.cookie() {
        Ok(cookies) => cookies,
        Err(err) => {
            crate::context::log_dom_error("read document.cookie", &err);
            return None;
        }
    };
    let raw = find_cookie(&cookies, name)?;
    match js_sys::decode_uri_component(raw) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(err) => {
            log::warn!("cookie {name} is not valid URI encoding: {err:?}");
            None
        }
    }
}
