//! Current date label for the header.

/// Locale date string in the browser; empty during server rendering.
#[must_use]
pub fn today_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
