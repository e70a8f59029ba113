//! Page-level locale attributes.
//!
//! Writes `lang` and `dir` on the `<html>` element so browser text shaping,
//! hyphenation and CSS logical properties follow the active locale. Requires a
//! browser environment; SSR and native builds skip the DOM write.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Something that accepts HTML attributes, normally the document root.
pub trait AttributeTarget {
    fn set_attr(&mut self, name: &str, value: &str);
}

/// The `<html>` element of the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl AttributeTarget for DocumentRoot {
    fn set_attr(&mut self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                let _ = el.set_attribute(name, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }
}

/// Write `lang` and `dir` for `locale` onto `target`.
pub fn apply_page_locale<T: AttributeTarget>(target: &mut T, locale: &LocaleState) {
    target.set_attr("lang", &locale.code);
    target.set_attr("dir", locale.direction().as_str());
}

/// Apply `locale` to the `<html>` element.
pub fn apply_to_document(locale: &LocaleState) {
    apply_page_locale(&mut DocumentRoot, locale);
    log::info!("page locale set to {} ({})", locale.code, locale.direction().as_str());
}

/// Apply the browser's active locale to the `<html>` element.
pub fn set_page_locale() {
    apply_to_document(&LocaleState::current());
}

/// Apply the signal's current locale to `target`, tracking the signal.
pub fn sync_page_locale<T: AttributeTarget>(target: &mut T, locale: RwSignal<LocaleState>) {
    locale.with(|state| apply_page_locale(target, state));
}

/// Re-apply the page locale whenever `locale` changes.
pub fn install_page_locale(locale: RwSignal<LocaleState>) {
    Effect::new(move || sync_page_locale(&mut DocumentRoot, locale));
}
