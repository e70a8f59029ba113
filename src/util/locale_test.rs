use std::collections::BTreeMap;

use leptos::prelude::*;

use super::*;

#[derive(Default)]
struct RecordingTarget {
    attrs: BTreeMap<String, String>,
    writes: usize,
}

impl AttributeTarget for RecordingTarget {
    fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self.writes += 1;
    }
}

#[test]
fn arabic_sets_rtl_direction() {
    let mut target = RecordingTarget::default();
    apply_page_locale(&mut target, &LocaleState::new("ar"));
    assert_eq!(target.attrs.get("lang").map(String::as_str), Some("ar"));
    assert_eq!(target.attrs.get("dir").map(String::as_str), Some("rtl"));
}

#[test]
fn english_sets_ltr_direction() {
    let mut target = RecordingTarget::default();
    apply_page_locale(&mut target, &LocaleState::new("en"));
    assert_eq!(target.attrs.get("lang").map(String::as_str), Some("en"));
    assert_eq!(target.attrs.get("dir").map(String::as_str), Some("ltr"));
}

#[test]
fn reapplying_overwrites_previous_values() {
    let mut target = RecordingTarget::default();
    apply_page_locale(&mut target, &LocaleState::new("he-IL"));
    apply_page_locale(&mut target, &LocaleState::new("de-DE"));
    apply_page_locale(&mut target, &LocaleState::new("de-DE"));
    assert_eq!(target.attrs.len(), 2);
    assert_eq!(target.writes, 6);
    assert_eq!(target.attrs["lang"], "de-DE");
    assert_eq!(target.attrs["dir"], "ltr");
}

#[test]
fn sync_reapplies_after_locale_signal_changes() {
    let owner = Owner::new();
    owner.with(|| {
        let locale = RwSignal::new(LocaleState::new("en"));
        let mut target = RecordingTarget::default();

        sync_page_locale(&mut target, locale);
        assert_eq!(target.attrs["lang"], "en");
        assert_eq!(target.attrs["dir"], "ltr");

        locale.set(LocaleState::new("fa"));
        sync_page_locale(&mut target, locale);
        assert_eq!(target.attrs["lang"], "fa");
        assert_eq!(target.attrs["dir"], "rtl");
        assert_eq!(target.writes, 4);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_paths_are_noops_natively() {
    apply_to_document(&LocaleState::new("ar"));
    set_page_locale();
    DocumentRoot.set_attr("lang", "ar");
}
