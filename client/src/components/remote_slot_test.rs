use super::*;
use crate::net::types::{Credentials, UserUpdate};
use std::cell::RefCell;

use serde_json::json;

// =============================================================
// RemoteEvent payloads
// =============================================================

#[test]
fn payload_decodes_typed_detail() {
    let event = RemoteEvent::new("update-user", json!({"name": "Жак", "about": "Исследователь"}));
    let update: UserUpdate = event.payload().unwrap();
    assert_eq!(update.name, "Жак");
    assert_eq!(update.about, "Исследователь");
}

#[test]
fn payload_ignores_extra_fields() {
    let event = RemoteEvent::new("login", json!({"email": "a@b.c", "password": "pw", "remember": true}));
    let creds: Credentials = event.payload().unwrap();
    assert_eq!(creds.email, "a@b.c");
}

#[test]
fn payload_rejects_missing_fields() {
    let event = RemoteEvent::new("login", json!({"email": "a@b.c"}));
    assert!(event.payload::<Credentials>().is_none());
}

#[test]
fn payload_rejects_null_detail() {
    let event = RemoteEvent::new("update-user", serde_json::Value::Null);
    assert!(event.payload::<UserUpdate>().is_none());
}

#[test]
fn unit_payload_accepts_null_detail() {
    let event = RemoteEvent::new("close", serde_json::Value::Null);
    assert_eq!(event.payload::<()>(), Some(()));
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn flag_renders_boolean_attribute_values() {
    assert_eq!(flag(true), "true");
    assert_eq!(flag(false), "false");
}

/// Records writes and rejects one attribute name.
struct RecordingSink {
    reject: &'static str,
    written: RefCell<Vec<(String, String)>>,
}

impl AttrSink for RecordingSink {
    fn set_attr(&self, name: &str, value: &str) -> Result<(), String> {
        if name == self.reject {
            return Err(format!("InvalidCharacterError: {name}"));
        }
        self.written.borrow_mut().push((name.to_owned(), value.to_owned()));
        Ok(())
    }
}

#[test]
fn apply_attrs_reports_rejections_and_keeps_writing() {
    let sink = RecordingSink { reject: "name", written: RefCell::new(Vec::new()) };
    let attrs = vec![("open", flag(true)), ("name", "Жак".to_owned()), ("about", "a".to_owned())];

    let rejected = apply_attrs(&sink, "profile/EditProfilePopup", &attrs);

    assert_eq!(rejected, 1);
    assert_eq!(
        *sink.written.borrow(),
        [("open".to_owned(), "true".to_owned()), ("about".to_owned(), "a".to_owned())]
    );
}

#[test]
fn apply_attrs_without_rejections_returns_zero() {
    let sink = RecordingSink { reject: "", written: RefCell::new(Vec::new()) };
    assert_eq!(apply_attrs(&sink, "cards/AddPlacePopup", &[("open", flag(false))]), 0);
    assert_eq!(sink.written.borrow().len(), 1);
}
