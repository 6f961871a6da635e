use niqqud_core::{find_by_glyph, EditSession, Niqqud, NiqqudError, SessionError};

fn glyph(value: &str) -> &'static Niqqud {
    find_by_glyph(value).next().expect("catalog glyph")
}

#[test]
fn toggle_on_selected_updates_full_text() {
    let mut session = EditSession::from_text("\u{05E9}\u{05DC}\u{05DD}");
    session.select(0).unwrap();

    assert!(session.toggle_on_selected(glyph("\u{05B8}")).unwrap());
    assert!(session.toggle_on_selected(glyph("\u{05C1}")).unwrap());
    assert_eq!(session.full_text(), "\u{05E9}\u{05B8}\u{05C1}\u{05DC}\u{05DD}");

    assert!(!session.toggle_on_selected(glyph("\u{05B8}")).unwrap());
    assert_eq!(session.full_text(), "\u{05E9}\u{05C1}\u{05DC}\u{05DD}");
}

#[test]
fn toggle_without_selection_is_rejected() {
    let mut session = EditSession::from_text("\u{05D0}");
    let err = session.toggle_on_selected(glyph("\u{05B4}")).unwrap_err();
    assert_eq!(err, SessionError::NoSelection);
}

#[test]
fn inapplicable_toggle_surfaces_letter_error() {
    let mut session = EditSession::from_text("\u{05D0}");
    session.select(0).unwrap();

    let err = session.toggle_on_selected(glyph("\u{05BF}")).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Niqqud(NiqqudError::InapplicableNiqqud { .. })
    ));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(session.full_text(), "\u{05D0}");
}

#[test]
fn consonant_change_evicts_through_session() {
    let mut session = EditSession::from_text("\u{05E9}\u{05C2}\u{05B8}");
    session.set_consonant_at(0, Some('\u{05D1}')).unwrap();
    assert_eq!(session.full_text(), "\u{05D1}\u{05B8}");

    let err = session.set_consonant_at(3, None).unwrap_err();
    assert_eq!(err, SessionError::IndexOutOfRange { index: 3, len: 1 });
}

#[test]
fn orphan_square_can_be_edited_like_any_letter() {
    let mut session = EditSession::from_text("\u{05BF}");
    assert!(session.toggle_at(0, glyph("\u{05C1}")).unwrap());
    assert_eq!(session.full_text(), "\u{05C1}\u{05BF}");
}

#[test]
fn full_text_replacement_reparses() {
    let mut session = EditSession::new();
    session.set_full_text("\u{FB2E}");
    assert_eq!(session.letters().len(), 1);
    assert_eq!(session.full_text(), "\u{05D0}\u{05B7}");

    session.set_full_text("");
    assert!(session.letters().is_empty());
}

#[test]
fn session_letters_serialize_as_array() {
    let session = EditSession::from_text("\u{05D1}\u{05BC} ");
    let json = serde_json::to_value(session.letters()).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "consonant": "\u{05D1}", "niqqud": ["\u{05BC}"], "representation": "\u{05D1}\u{05BC}" },
            { "consonant": " ", "niqqud": [], "representation": " " },
        ])
    );
}
