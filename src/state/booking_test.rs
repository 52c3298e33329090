use time::macros::date;

use super::*;

const TODAY: Date = date!(2026 - 10 - 15);

fn valid_draft() -> BookingDraft {
    BookingDraft {
        name: "  Asha Verma ".into(),
        email: "asha@example.com".into(),
        phone: "9876543210".into(),
        package: "wedding".into(),
        date: "2026-12-01".into(),
        details: " Two-day shoot ".into(),
    }
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn validation_patterns_compile() {
    assert!(EMAIL_PATTERN.is_ok());
    assert!(PHONE_PATTERN.is_ok());
}

#[test]
fn broken_pattern_rejects_everything() {
    let broken = Regex::new("(");
    assert!(broken.is_err());
    assert!(!matches_pattern(&broken, "test", "anything"));
}

#[test]
fn email_pattern_requires_local_domain_and_tld() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("@c.com"));
}

#[test]
fn phone_requires_exactly_ten_digits() {
    assert!(is_valid_phone("0123456789"));
    assert!(!is_valid_phone("123456789"));
    assert!(!is_valid_phone("12345678901"));
    assert!(!is_valid_phone("98765-4321"));
}

#[test]
fn date_today_or_later_passes() {
    assert!(is_future_or_today("2026-10-15", TODAY));
    assert!(is_future_or_today("2027-01-01", TODAY));
    assert!(!is_future_or_today("2026-10-14", TODAY));
    assert!(!is_future_or_today("next tuesday", TODAY));
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn valid_draft_yields_trimmed_request() {
    let request = valid_draft().validate(TODAY).unwrap();
    assert_eq!(request.name, "Asha Verma");
    assert_eq!(request.details, "Two-day shoot");
    assert_eq!(request.date, "2026-12-01");
}

#[test]
fn empty_draft_reports_required_fields_in_order() {
    let errors = BookingDraft::default().validate(TODAY).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            BookingField::Name,
            BookingField::Email,
            BookingField::Phone,
            BookingField::Package,
            BookingField::Date,
        ]
    );
    assert!(errors.iter().all(|e| e.message == "This field is required"));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut draft = valid_draft();
    draft.name = "   ".into();
    let errors = draft.validate(TODAY).unwrap_err();
    assert_eq!(errors, vec![FieldError { field: BookingField::Name, message: "This field is required" }]);
}

#[test]
fn format_errors_use_field_specific_messages() {
    let mut draft = valid_draft();
    draft.email = "not-an-email".into();
    draft.phone = "12345".into();
    draft.date = "2020-01-01".into();
    let errors = draft.validate(TODAY).unwrap_err();
    let messages: Vec<_> = errors.iter().map(|e| e.message).collect();
    assert_eq!(
        messages,
        vec![
            "Please enter a valid email address",
            "Please enter a valid 10-digit phone number",
            "Please select a future date",
        ]
    );
}

#[test]
fn details_are_optional() {
    let mut draft = valid_draft();
    draft.details.clear();
    assert!(draft.validate(TODAY).is_ok());
}

#[test]
fn draft_set_and_value_address_same_field() {
    let mut draft = BookingDraft::default();
    for field in BookingField::ALL {
        draft.set(field, field.id().to_owned());
    }
    for field in BookingField::ALL {
        assert_eq!(draft.value(field), field.id());
    }
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn invalid_submit_records_errors_and_does_not_start() {
    let mut state = BookingState::default();
    assert!(state.begin_submit(TODAY).is_none());
    assert!(!state.submitting);
    assert_eq!(state.first_error_field(), Some(BookingField::Name));
    assert_eq!(state.error_for(BookingField::Email), Some("This field is required"));
    assert_eq!(state.error_for(BookingField::Details), None);
}

#[test]
fn valid_submit_switches_button_label() {
    let mut state = BookingState { draft: valid_draft(), ..BookingState::default() };
    assert!(state.begin_submit(TODAY).is_some());
    assert_eq!(state.submit_label(), "Processing...");
    assert!(state.begin_submit(TODAY).is_none(), "second submit while in flight is ignored");
}

#[test]
fn success_resets_form_and_restores_button() {
    let mut state = BookingState { draft: valid_draft(), ..BookingState::default() };
    state.begin_submit(TODAY);
    state.finish(&Ok("https://wa.me/1?text=hi".into()));
    assert!(!state.submitting);
    assert_eq!(state.submit_label(), "Check Availability Now");
    assert_eq!(state.draft, BookingDraft::default());
    assert_eq!(
        state.messages,
        vec![FormMessage::Success("✅ Booking successful! Redirecting to WhatsApp...".into())]
    );
}

#[test]
fn failure_keeps_draft_and_shows_error() {
    let mut state = BookingState { draft: valid_draft(), ..BookingState::default() };
    state.begin_submit(TODAY);
    state.finish(&Err(ApiError::Rejected("Date already booked".into())));
    assert_eq!(state.draft, valid_draft());
    assert_eq!(state.messages, vec![FormMessage::Error("❌ Date already booked".into())]);
}

#[test]
fn resubmit_clears_previous_messages() {
    let mut state = BookingState { draft: valid_draft(), ..BookingState::default() };
    state.begin_submit(TODAY);
    state.finish(&Err(ApiError::MissingWhatsAppLink));
    state.begin_submit(TODAY);
    assert!(state.messages.is_empty());
}

#[test]
fn popup_blocked_adds_fallback_with_preview() {
    let mut state = BookingState::default();
    state.popup_blocked("https://wa.me/91?text=New+booking%3A+Asha");
    assert_eq!(
        state.messages,
        vec![FormMessage::WhatsAppFallback {
            link: "https://wa.me/91?text=New+booking%3A+Asha".into(),
            preview: "New booking: Asha".into(),
        }]
    );
}
