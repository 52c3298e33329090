//! Booking form draft, validation, and submission status.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form collects a shoot request, validates it locally, then posts it to
//! the backend which answers with a WhatsApp deep link for the hand-off.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

use crate::net::api::ApiError;
use crate::net::types::BookingRequest;
use crate::util::whatsapp;

/// Label of the submit button while idle.
pub const SUBMIT_LABEL: &str = "Check Availability Now";
/// Label of the submit button while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Processing...";
/// Appended to the form when the backend accepts a booking.
pub const SUCCESS_MESSAGE: &str = "✅ Booking successful! Redirecting to WhatsApp...";

const REQUIRED_MESSAGE: &str = "This field is required";
const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";
const DATE_MESSAGE: &str = "Please select a future date";

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static PHONE_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$"));

/// Inputs of the booking form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Package,
    Date,
    Details,
}

impl BookingField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Package,
        Self::Date,
        Self::Details,
    ];

    /// DOM id (and form name) of the input.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Package => "package",
            Self::Date => "date",
            Self::Details => "details",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Details)
    }
}

/// A validation failure attached to one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: BookingField,
    pub message: &'static str,
}

/// Raw input values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub package: String,
    pub date: String,
    pub details: String,
}

impl BookingDraft {
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Package => &self.package,
            BookingField::Date => &self.date,
            BookingField::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::Name => self.name = value,
            BookingField::Email => self.email = value,
            BookingField::Phone => self.phone = value,
            BookingField::Package => self.package = value,
            BookingField::Date => self.date = value,
            BookingField::Details => self.details = value,
        }
    }

    /// Validate every field against `today`, reporting at most one error per
    /// field in document order. On success returns the trimmed request body.
    ///
    /// # Errors
    ///
    /// Returns the list of field errors when any input is invalid.
    pub fn validate(&self, today: Date) -> Result<BookingRequest, Vec<FieldError>> {
        let errors: Vec<FieldError> = BookingField::ALL
            .into_iter()
            .filter_map(|field| {
                check_field(field, self.value(field).trim(), today).map(|message| FieldError { field, message })
            })
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BookingRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            package: self.package.clone(),
            date: self.date.clone(),
            details: self.details.trim().to_owned(),
        })
    }
}

fn check_field(field: BookingField, value: &str, today: Date) -> Option<&'static str> {
    if value.is_empty() {
        return field.is_required().then_some(REQUIRED_MESSAGE);
    }
    match field {
        BookingField::Email if !is_valid_email(value) => Some(EMAIL_MESSAGE),
        BookingField::Phone if !is_valid_phone(value) => Some(PHONE_MESSAGE),
        BookingField::Date if !is_future_or_today(value, today) => Some(DATE_MESSAGE),
        _ => None,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    matches_pattern(&EMAIL_PATTERN, "email", value)
}

pub fn is_valid_phone(value: &str) -> bool {
    matches_pattern(&PHONE_PATTERN, "phone", value)
}

/// A pattern that failed to compile rejects every value and says so.
fn matches_pattern(pattern: &Result<Regex, regex::Error>, name: &str, value: &str) -> bool {
    match pattern {
        Ok(re) => re.is_match(value),
        Err(err) => {
            log::error!("{name} validation pattern is invalid: {err}");
            false
        }
    }
}

/// Whether `value` (`YYYY-MM-DD`) is `today` or later. Unparseable dates fail.
pub fn is_future_or_today(value: &str, today: Date) -> bool {
    Date::parse(value, format_description!("[year]-[month]-[day]")).is_ok_and(|date| date >= today)
}

/// A status line appended below the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
    /// The WhatsApp tab could not be opened; offer a manual link.
    WhatsAppFallback { link: String, preview: String },
}

/// Booking widget state.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub draft: BookingDraft,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
    pub messages: Vec<FormMessage>,
}

impl BookingState {
    /// Clear previous feedback and validate. Returns the request to send, or
    /// `None` when validation failed or a submission is already running.
    pub fn begin_submit(&mut self, today: Date) -> Option<BookingRequest> {
        if self.submitting {
            return None;
        }
        self.messages.clear();
        self.errors.clear();
        match self.draft.validate(today) {
            Ok(request) => {
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record the backend outcome. Successful bookings reset the draft.
    pub fn finish(&mut self, outcome: &Result<String, ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.messages.push(FormMessage::Success(SUCCESS_MESSAGE.to_owned()));
                self.draft = BookingDraft::default();
            }
            Err(err) => self.messages.push(FormMessage::Error(format!("❌ {err}"))),
        }
    }

    /// Offer a manual WhatsApp link after the popup was blocked.
    pub fn popup_blocked(&mut self, link: &str) {
        self.messages.push(FormMessage::WhatsAppFallback {
            link: link.to_owned(),
            preview: whatsapp::message_preview(link),
        });
    }

    pub fn error_for(&self, field: BookingField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// First invalid field, which the form scrolls into view.
    pub fn first_error_field(&self) -> Option<BookingField> {
        self.errors.first().map(|e| e.field)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}
