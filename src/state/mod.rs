//! Front-end state machine.
//!
//! Holds everything a client needs to drive the pages: the current page,
//! the prediction form and the status of the last prediction. State is
//! updated only through [`reduce`], which returns a new state and leaves the
//! input untouched, so any renderer can be layered on top.

mod form;

pub use form::{FormField, PredictionForm};

use crate::application::PredictionResponse;
use crate::domain::PatientParameters;

/// Navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Prediction,
    HealthCalculator,
    Precautions,
    Information,
    PrivacyPolicy,
    Contact,
    Feedback,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Prediction,
        Page::HealthCalculator,
        Page::Precautions,
        Page::Information,
        Page::PrivacyPolicy,
        Page::Contact,
        Page::Feedback,
    ];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Prediction => "Prediction",
            Page::HealthCalculator => "Health Calculator",
            Page::Precautions => "Precautions",
            Page::Information => "Information",
            Page::PrivacyPolicy => "Privacy Policy",
            Page::Contact => "Contact",
            Page::Feedback => "Feedback",
        }
    }

    /// Route path for the page.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Prediction => "/prediction",
            Page::HealthCalculator => "/health-calculator",
            Page::Precautions => "/precautions-page",
            Page::Information => "/information",
            Page::PrivacyPolicy => "/privacy-policy",
            Page::Contact => "/contact",
            Page::Feedback => "/feedback",
        }
    }

    /// Look up a page by route path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.path() == path)
    }
}

/// Lifecycle of a prediction request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionStatus {
    #[default]
    Idle,
    /// Submitted; the parameters are the request to send
    Pending(PatientParameters),
    Complete(PredictionResponse),
    Failed(String),
}

/// Everything the UI shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub page: Page,
    pub form: PredictionForm,
    pub status: PredictionStatus,
}

impl AppState {
    /// Parameters awaiting submission, if a request is pending.
    #[must_use]
    pub fn pending_request(&self) -> Option<&PatientParameters> {
        match &self.status {
            PredictionStatus::Pending(params) => Some(params),
            _ => None,
        }
    }
}

/// User and network events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Page),
    NextField,
    PrevField,
    SelectField(usize),
    Input(char),
    DeleteChar,
    ClearField,
    LoadSample,
    ResetForm,
    Submit,
    PredictionSucceeded(PredictionResponse),
    PredictionFailed(String),
    DismissResult,
}

/// Apply one action and return the resulting state.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::Navigate(page) => next.page = page,
        Action::NextField => next.form.next_field(),
        Action::PrevField => next.form.prev_field(),
        Action::SelectField(index) => next.form.select_field(index),
        Action::Input(c) => next.form.input_char(c),
        Action::DeleteChar => next.form.delete_char(),
        Action::ClearField => next.form.clear_field(),
        Action::LoadSample => next.form.load_sample_data(),
        Action::ResetForm => next.form.clear_sensitive(),
        Action::Submit => {
            if matches!(next.status, PredictionStatus::Pending(_)) {
                return next;
            }
            match next.form.to_parameters() {
                Ok(params) => {
                    next.form.clear_sensitive();
                    next.status = PredictionStatus::Pending(params);
                }
                Err(message) => next.form.error_message = Some(message),
            }
        }
        Action::PredictionSucceeded(response) => {
            if matches!(next.status, PredictionStatus::Pending(_)) {
                next.status = PredictionStatus::Complete(response);
            }
        }
        Action::PredictionFailed(message) => {
            if matches!(next.status, PredictionStatus::Pending(_)) {
                next.status = PredictionStatus::Failed(message);
            }
        }
        Action::DismissResult => {
            if !matches!(next.status, PredictionStatus::Pending(_)) {
                next.status = PredictionStatus::Idle;
            }
        }
    }

    next
}
