use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

/// Local state of one waitlist form. Lives as long as the form component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub company: String,
    pub is_submitting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    EmailChanged(String),
    CompanyChanged(String),
    SubmissionStarted,
    /// Clears both fields and drops the submitting flag.
    SubmissionCompleted,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::EmailChanged(email) => self.email = email,
            FormAction::CompanyChanged(company) => self.company = company,
            FormAction::SubmissionStarted => self.is_submitting = true,
            FormAction::SubmissionCompleted => {
                self.email.clear();
                self.company.clear();
                self.is_submitting = false;
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Where the submit flow reads the form from and writes changes to.
pub trait FormStore {
    fn snapshot(&self) -> FormState;
    fn dispatch(&self, action: FormAction);
}

impl FormStore for UseReducerHandle<FormState> {
    fn snapshot(&self) -> FormState {
        (**self).clone()
    }

    fn dispatch(&self, action: FormAction) {
        UseReducerHandle::dispatch(self, action);
    }
}

impl FormStore for Rc<RefCell<FormState>> {
    fn snapshot(&self) -> FormState {
        self.borrow().clone()
    }

    fn dispatch(&self, action: FormAction) {
        self.borrow_mut().apply(action);
    }
}

/// What gets handed to the transport once the email passes validation.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WaitlistSignup {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl From<&FormState> for WaitlistSignup {
    fn from(state: &FormState) -> Self {
        let company = state.company.trim();
        Self {
            email: state.email.clone(),
            company: (!company.is_empty()).then(|| company.to_string()),
        }
    }
}
