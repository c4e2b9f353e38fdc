use super::state::{FormAction, FormStore, WaitlistSignup};
use super::transport::WaitlistTransport;
use super::validation::{validate_email, WaitlistError};

pub const SUCCESS_MESSAGE: &str = "You've been added to the queue!";

/// Capability for showing transient messages to the visitor.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// Runs one waitlist submission against the form in `store`.
///
/// A malformed email produces a failure notification and leaves the form
/// exactly as typed. Otherwise the form is marked submitting while the
/// transport runs, then a success notification is shown and the fields are
/// cleared. Either way exactly one notification is emitted.
///
/// Nothing here stops a second call while the first is in flight; the form
/// component disables its button for that.
pub async fn submit<S, N, T>(store: &S, notifier: &N, transport: &T) -> Result<(), WaitlistError>
where
    S: FormStore + ?Sized,
    N: Notifier + ?Sized,
    T: WaitlistTransport + ?Sized,
{
    let state = store.snapshot();
    if let Err(e) = validate_email(&state.email) {
        notifier.notify_failure(&e.to_string());
        return Err(e);
    }

    let signup = WaitlistSignup::from(&state);
    store.dispatch(FormAction::SubmissionStarted);
    transport.enroll(&signup).await;

    log::info!("Waitlist signup accepted for {}", signup.email);
    notifier.notify_success(SUCCESS_MESSAGE);
    store.dispatch(FormAction::SubmissionCompleted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::state::FormState;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        failures: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_failure(&self, message: &str) {
            self.failures.borrow_mut().push(message.to_string());
        }
    }

    /// Captures what the form looked like while "on the network".
    struct ObservingTransport {
        store: Rc<RefCell<FormState>>,
        seen: RefCell<Vec<(WaitlistSignup, FormState)>>,
    }

    impl WaitlistTransport for ObservingTransport {
        fn enroll<'a>(&'a self, signup: &'a WaitlistSignup) -> LocalBoxFuture<'a, ()> {
            async move {
                let during = self.store.borrow().clone();
                self.seen.borrow_mut().push((signup.clone(), during));
            }
            .boxed_local()
        }
    }

    fn form(email: &str, company: &str) -> Rc<RefCell<FormState>> {
        Rc::new(RefCell::new(FormState {
            email: email.into(),
            company: company.into(),
            is_submitting: false,
        }))
    }

    fn transport_for(store: &Rc<RefCell<FormState>>) -> ObservingTransport {
        ObservingTransport {
            store: store.clone(),
            seen: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn valid_email_succeeds_and_clears_the_form() {
        let store = form("user@example.com", "Acme");
        let notifier = RecordingNotifier::default();
        let transport = transport_for(&store);

        let result = block_on(submit(&store, &notifier, &transport));

        assert_eq!(result, Ok(()));
        assert_eq!(*store.borrow(), FormState::default());
        assert_eq!(*notifier.successes.borrow(), vec![SUCCESS_MESSAGE.to_string()]);
        assert!(notifier.failures.borrow().is_empty());
    }

    #[test]
    fn form_is_submitting_while_the_transport_runs() {
        let store = form("user@example.com", "");
        let notifier = RecordingNotifier::default();
        let transport = transport_for(&store);

        block_on(submit(&store, &notifier, &transport)).ok();

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        let (signup, during) = &seen[0];
        assert!(during.is_submitting);
        assert_eq!(during.email, "user@example.com");
        assert_eq!(
            *signup,
            WaitlistSignup {
                email: "user@example.com".into(),
                company: None,
            }
        );
        assert!(!store.borrow().is_submitting);
    }

    #[test]
    fn invalid_email_is_rejected_without_touching_the_form() {
        let store = form("not-an-email", "Acme");
        let notifier = RecordingNotifier::default();
        let transport = transport_for(&store);

        let result = block_on(submit(&store, &notifier, &transport));

        assert_eq!(result, Err(WaitlistError::InvalidEmailFormat));
        assert_eq!(
            *store.borrow(),
            FormState {
                email: "not-an-email".into(),
                company: "Acme".into(),
                is_submitting: false,
            }
        );
        assert_eq!(
            *notifier.failures.borrow(),
            vec!["Please enter a valid email address".to_string()]
        );
        assert!(notifier.successes.borrow().is_empty());
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn empty_email_is_rejected() {
        let store = form("", "");
        let notifier = RecordingNotifier::default();
        let transport = transport_for(&store);

        assert!(block_on(submit(&store, &notifier, &transport)).is_err());
        assert!(!store.borrow().is_submitting);
        assert_eq!(notifier.failures.borrow().len(), 1);
    }

    #[test]
    fn every_attempt_emits_exactly_one_notification() {
        let notifier = RecordingNotifier::default();
        let attempts = ["user@example.com", "nope", "a@b.c", "user@localhost", "x y@z.io"];

        for (i, email) in attempts.iter().enumerate() {
            let store = form(email, "");
            let transport = transport_for(&store);
            block_on(submit(&store, &notifier, &transport)).ok();
            let total = notifier.successes.borrow().len() + notifier.failures.borrow().len();
            assert_eq!(total, i + 1, "{email}");
        }
        assert_eq!(notifier.successes.borrow().len(), 2);
        assert_eq!(notifier.failures.borrow().len(), 3);
    }

    #[test]
    fn form_is_reusable_after_a_rejection() {
        let store = form("user@example", "");
        let notifier = RecordingNotifier::default();
        let transport = transport_for(&store);

        assert!(block_on(submit(&store, &notifier, &transport)).is_err());
        store.dispatch(FormAction::EmailChanged("user@example.com".into()));
        assert!(block_on(submit(&store, &notifier, &transport)).is_ok());
        assert_eq!(store.borrow().email, "");
    }
}
