use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;
use yew::Callback;

use crate::components::notification::Notification;
use crate::config::{SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};
use crate::contact::validation::{validate, FormSubmission, ValidationReport};
use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

/// Label and enabled state of the submit button. While loading, the
/// original label is parked so it can be put back.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    label: String,
    saved_label: Option<String>,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), saved_label: None }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.saved_label.is_some()
    }

    /// Disables the control and shows `text`. Returns false when it was
    /// already loading.
    pub fn begin_loading(&mut self, text: &str) -> bool {
        if self.saved_label.is_some() {
            return false;
        }
        self.saved_label = Some(mem::replace(&mut self.label, text.to_string()));
        true
    }

    pub fn restore(&mut self) {
        if let Some(original) = self.saved_label.take() {
            self.label = original;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub fields: FormSubmission,
    pub submit: SubmitControl,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: FormSubmission::default(),
            submit: SubmitControl::new(SUBMIT_LABEL),
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Phone => &self.fields.phone,
            FormField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Phone => &mut self.fields.phone,
            FormField::Message => &mut self.fields.message,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        self.fields = FormSubmission::default();
    }
}

/// Returned by real sinks; the simulated one always succeeds.
#[allow(dead_code)]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeliveryError {
    #[error("Your message could not be sent: {0}")]
    Rejected(String),
    #[error("Your message could not be sent. Please try again later.")]
    Unavailable,
}

pub type DeliveryCallback = Box<dyn FnOnce(Result<(), DeliveryError>)>;

/// Where a validated submission goes. `done` must be called exactly once.
pub trait ContactSink: 'static {
    fn deliver(&self, submission: FormSubmission, done: DeliveryCallback);
}

/// Pretends to send: waits a fixed delay and always succeeds. No request
/// leaves the browser.
#[derive(Clone, Debug)]
pub struct SimulatedDelivery<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> SimulatedDelivery<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms }
    }
}

impl<S: Scheduler> ContactSink for SimulatedDelivery<S> {
    fn deliver(&self, submission: FormSubmission, done: DeliveryCallback) {
        debug!(
            "Simulating delivery of {}",
            serde_json::to_string(&submission).unwrap_or_default()
        );
        self.scheduler.defer(self.delay_ms, Box::new(move || done(Ok(()))));
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Rejected(ValidationReport),
    Sending,
    /// A previous submission is still in flight.
    Busy,
}

pub struct ContactFormController<D: ContactSink> {
    form: Rc<RefCell<ContactForm>>,
    sink: Rc<D>,
    notify: Callback<Notification>,
    on_change: Callback<()>,
}

impl<D: ContactSink> Clone for ContactFormController<D> {
    fn clone(&self) -> Self {
        Self {
            form: Rc::clone(&self.form),
            sink: Rc::clone(&self.sink),
            notify: self.notify.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<D: ContactSink> ContactFormController<D> {
    pub fn new(sink: D, notify: Callback<Notification>, on_change: Callback<()>) -> Self {
        Self {
            form: Rc::new(RefCell::new(ContactForm::default())),
            sink: Rc::new(sink),
            notify,
            on_change,
        }
    }

    pub fn snapshot(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.form.borrow_mut().set(field, value);
        self.on_change.emit(());
    }

    pub fn submit(&self) -> SubmitOutcome {
        let submission = {
            let form = self.form.borrow();
            if form.submit.is_disabled() {
                debug!("Ignoring submit while sending");
                return SubmitOutcome::Busy;
            }
            form.fields.clone()
        };

        let report = validate(&submission);
        if !report.is_valid() {
            warn!("Contact form rejected with {} error(s)", report.errors().len());
            self.notify.emit(Notification::error(report.joined()));
            return SubmitOutcome::Rejected(report);
        }

        self.form.borrow_mut().submit.begin_loading(SENDING_LABEL);
        self.on_change.emit(());
        info!("Sending contact form");

        let controller = self.clone();
        self.sink
            .deliver(submission, Box::new(move |result| controller.finish(result)));
        SubmitOutcome::Sending
    }

    fn finish(&self, result: Result<(), DeliveryError>) {
        match result {
            Ok(()) => {
                info!("Contact form sent");
                self.form.borrow_mut().reset();
                self.notify.emit(Notification::success(SUCCESS_MESSAGE));
            }
            Err(e) => {
                warn!("Contact form delivery failed: {}", e);
                self.notify.emit(Notification::error(e.to_string()));
            }
        }
        self.form.borrow_mut().submit.restore();
        self.on_change.emit(());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::components::notification::NotificationKind;
    use crate::config::SUBMIT_DELAY_MS;
    use crate::contact::validation::strategies;
    use crate::timer::testing::ManualScheduler;

    struct Harness<D: ContactSink> {
        controller: ContactFormController<D>,
        shown: Rc<RefCell<Vec<Notification>>>,
    }

    fn harness<D: ContactSink>(sink: D) -> Harness<D> {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&shown);
        let controller = ContactFormController::new(
            sink,
            Callback::from(move |n| log.borrow_mut().push(n)),
            Callback::noop(),
        );
        Harness { controller, shown }
    }

    fn fill(controller: &ContactFormController<impl ContactSink>, values: [&str; 4]) {
        let fields = [FormField::Name, FormField::Email, FormField::Phone, FormField::Message];
        for (field, value) in fields.into_iter().zip(values) {
            controller.set_field(field, value.to_string());
        }
    }

    const VALID: [&str; 4] = [
        "Jane Doe",
        "jane@example.com",
        "1234567890",
        "Hello, this is a test.",
    ];

    struct CountingSink(Rc<Cell<u32>>);

    impl ContactSink for CountingSink {
        fn deliver(&self, _: FormSubmission, done: DeliveryCallback) {
            self.0.set(self.0.get() + 1);
            done(Ok(()));
        }
    }

    struct FailingSink;

    impl ContactSink for FailingSink {
        fn deliver(&self, _: FormSubmission, done: DeliveryCallback) {
            done(Err(DeliveryError::Unavailable));
        }
    }

    #[test]
    fn successful_submission_after_delay() {
        let scheduler = ManualScheduler::new();
        let h = harness(SimulatedDelivery::new(scheduler.clone(), SUBMIT_DELAY_MS));
        fill(&h.controller, VALID);

        assert_eq!(h.controller.submit(), SubmitOutcome::Sending);
        let sending = h.controller.snapshot();
        assert!(sending.submit.is_disabled());
        assert_eq!(sending.submit.label(), SENDING_LABEL);
        assert_eq!(sending.fields.name, "Jane Doe");
        assert!(h.shown.borrow().is_empty());

        scheduler.advance(u64::from(SUBMIT_DELAY_MS) - 1);
        assert!(h.controller.snapshot().submit.is_disabled());

        scheduler.advance(1);
        let done = h.controller.snapshot();
        assert_eq!(done.fields, FormSubmission::default());
        assert!(!done.submit.is_disabled());
        assert_eq!(done.submit.label(), SUBMIT_LABEL);
        assert_eq!(*h.shown.borrow(), vec![Notification::success(SUCCESS_MESSAGE)]);
    }

    #[test]
    fn invalid_submission_never_reaches_the_sink() {
        let delivered = Rc::new(Cell::new(0));
        let h = harness(CountingSink(Rc::clone(&delivered)));
        fill(&h.controller, ["A", "bad", "123", "short"]);

        match h.controller.submit() {
            SubmitOutcome::Rejected(report) => assert_eq!(report.errors().len(), 4),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(delivered.get(), 0);

        let shown = h.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert_eq!(shown[0].message.lines().count(), 4);

        // Fields stay for the user to fix
        let form = h.controller.snapshot();
        assert_eq!(form.fields.name, "A");
        assert!(!form.submit.is_disabled());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let scheduler = ManualScheduler::new();
        let h = harness(SimulatedDelivery::new(scheduler.clone(), SUBMIT_DELAY_MS));
        fill(&h.controller, VALID);

        assert_eq!(h.controller.submit(), SubmitOutcome::Sending);
        assert_eq!(h.controller.submit(), SubmitOutcome::Busy);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(u64::from(SUBMIT_DELAY_MS));
        assert_eq!(h.shown.borrow().len(), 1);
    }

    #[test]
    fn delivery_failure_keeps_fields_and_reports_error() {
        let h = harness(FailingSink);
        fill(&h.controller, VALID);

        assert_eq!(h.controller.submit(), SubmitOutcome::Sending);

        let form = h.controller.snapshot();
        assert_eq!(form.fields.email, "jane@example.com");
        assert_eq!(form.submit.label(), SUBMIT_LABEL);
        assert!(!form.submit.is_disabled());
        assert_eq!(
            *h.shown.borrow(),
            vec![Notification::error(DeliveryError::Unavailable.to_string())]
        );
    }

    #[test]
    fn delivery_errors_read_as_user_messages() {
        assert_eq!(
            DeliveryError::Rejected("mailbox full".into()).to_string(),
            "Your message could not be sent: mailbox full"
        );
    }

    #[test]
    fn submit_control_round_trips_its_label() {
        let mut control = SubmitControl::new("Get a Quote");
        assert!(control.begin_loading("Loading..."));
        assert!(!control.begin_loading("Again..."));
        assert_eq!(control.label(), "Loading...");
        control.restore();
        assert_eq!(control.label(), "Get a Quote");
        assert!(!control.is_disabled());
        control.restore();
        assert_eq!(control.label(), "Get a Quote");
    }

    proptest! {
        #[test]
        fn only_valid_forms_are_delivered((data, expected) in strategies::submission()) {
            let delivered = Rc::new(Cell::new(0));
            let h = harness(CountingSink(Rc::clone(&delivered)));
            fill(&h.controller, [data.name.as_str(), data.email.as_str(), data.phone.as_str(), data.message.as_str()]);

            let outcome = h.controller.submit();
            if expected.is_empty() {
                prop_assert_eq!(outcome, SubmitOutcome::Sending);
                prop_assert_eq!(delivered.get(), 1);
                prop_assert_eq!(h.controller.snapshot().fields, FormSubmission::default());
            } else {
                match outcome {
                    SubmitOutcome::Rejected(report) => {
                        prop_assert_eq!(report.errors(), expected.as_slice())
                    }
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
                prop_assert_eq!(delivered.get(), 0);
                prop_assert_eq!(h.controller.snapshot().fields, data);
                prop_assert_eq!(h.shown.borrow()[0].kind, NotificationKind::Error);
            }
        }
    }
}
