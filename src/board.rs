use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

use crate::api::ApiClient;
use crate::config::BoardConfig;
use crate::dom;
use crate::error::{DomError, Result};
use crate::markup::UNREGISTER_CLASS;
use crate::model::Catalog;
use crate::notice::NoticeKind;
use crate::page::DomPage;

pub const SELECT_ACTIVITY: &str = "Please select an activity.";
pub const SIGNUP_OK_FALLBACK: &str = "Signed up successfully.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_OK_FALLBACK: &str = "Participant unregistered";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister participant";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";

/// The three calls the board makes against the activities service.
pub trait Backend {
    async fn fetch_catalog(&self) -> Result<Catalog>;
    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>>;
}

/// Everything the board does to the page it lives on.
pub trait Page {
    fn render_catalog(&self, catalog: &Catalog);
    fn render_load_failed(&self);
    fn show_notice(&self, kind: NoticeKind, text: &str);
    fn reset_form(&self);
    fn confirm(&self, prompt: &str) -> bool;
    fn log(&self, message: &str);
    fn log_error(&self, message: &str);
}

/// What to do once a signup or unregister reply is in.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: NoticeKind,
    pub text: String,
    pub clear_form: bool,
    pub refresh: bool,
}

/// Drives the load / signup / unregister flows.
pub struct ActivityBoard<B = ApiClient, P = DomPage> {
    backend: B,
    page: P,
    // what the list currently shows
    catalog: RefCell<Catalog>,
}

impl<B: Backend, P: Page> ActivityBoard<B, P> {
    pub fn new(backend: B, page: P) -> Self {
        Self {
            backend,
            page,
            catalog: RefCell::new(Catalog::default()),
        }
    }

    /// Fetches the catalog and replaces the list and the select options.
    /// Failures are shown in the list and logged, never returned.
    pub async fn load_activities(&self) {
        match self.backend.fetch_catalog().await {
            Ok(catalog) => {
                self.page.render_catalog(&catalog);
                self.page
                    .log(&format!("Loaded {} activities", catalog.len()));
                *self.catalog.borrow_mut() = catalog;
            }
            Err(e) => {
                self.page.render_load_failed();
                *self.catalog.borrow_mut() = Catalog::default();
                self.page
                    .log_error(&format!("Error fetching activities: {e}"));
            }
        }
    }

    /// Doesn't refresh the list on success; spots left stay stale until the
    /// next load.
    pub async fn submit_signup(&self, activity: &str, email: &str) {
        if activity.is_empty() || self.catalog.borrow().get(activity).is_none() {
            self.page.show_notice(NoticeKind::Error, SELECT_ACTIVITY);
            return;
        }

        let result = self.backend.signup(activity, email).await;
        self.log_failure("Error signing up", &result);
        self.apply(signup_outcome(&result)).await;
    }

    pub async fn unregister_participant(&self, activity: &str, email: &str) {
        if !self.page.confirm(&confirm_prompt(activity, email)) {
            return;
        }

        let result = self.backend.unregister(activity, email).await;
        self.log_failure("Error unregistering participant", &result);
        self.apply(unregister_outcome(&result)).await;
    }

    async fn apply(&self, outcome: Outcome) {
        self.page.show_notice(outcome.kind, &outcome.text);
        if outcome.clear_form {
            self.page.reset_form();
        }
        if outcome.refresh {
            self.load_activities().await;
        }
    }

    // Server rejections are expected traffic; only transport trouble is logged.
    fn log_failure<T>(&self, context: &str, result: &Result<T>) {
        if let Err(e) = result {
            if !e.is_rejection() {
                self.page.log_error(&format!("{context}: {e}"));
            }
        }
    }
}

impl ActivityBoard<ApiClient, DomPage> {
    pub fn attach(config: &BoardConfig) -> std::result::Result<Rc<Self>, DomError> {
        Ok(Rc::new(Self::new(
            ApiClient::new(&config.api_base),
            DomPage::attach(config)?,
        )))
    }

    /// Hooks up the form submit and a single delegated click handler on the
    /// list, which survives every re-render of the cards.
    pub fn wire(self: &Rc<Self>) {
        let board = self.clone();
        listen(&self.page.form, "submit", move |e: Event| {
            e.prevent_default();
            let activity = board.page.select.value();
            let email = board.page.email.value();
            let board = board.clone();
            spawn_local(async move { board.submit_signup(&activity, &email).await });
        });

        let board = self.clone();
        let selector = format!(".{UNREGISTER_CLASS}");
        listen(&self.page.list, "click", move |e: Event| {
            let Some(btn) = dom::closest(e.target(), &selector) else {
                return;
            };
            let (Some(activity), Some(email)) = (
                btn.get_attribute("data-activity"),
                btn.get_attribute("data-email"),
            ) else {
                return;
            };
            let board = board.clone();
            spawn_local(async move { board.unregister_participant(&activity, &email).await });
        });
    }
}

pub fn confirm_prompt(activity: &str, email: &str) -> String {
    format!("Unregister {email} from {activity}?")
}

/// A successful signup clears the form but leaves the list alone.
pub fn signup_outcome(result: &Result<Option<String>>) -> Outcome {
    let (kind, text) = reply_notice(
        result,
        SIGNUP_OK_FALLBACK,
        SIGNUP_REJECTED_FALLBACK,
        SIGNUP_FAILED,
    );
    Outcome {
        kind,
        text,
        clear_form: result.is_ok(),
        refresh: false,
    }
}

/// A successful unregister re-fetches the list.
pub fn unregister_outcome(result: &Result<Option<String>>) -> Outcome {
    let (kind, text) = reply_notice(
        result,
        UNREGISTER_OK_FALLBACK,
        UNREGISTER_REJECTED_FALLBACK,
        UNREGISTER_FAILED,
    );
    Outcome {
        kind,
        text,
        clear_form: false,
        refresh: result.is_ok(),
    }
}

fn reply_notice(
    result: &Result<Option<String>>,
    ok_fallback: &str,
    rejected_fallback: &str,
    failed: &str,
) -> (NoticeKind, String) {
    match result {
        Ok(message) => (
            NoticeKind::Success,
            message.clone().unwrap_or_else(|| ok_fallback.to_string()),
        ),
        Err(e) if e.is_rejection() => (
            NoticeKind::Error,
            e.detail().unwrap_or(rejected_fallback).to_string(),
        ),
        Err(_) => (NoticeKind::Error, failed.to_string()),
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let c = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, c.as_ref().unchecked_ref()) {
        gloo::console::error!(format!("Could not listen for {event}"), e);
    }
    c.forget();
}
