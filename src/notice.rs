use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

pub const HIDDEN_CLASS: &str = "hidden";

/// Hands out one token per notice shown. A hide timer only acts if its token
/// is still the latest, so an old timer can't blank a newer notice.
#[derive(Debug, Default)]
pub struct NoticeTokens {
    latest: Cell<u64>,
}

impl NoticeTokens {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

/// The single message region shared by every board operation.
pub struct NoticeRegion {
    el: Element,
    hide_after_ms: u32,
    tokens: Rc<NoticeTokens>,
}

impl NoticeRegion {
    pub fn new(el: Element, hide_after_ms: u32) -> Self {
        Self {
            el,
            hide_after_ms,
            tokens: Rc::new(NoticeTokens::default()),
        }
    }

    /// Text goes in as text content, never markup.
    pub fn show(&self, kind: NoticeKind, text: &str) {
        self.el.set_text_content(Some(text));
        // replaces any previous kind and drops `hidden`
        self.el.set_class_name(kind.class());

        let token = self.tokens.issue();
        let el = self.el.clone();
        let tokens = self.tokens.clone();
        Timeout::new(self.hide_after_ms, move || {
            if tokens.is_current(token) {
                let _ = el.class_list().add_1(HIDDEN_CLASS);
            }
        })
        .forget();
    }
}
