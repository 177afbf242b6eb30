use gloo::console::{error, log};
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::board::Page;
use crate::config::BoardConfig;
use crate::dom;
use crate::error::DomError;
use crate::markup;
use crate::model::Catalog;
use crate::notice::{NoticeKind, NoticeRegion};

/// The live document: the elements the board reads from and renders into.
pub struct DomPage {
    pub list: Element,
    pub select: HtmlSelectElement,
    pub email: HtmlInputElement,
    pub form: HtmlFormElement,
    notice: NoticeRegion,
}

impl DomPage {
    pub fn attach(config: &BoardConfig) -> Result<Self, DomError> {
        let ids = &config.ids;
        Ok(Self {
            list: dom::require(&ids.activities_list, "element")?,
            select: dom::require(&ids.activity_select, "<select>")?,
            email: dom::require(&ids.email_input, "<input>")?,
            form: dom::require(&ids.signup_form, "<form>")?,
            notice: NoticeRegion::new(
                dom::require(&ids.message, "element")?,
                config.notice_hide_ms,
            ),
        })
    }
}

impl Page for DomPage {
    fn render_catalog(&self, catalog: &Catalog) {
        self.list
            .set_inner_html(&markup::render_activity_list(catalog));
        self.select
            .set_inner_html(&markup::render_activity_options(catalog));
    }

    fn render_load_failed(&self) {
        self.list.set_inner_html(markup::LOAD_FAILED);
        // nothing the page failed to load should stay selectable
        self.select.set_inner_html(markup::PLACEHOLDER_OPTION);
    }

    fn show_notice(&self, kind: NoticeKind, text: &str) {
        self.notice.show(kind, text);
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn confirm(&self, prompt: &str) -> bool {
        gloo::dialogs::confirm(prompt)
    }

    fn log(&self, message: &str) {
        log!(message);
    }

    fn log_error(&self, message: &str) {
        error!(message);
    }
}
