//! String templates for the activity list. Everything that came from the
//! server goes through [`escape_html`] before it lands in markup.

use crate::model::{Activity, Catalog};

pub const PLACEHOLDER_OPTION: &str = r#"<option value="">-- Select an activity --</option>"#;
pub const LOAD_FAILED: &str = "<p>Failed to load activities. Please try again later.</p>";
pub const NO_PARTICIPANTS: &str = r#"<p class="participants-empty">No participants yet</p>"#;

pub const UNREGISTER_CLASS: &str = "participant-unregister";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

pub fn render_participants(activity_name: &str, participants: &[String]) -> String {
    if participants.is_empty() {
        return NO_PARTICIPANTS.to_string();
    }

    let name = escape_html(activity_name);
    let mut items = String::new();
    for p in participants {
        let email = escape_html(p);
        items.push_str(&format!(
            r#"<li><span class="participant-email">{email}</span> <button class="{cls}" data-activity="{name}" data-email="{email}" title="Unregister">✖</button></li>"#,
            cls = UNREGISTER_CLASS,
        ));
    }
    format!("<ul>{items}</ul>")
}

pub fn render_activity_card(name: &str, activity: &Activity) -> String {
    format!(
        r#"<div class="activity-card">
          <h4>{name}</h4>
          <p>{description}</p>
          <p><strong>Schedule:</strong> {schedule}</p>
          <p><strong>Availability:</strong> {spots} spots left</p>
          <div class="participants">
            <strong>Participants</strong>
            {participants}
          </div>
        </div>"#,
        name = escape_html(name),
        description = escape_html(&activity.description),
        schedule = escape_html(&activity.schedule),
        spots = activity.spots_left(),
        participants = render_participants(name, &activity.participants),
    )
}

pub fn render_activity_list(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|(name, activity)| render_activity_card(name, activity))
        .collect()
}

/// Options for the activity `<select>`, placeholder first.
pub fn render_activity_options(catalog: &Catalog) -> String {
    let mut out = String::from(PLACEHOLDER_OPTION);
    for (name, _) in catalog.iter() {
        let name = escape_html(name);
        out.push_str(&format!(r#"<option value="{name}">{name}</option>"#));
    }
    out
}
