// HTML fragment rendered for authenticated guests.

use std::fmt::Write;

use crate::domain::entities::{EventInfo, Role, ScheduleEntry};
use crate::use_cases::event_details::EventDetails;

const STYLE: &str = r#"<style>
    .header { text-align: center; padding: 40px 30px; border: 3px solid #ff6b35; border-radius: 25px; margin-bottom: 30px; }
    .header h1 { color: #d84315; font-size: 2.6em; }
    .content-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 30px; }
    .card { border: 2px solid #ffd700; border-radius: 20px; padding: 32px; }
    .card h2 { color: #d84315; }
    .full-width-card { grid-column: 1 / -1; }
    .schedule-item { padding: 16px; margin: 14px 0; border-left: 5px solid #ff6b35; border-radius: 10px; }
    .schedule-item .time { font-weight: 700; color: #d84315; }
    .role-banner { color: #d84315; font-weight: 600; }
    .timezone { color: #d84315; font-weight: 200; }
    .direction-btn { display: inline-block; padding: 12px 24px; border-radius: 10px; margin-right: 12px; }
    .logout-btn { position: fixed; bottom: 25px; right: 25px; }
    @media (max-width: 768px) { .content-grid { grid-template-columns: 1fr; } }
</style>"#;

pub fn render_details(event: &EventInfo, details: &EventDetails) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(STYLE);
    html.push_str(r#"<button class="logout-btn" onclick="logout()">&larr; Logout</button>"#);

    // `write!` into a String cannot fail.
    let _ = write!(
        html,
        r#"<div class="header"><h1>{title}</h1><p class="subtitle">{subtitle}</p><p class="welcome">Namaste, <span id="guestName">{guest}</span>!</p><p class="date-time"><strong>{date}</strong></p></div>"#,
        title = escape(&event.title),
        subtitle = escape(&event.subtitle),
        guest = escape(&details.session.guest_name),
        date = escape(&event.date),
    );

    html.push_str(r#"<div class="content-grid">"#);

    let address = event
        .address_lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>");
    let _ = write!(
        html,
        r#"<div class="card"><h2>Venue Details</h2><p><strong>Address:</strong><br>{address}</p><p><strong>Parking:</strong> {parking}</p></div>"#,
        parking = escape(&event.parking),
    );

    let _ = write!(
        html,
        r#"<div class="card"><h2>Program Schedule</h2>{banner}{schedule}</div>"#,
        banner = role_banner(details.session.role, &event.timezone_label),
        schedule = schedule_items(&details.schedule),
    );

    let _ = write!(
        html,
        r#"<div class="card full-width-card"><h2>Location &amp; Directions</h2><a class="direction-btn google-btn" target="_blank" href="{google}">Open in Google Maps</a><a class="direction-btn apple-btn" target="_blank" href="{apple}">Open in Apple Maps</a></div>"#,
        google = escape(&event.google_maps_url),
        apple = escape(&event.apple_maps_url),
    );

    let _ = write!(
        html,
        r#"<div class="card full-width-card"><h2>Message from the Hosts</h2><p>{message}</p><p class="signature">- {hosts}</p></div>"#,
        message = escape(&event.host_message),
        hosts = escape(&event.hosts),
    );

    html.push_str("</div>");
    html
}

fn role_banner(role: Role, timezone_label: &str) -> String {
    let mut banner = match role {
        Role::Vip => r#"<p class="role-banner">VIP Access - Full Schedule</p>"#.to_string(),
        Role::Friend => String::new(),
    };
    let _ = write!(
        banner,
        r#"<span class="timezone">{}</span>"#,
        escape(timezone_label)
    );
    banner
}

fn schedule_items(schedule: &[ScheduleEntry]) -> String {
    schedule
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="schedule-item"><div class="time">{}</div><div class="activity">{}</div></div>"#,
                escape(&entry.time),
                escape(&entry.activity)
            )
        })
        .collect()
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
