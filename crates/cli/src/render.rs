// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of tickets for the terminal.

use ticket_desk::guidance::{remark_prompt, submit_label};
use ticket_desk_api::TicketView;
use ticket_desk_domain::{Ticket, format_timestamp};

fn breaks_line(tag: &str) -> bool {
    let name: String = tag
        .trim()
        .trim_end_matches('/')
        .trim()
        .to_ascii_lowercase();
    matches!(name.as_str(), "/p" | "br" | "/li" | "/div")
}

const fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || next == '/' || next == '!'
}

/// Strips rich-text markup from a remark.
///
/// Remarks raised in the web console are HTML from its editor; remarks
/// raised here are plain text. A `<` only starts a tag when a letter, `/`
/// or `!` follows it. Tags are dropped,
/// block-level closing tags become line breaks and the common entities are
/// decoded.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    let mut text: String = String::with_capacity(markup.len());
    let mut tag: Option<String> = None;
    let mut chars = markup.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(name) = tag.as_mut() {
            if ch == '>' {
                if breaks_line(name) {
                    text.push('\n');
                }
                tag = None;
            } else {
                name.push(ch);
            }
        } else if ch == '<' && chars.peek().is_some_and(|next| opens_tag(*next)) {
            tag = Some(String::new());
        } else {
            text.push(ch);
        }
    }

    // An unterminated tag was literal text after all.
    if let Some(name) = tag {
        text.push('<');
        text.push_str(&name);
    }

    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Renders the ticket list as aligned columns.
#[must_use]
pub fn render_ticket_list(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return String::from("No tickets found.");
    }

    let mut lines: Vec<String> = vec![format!(
        "{:<8} {:<12} {:<10} {:<14} {}",
        "ID", "EMPLOYEE", "CATEGORY", "STATUS", "RAISED"
    )];
    lines.extend(tickets.iter().map(|ticket| {
        format!(
            "{:<8} {:<12} {:<10} {:<14} {}",
            ticket.id.as_str(),
            ticket.emp_id.as_str(),
            ticket.category.as_str(),
            ticket.status.as_str(),
            format_timestamp(&ticket.date_time)
        )
    }));
    lines.join("\n")
}

/// Renders the detail view of one ticket.
#[must_use]
pub fn render_ticket_view(view: &TicketView) -> String {
    let ticket: &Ticket = &view.ticket;
    let mut lines: Vec<String> = vec![
        format!("Ticket #{}", ticket.id),
        format!("Employee:    {}", ticket.emp_id),
        format!("Category:    {}", ticket.category),
        format!("Status:      {}", ticket.status),
        format!("Raised:      {}", format_timestamp(&ticket.date_time)),
    ];
    if let Some(updated) = &ticket.update_date_time {
        lines.push(format!("Last update: {}", format_timestamp(updated)));
    }
    lines.push(String::new());
    lines.push(plain_text(&ticket.remark));
    if let Some(update_remark) = &ticket.update_remark {
        lines.push(String::new());
        lines.push(format!("Latest remark: {}", plain_text(update_remark)));
    }
    if let Some(image) = &ticket.image {
        lines.push(format!("Attachment:  {image}"));
    }

    lines.push(String::new());
    if view.history.is_empty() {
        lines.push(String::from("No updates yet."));
    } else {
        lines.push(String::from("History:"));
        lines.extend(view.history.iter().map(|entry| {
            format!(
                "  {}  {:<14} by {}: {}",
                format_timestamp(&entry.date_time),
                entry.status.as_str(),
                entry.update_by,
                plain_text(&entry.remark)
            )
        }));
    }

    if let Some(notice) = &view.notice {
        lines.push(String::new());
        lines.push(notice.clone());
    }
    lines.join("\n")
}

/// Renders the transitions offered to the viewer.
#[must_use]
pub fn render_options(view: &TicketView) -> String {
    if view.allowed.is_empty() {
        return format!(
            "No status updates are available for ticket #{}.",
            view.ticket.id
        );
    }

    let mut lines: Vec<String> = vec![format!(
        "Status updates for ticket #{} ({}):",
        view.ticket.id, view.ticket.status
    )];
    lines.extend(view.allowed.iter().map(|status| {
        format!(
            "  {:<14} [{}] {}",
            status.as_str(),
            submit_label(status),
            remark_prompt(status, &view.ticket.status)
        )
    }));
    if view.capabilities.can_attach_image.is_allowed() {
        lines.push(String::from(
            "An image may be attached when forwarding to L2 (--image).",
        ));
    }
    lines.join("\n")
}
