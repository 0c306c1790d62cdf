//! Message formatting for the shop owner's notification

use crate::domain::entities::{Booking, DisplayZone, Notification};

/// Escape Telegram legacy-Markdown metacharacters
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn render(shop_name: &str, booking: &Booking, zone: &DisplayZone, markdown: bool) -> String {
    let esc = |s: &str| if markdown { escape_markdown(s) } else { s.to_string() };
    let (title, id) = if markdown {
        ("*NEW BOOKING*".to_string(), format!("`{}`", booking.id))
    } else {
        ("NEW BOOKING".to_string(), booking.id.to_string())
    };

    let phone = booking
        .phone
        .as_deref()
        .map(|p| esc(p))
        .unwrap_or_else(|| "not provided".to_string());

    let mut msg = format!(
        "🚲 {} – {}\n\n🆔 ID: {}\n👤 Name: {}\n📞 Phone: {}\n🔧 Problem: {}\n",
        title,
        esc(shop_name),
        id,
        esc(&booking.name),
        phone,
        esc(&booking.refined_problem),
    );

    if booking.was_refined() {
        msg.push_str(&format!("📝 Customer wrote: {}\n", esc(&booking.problem)));
    }

    msg.push_str(&format!("⏰ Time: {}", esc(&zone.format(booking.timestamp))));
    msg
}

/// Build the notification sent to the shop owner
pub fn booking_notification(shop_name: &str, booking: &Booking, zone: &DisplayZone) -> Notification {
    Notification::new(
        render(shop_name, booking, zone, true),
        render(shop_name, booking, zone, false),
    )
}
