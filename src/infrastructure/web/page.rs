use crate::domain::entities::BookingRequest;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:34rem;margin:2rem auto;padding:0 1rem;color:#222}\
h1{font-size:1.5rem}\
label{display:block;margin-top:1rem;font-weight:600}\
input,textarea{width:100%;box-sizing:border-box;padding:.5rem;font:inherit}\
button{margin-top:1.25rem;padding:.6rem 1.2rem;font:inherit;cursor:pointer}\
.result{margin-top:1.5rem;padding:1rem;border-radius:.4rem;background:#f3f3f3;white-space:pre-wrap}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the booking page, with the reply region when a submission ran
pub fn render_page(shop_name: &str, form: &BookingRequest, result: Option<&str>) -> String {
    let shop = escape_html(shop_name);
    let result = result
        .map(|text| format!("<div class=\"result\">{}</div>", escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{shop} – Service Booking</title>
<style>{style}</style>
</head>
<body>
<h1>🚲 {shop} – Service Booking</h1>
<form method="post" action="/">
<label for="name">Your Name</label>
<input id="name" name="name" value="{name}" required>
<label for="phone">Phone (optional)</label>
<input id="phone" name="phone" type="tel" value="{phone}">
<label for="problem">Cycle Problem</label>
<textarea id="problem" name="problem" rows="3" required>{problem}</textarea>
<button type="submit">Book Service</button>
</form>
{result}
</body>
</html>
"#,
        shop = shop,
        style = STYLE,
        name = escape_html(&form.name),
        phone = escape_html(&form.phone),
        problem = escape_html(&form.problem),
        result = result,
    )
}
