//! XML sitemap generated from the route table.

use crate::routes::ROUTES;
use std::fmt::Write;

/// Renders a sitemap listing every route as an absolute URL under `base_url`.
///
/// Routes appear in table order. A trailing slash on `base_url` is ignored.
#[must_use]
pub fn render(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        "\n",
    ));
    for entry in ROUTES {
        // Writing to a String cannot fail.
        let _ = writeln!(xml, "  <url><loc>{}</loc></url>", escape(&format!("{base}{}", entry.path)));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_route_once() {
        let xml = render("https://harbor.test");
        for entry in ROUTES {
            let loc = format!("<loc>https://harbor.test{}</loc>", entry.path);
            assert_eq!(xml.matches(&loc).count(), 1, "{loc}");
        }
        assert_eq!(xml.matches("<url>").count(), ROUTES.len());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let xml = render("https://harbor.test/");
        assert!(xml.contains("<loc>https://harbor.test/</loc>"));
        assert!(xml.contains("<loc>https://harbor.test/case-studies</loc>"));
        assert!(!xml.contains("harbor.test//"));
    }

    #[test]
    fn document_is_wrapped_in_urlset() {
        let xml = render("http://localhost:3000");
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn escapes_markup_in_base_url() {
        let xml = render("https://harbor.test/?a=1&b=2");
        assert!(xml.contains("a=1&amp;b=2"));
    }
}
