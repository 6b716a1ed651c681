//! Shared HTML components for the medicine pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages. Item text arrives already sanitized and is inserted with
//! `PreEscaped` so it is escaped exactly once.

use maud::{Markup, PreEscaped, html};
use medboard_core::{DisplayItem, PriceSummary, sanitize};

/// Inline CSS for the medicine pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f7f9f8;--fg:#14211c;--fg2:#4d5c56;--fg3:#8a9791;--accent:#1f8a5b;--surface:#fff;--border:rgba(31,138,91,.18);--error:#b3261e;--error-bg:#fdecea}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.page-title{font-size:1.75rem;font-weight:700;letter-spacing:-.02em;margin-bottom:1.25rem}

#data-container{display:flex;flex-direction:column;gap:.75rem}
.medicine-item{padding:1rem 1.25rem;border:1px solid var(--border);border-radius:10px;background:var(--surface)}
.medicine-item h3{font-size:1.15rem;font-weight:600;margin-bottom:.25rem}
.medicine-item p{color:var(--fg2)}
.medicine-item .price{font-weight:500;color:var(--fg)}

.error-message{padding:1rem 1.25rem;border-radius:10px;background:var(--error-bg);color:var(--error);font-weight:500}
.empty-message{color:var(--fg3);font-style:italic}

.summary{margin-top:1.25rem;padding-top:1rem;border-top:1px solid var(--border);font-size:.9rem;color:var(--fg3)}

.footer{text-align:center;margin-top:1rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:680px}

@media(prefers-color-scheme:dark){
:root{--bg:#0c1210;--fg:#e3ebe7;--fg2:#a5b3ad;--fg3:#66746e;--accent:#4cc38a;--surface:#121a17;--border:rgba(76,195,138,.2);--error:#f2b8b5;--error-bg:#3a1714}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#f7f9f8;color:#14211c;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#1f8a5b}
@media(prefers-color-scheme:dark){
body{background:#0c1210;color:#e3ebe7}
.error-page p{color:#aaa}
.error-page a{color:#4cc38a}
}
"#;

/// Content-Security-Policy header value.
///
/// Pages are fully static: inline styles only, no scripts, no frames.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; form-action 'none'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>` and body content.
pub fn page_shell(title: &str, description: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    h1 class="page-title" { (title) }
                    (body_content)
                }
                footer class="footer" {
                    "Prices and descriptions are provided by the upstream catalogue."
                }
            }
        }
    }
}

/// One item block: name heading, price, and description.
pub fn item_block(item: &DisplayItem) -> Markup {
    html! {
        div class="medicine-item" {
            h3 { (PreEscaped(sanitize(&item.name))) }
            p class="price" { "Price: " (PreEscaped(sanitize(&item.price))) }
            p { "Description: " (PreEscaped(sanitize(&item.description))) }
        }
    }
}

/// The error block shown in place of list content.
pub fn error_block(message: &str) -> Markup {
    html! {
        div class="error-message" role="alert" {
            p { (PreEscaped(sanitize(message))) }
        }
    }
}

/// Summary line shown below the list.
pub fn summary_line(summary: &PriceSummary) -> Markup {
    html! {
        p class="summary" { (summary.describe()) }
    }
}
