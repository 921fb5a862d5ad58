//! Shared HTML layout, style constants and formatting helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

pub const LINK_STYLE: &str = "text-sky-700 dark:text-sky-400 hover:underline";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full py-2.5 rounded-md font-medium text-white \
    bg-sky-600 hover:bg-sky-700 dark:bg-sky-500 dark:hover:bg-sky-600";

pub const BUTTON_DELETE_STYLE: &str = "w-full py-2.5 rounded-md font-medium text-white \
    bg-rose-600 hover:bg-rose-700 dark:bg-rose-500 dark:hover:bg-rose-600";

pub const FORM_CONTAINER_STYLE: &str = "mx-auto mt-8 w-full max-w-md px-6 \
    text-slate-900 dark:text-slate-100";
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full px-3 py-2 rounded-md text-sm \
    bg-white dark:bg-slate-800 border border-slate-300 dark:border-slate-600 \
    focus:outline-none focus:ring-2 focus:ring-sky-500";
pub const FORM_ERROR_STYLE: &str = "text-sm text-rose-600 dark:text-rose-400";

pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase text-slate-600 bg-slate-100 \
    dark:bg-slate-800 dark:text-slate-300";
pub const TABLE_ROW_STYLE: &str = "border-b border-slate-200 dark:border-slate-700";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const PAGE_CONTAINER_STYLE: &str = "mx-auto mt-8 w-full max-w-4xl px-6 \
    text-slate-900 dark:text-slate-100";

/// Puts a dollar sign inside the left edge of inputs wrapped in `.dollar-input`.
pub const DOLLAR_INPUT_STYLE: &str = r#"
    .dollar-input { position: relative; }
    .dollar-input input { padding-left: 1.5rem; }
    .dollar-input::before {
        content: '$';
        position: absolute;
        left: 0.65rem;
        top: 50%;
        transform: translateY(-50%);
        pointer-events: none;
    }
"#;

/// The page skeleton shared by every page.
///
/// `styles` are extra CSS rules for this page only. Failed HTMX requests
/// swap their alert into `#alert-container`.
pub fn base(title: &str, styles: &[&str], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Expense Tracker" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js" {}

                @for style in styles {
                    style { (PreEscaped(*style)) }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-slate-50 dark:bg-slate-900"
            {
                (content)

                div
                    id="alert-container"
                    class="fixed bottom-4 left-1/2 -translate-x-1/2 w-full max-w-md px-4 z-50"
                {}
            }
        }
    }
}

/// Format `number` as dollars with two decimal places, e.g. "$8.25" or "-$3.25".
pub fn format_currency(number: f64) -> String {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    if number == 0.0 {
        // numfmt renders zero as a bare "0".
        return "$0.00".to_owned();
    }

    let formatted = FORMATTER
        .get_or_init(|| {
            Formatter::currency("$")
                .ok()
                .map(|formatter| formatter.precision(Precision::Decimals(2)))
        })
        .as_ref()
        .map(|formatter| pad_cents(formatter.fmt_string(number.abs())))
        // Large amounts can come out in scientific notation or rounded.
        .filter(|formatted| {
            is_plain_dollars(formatted)
                && parse_dollars(formatted) == Some(rounded_cents(number.abs()))
        })
        .unwrap_or_else(|| format!("${:.2}", number.abs()));

    if number < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// numfmt drops trailing zeros, e.g. "$12.30" comes out as "$12.3".
fn pad_cents(formatted: String) -> String {
    match formatted.split_once('.') {
        Some((_, cents)) if cents.len() >= 2 => formatted,
        Some(_) => format!("{formatted}0"),
        None => format!("{formatted}.00"),
    }
}

/// Whether `formatted` looks like "$1,234.50" and not e.g. "$1.2e15" or "$1.5K".
fn is_plain_dollars(formatted: &str) -> bool {
    formatted
        .strip_prefix('$')
        .and_then(|rest| rest.split_once('.'))
        .is_some_and(|(dollars, cents)| {
            !dollars.is_empty()
                && dollars.chars().all(|c| c.is_ascii_digit() || c == ',')
                && cents.len() == 2
                && cents.chars().all(|c| c.is_ascii_digit())
        })
}

fn parse_dollars(formatted: &str) -> Option<f64> {
    formatted
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .map(rounded_cents)
}

fn rounded_cents(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}
