use crate::primitives::{one_char, scan_while};
use crate::traits::Parser;

/// Parses text enclosed in `quote`, where `\<quote>` stands for a literal quote.
///
/// Scanning continues past any window ending in `\<quote>` and stops before
/// the first bare `quote`. The returned value has the escapes removed; no
/// other escape sequences are interpreted.
pub fn quoted_text<'input>(quote: char) -> impl Parser<'input, Output = String> + Clone {
    let escaped = format!("\\{}", quote);
    let unescaped = quote.to_string();

    let scan_escaped = escaped.clone();
    let content = scan_while(move |window: &str| {
        window.ends_with(scan_escaped.as_str()) || !window.ends_with(quote)
    });

    one_char(quote)
        .then_skip_left(content)
        .then_skip_right(one_char(quote))
        .map(move |raw: &str| raw.replace(escaped.as_str(), unescaped.as_str()))
}

/// Text in either single or double quotes.
pub fn quoted_string<'input>() -> impl Parser<'input, Output = String> + Clone {
    quoted_text('\'').or(quoted_text('"'))
}
