use super::company_name::normalize_company_name;

/// Build a web search query that pins a company down by name, ticker and topic.
///
/// The cleaned name is wrapped in double quotes only when it contains a space,
/// forcing an exact-phrase match for multi-word names. Single words and names
/// written without spaces (e.g. CJK) stay unquoted. Segments are joined with
/// single spaces and empty segments are kept as-is.
///
/// # Examples
///
/// ```
/// use screener_tickers::naming::generate_strict_search_query;
///
/// assert_eq!(
///     generate_strict_search_query("AAPL", "Apple Inc.", "price"),
///     "Apple AAPL price"
/// );
/// ```
pub fn generate_strict_search_query(ticker: &str, raw_name: &str, topic: &str) -> String {
    let clean_name = normalize_company_name(Some(raw_name));
    let name = if clean_name.contains(' ') {
        format!("\"{}\"", clean_name)
    } else {
        clean_name
    };
    format!("{} {} {}", name, ticker, topic)
}
