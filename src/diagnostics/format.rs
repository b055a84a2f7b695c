/// Fills the `{}` holes of a message template in order. Holes without a
/// value stay as they are, and values are never scanned for holes.
///
/// # Example
/// ```
/// use elm_cst::diagnostics::format_message;
/// let msg = format_message("Expected {}, got {}.", &["`=`", "`{}`"]);
/// assert_eq!(msg, "Expected `=`, got `{}`.");
/// ```
pub fn format_message(template: &str, values: &[&str]) -> String {
    let mut pieces = template.split("{}");
    let mut out = String::with_capacity(template.len());
    out.push_str(pieces.next().unwrap_or_default());

    let mut values = values.iter();
    for piece in pieces {
        out.push_str(values.next().copied().unwrap_or("{}"));
        out.push_str(piece);
    }
    out
}
