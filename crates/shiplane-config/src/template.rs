/// Substitute `value` into the first `%@` slot of `template`.
///
/// Templates without a slot are returned unchanged.
#[must_use]
pub fn render_template(template: &str, value: &str) -> String {
    template.replacen("%@", value, 1)
}
