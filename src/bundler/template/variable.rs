//! Identifier derivation for package bindings.

use std::fmt::Write;

/// Separator between the encoded name and the encoded mode.
///
/// [`encode`] never emits two consecutive underscores, so the separator is
/// unambiguous and the mapping is injective.
const SEPARATOR: &str = "__";

/// Deterministic identifier binding package `name` under `mode`.
///
/// Distinct `(name, mode)` pairs always give distinct identifiers. Every
/// identifier contains `__`, so none can shadow `packages`, `module`,
/// `require`, a runtime binding such as `client`, or a reserved word.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_entrypoints::bundler::template::package_variable;
///
/// assert_eq!(
///     package_variable("@frontity/mars-theme", "default"),
///     "_afrontity_smars_dtheme__default"
/// );
/// ```
pub fn package_variable(name: &str, mode: &str) -> String {
    let mut out = String::with_capacity(name.len() + mode.len() + SEPARATOR.len());
    encode(name, &mut out);
    out.push_str(SEPARATOR);
    encode(mode, &mut out);

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Every `_` written here is immediately followed by a letter.
fn encode(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => out.push(c),
            '_' => out.push_str("_u"),
            '-' => out.push_str("_d"),
            '/' => out.push_str("_s"),
            '@' => out.push_str("_a"),
            '.' => out.push_str("_p"),
            other => {
                let _ = write!(out, "_x{:06x}", u32::from(other));
            }
        }
    }
}
