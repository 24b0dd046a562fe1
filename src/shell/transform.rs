//! The text transform behind the trigger button

/// Upper-case `input` using the Unicode default case mapping.
///
/// The mapping does not depend on the process locale. Characters whose upper
/// case form spans several code points expand (`ß` becomes `SS`), and
/// characters without case pass through unchanged.
pub fn scream(input: &str) -> String {
    input.to_uppercase()
}
