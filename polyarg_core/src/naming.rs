//! Conversions between kebab-case, PascalCase and camelCase identifiers.
//!
//! Letters and digits are identifier characters; everything else is a word boundary.
//! Every conversion maps the empty string to the empty string and is idempotent.

/// Convert `input` into kebab-case.
///
/// Runs of non-identifier characters collapse into a single `-`, and never lead or trail the output.
/// When `treat_upper_as_separator` is set, an uppercase letter that follows a non-uppercase character also starts a new word.
/// When `lowercase` is set, letters are lowercased.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("OptionName", true, true), "option-name");
/// assert_eq!(to_kebab_case("option__name", false, true), "option-name");
/// assert_eq!(to_kebab_case("OptionName", false, false), "OptionName");
/// ```
pub fn to_kebab_case(input: &str, treat_upper_as_separator: bool, lowercase: bool) -> String {
    let mut output = String::with_capacity(input.len() + 4);
    let mut pending_separator = false;
    let mut previous_upper = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            pending_separator = true;
            continue;
        }

        let upper = c.is_uppercase();

        if !output.is_empty()
            && (pending_separator || (upper && treat_upper_as_separator && !previous_upper))
        {
            output.push('-');
        }

        pending_separator = false;
        previous_upper = upper;

        if lowercase {
            // Lowercasing may emit combining marks (ex: `İ`), which are not identifier characters.
            output.extend(c.to_lowercase().filter(|l| l.is_alphanumeric()));
        } else {
            output.push(c);
        }
    }

    output
}

/// Convert `input` into PascalCase.
///
/// The first identifier character after every boundary is uppercased; other characters keep their case.
/// Leading digits are dropped, interior digits are kept.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("option-name"), "OptionName");
/// assert_eq!(to_pascal_case("2nd-value"), "NdValue");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut capitalize = true;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            capitalize = true;
            continue;
        }

        if output.is_empty() && c.is_numeric() {
            continue;
        }

        if capitalize {
            output.extend(c.to_uppercase().filter(|u| u.is_alphanumeric()));
        } else {
            output.push(c);
        }

        capitalize = false;
    }

    output
}

/// Convert `input` into camelCase (PascalCase with a lowercase first letter).
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();

    match chars.next() {
        Some(first) => first
            .to_lowercase()
            .filter(|l| l.is_alphanumeric())
            .chain(chars)
            .collect(),
        None => String::default(),
    }
}

/// Whether `input` is already in (lowercase, upper-separated) kebab-case.
pub fn is_kebab_case(input: &str) -> bool {
    to_kebab_case(input, true, true) == input
}

/// Whether `input` is already in PascalCase.
pub fn is_pascal_case(input: &str) -> bool {
    to_pascal_case(input) == input
}
