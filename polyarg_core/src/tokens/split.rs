//! Quote-aware conversion between a single command line string and an argument vector.
//!
//! Double quotes group whitespace into one token and are stripped.
//! Backslashes are literal unless they precede a double quote: `2n` backslashes then `"` yield `n` backslashes and a quote toggle, `2n+1` yield `n` backslashes and a literal `"`.

/// Split `line` into arguments.
///
/// ### Example
/// ```
/// # use polyarg_core as polyarg;
/// use polyarg::split_command_line;
///
/// assert_eq!(
///     split_command_line(r#"remote add --name "my origin" """#),
///     vec!["remote", "add", "--name", "my origin", ""],
/// );
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut backslashes = 1;

                while chars.peek() == Some(&'\\') {
                    chars.next();
                    backslashes += 1;
                }

                in_token = true;

                if chars.peek() == Some(&'"') {
                    current.extend(std::iter::repeat('\\').take(backslashes / 2));

                    if backslashes % 2 == 1 {
                        chars.next();
                        current.push('"');
                    }
                } else {
                    current.extend(std::iter::repeat('\\').take(backslashes));
                }
            }
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Join `args` into a single line, quoting where necessary so that [`split_command_line`] recovers `args` precisely.
pub fn join_command_line<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| quote(arg.as_ref()))
        .collect::<Vec<String>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '"') {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    let mut backslashes = 0;
    quoted.push('"');

    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            c => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }

    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("a b  c", vec!["a", "b", "c"])]
    #[case("\"a b\" c", vec!["a b", "c"])]
    #[case("a\"b c\"d", vec!["ab cd"])]
    #[case("\"\"", vec![""])]
    #[case("a \"\" b", vec!["a", "", "b"])]
    #[case(r#"say \"hi\""#, vec!["say", "\"hi\""])]
    #[case(r#"C:\dir\file"#, vec![r#"C:\dir\file"#])]
    #[case(r#""C:\dir\\" x"#, vec![r#"C:\dir\"#, "x"])]
    #[case("--name=\"a b\"", vec!["--name=a b"])]
    fn split(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_command_line(line), expected);
    }

    #[rstest]
    #[case(vec!["a", "b"], "a b")]
    #[case(vec!["a b"], "\"a b\"")]
    #[case(vec![""], "\"\"")]
    #[case(vec![r#"C:\dir"#], r#"C:\dir"#)]
    #[case(vec!["say \"hi\""], r#""say \"hi\"""#)]
    fn join(#[case] args: Vec<&str>, #[case] expected: &str) {
        assert_eq!(join_command_line(&args), expected);
    }

    #[test]
    fn join_then_split() {
        const ALPHABET: &[char] = &['a', 'Z', '-', '=', ' ', '\t', '"', '\\', '/', 'é'];

        for _ in 0..500 {
            // Setup
            let args: Vec<String> = (0..thread_rng().gen_range(0..6))
                .map(|_| {
                    (0..thread_rng().gen_range(0..8))
                        .map(|_| ALPHABET[thread_rng().gen_range(0..ALPHABET.len())])
                        .collect()
                })
                .collect();

            // Execute
            let line = join_command_line(&args);

            // Verify
            assert_eq!(split_command_line(&line), args, "line: {line}");
        }
    }
}
