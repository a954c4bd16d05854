use std::fmt;

/// The parsed form of one output expression.
///
/// The surface grammar is a handful of overlapping prefix forms, tried in
/// priority order. Parsing happens once, up front, so evaluation never
/// re-scans strings: each conditional branch is itself a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// `$KEY?(YES):(NO)` — resolve YES when KEY is present, NO otherwise.
    Ternary {
        key: String,
        yes: Box<Expression>,
        no: Box<Expression>,
    },
    /// `$KEY?(YES):` — resolve YES when KEY is present, nothing otherwise.
    TernaryYes { key: String, yes: Box<Expression> },
    /// `$KEY?:(NO)` — resolve NO when KEY is absent, nothing otherwise.
    TernaryNo { key: String, no: Box<Expression> },
    /// `$KEY?` — the submitted value of KEY when present.
    Presence { key: String },
    /// `$KEY` — plain reference to the submitted value of KEY.
    Reference { key: String },
    /// `@TEXT` — the literal text after the `@`.
    Constant(String),
    /// `<TEXT>` — the literal text inside the angle brackets.
    Enclosed(String),
    /// Matched no known form. Resolves to nothing.
    Unrecognized,
}

impl Expression {
    /// Parses an expression string into its tagged form.
    ///
    /// Never fails: anything outside the grammar becomes `Unrecognized`,
    /// which later resolves to nothing. Recipes are author-controlled
    /// content, so tolerance is preferred over strictness here.
    pub fn parse(input: &str) -> Expression {
        if let Some(rest) = input.strip_prefix('$') {
            return Self::parse_reference(rest);
        }
        if let Some(rest) = input.strip_prefix('@') {
            return Expression::Constant(rest.to_string());
        }
        if let Some(inner) = input.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            return Expression::Enclosed(inner.to_string());
        }
        Expression::Unrecognized
    }

    /// Parses the `$`-prefixed forms. `rest` is the input without the `$`.
    fn parse_reference(rest: &str) -> Expression {
        let Some(question) = rest.find('?') else {
            return Expression::Reference {
                key: rest.to_string(),
            };
        };
        let key = rest[..question].to_string();
        let tail = &rest[question + 1..];

        // `$KEY?`
        if tail.is_empty() {
            return Expression::Presence { key };
        }

        // `$KEY?:(NO)` — no "yes" branch at all.
        if let Some(no_part) = tail.strip_prefix(':') {
            if let Some(no) = strip_parenthesized(no_part) {
                return Expression::TernaryNo {
                    key,
                    no: Box::new(Self::parse(no)),
                };
            }
            return Expression::Unrecognized;
        }

        // `$KEY?(YES):` and `$KEY?(YES):(NO)`
        if let Some((yes, after)) = take_parenthesized(tail) {
            if let Some(no_part) = after.strip_prefix(':') {
                if no_part.is_empty() {
                    return Expression::TernaryYes {
                        key,
                        yes: Box::new(Self::parse(yes)),
                    };
                }
                if let Some(no) = strip_parenthesized(no_part) {
                    return Expression::Ternary {
                        key,
                        yes: Box::new(Self::parse(yes)),
                        no: Box::new(Self::parse(no)),
                    };
                }
            }
        }
        Expression::Unrecognized
    }
}

/// Scans a balanced `(...)` group at the start of `input`.
/// Returns the inner text and the remainder after the closing parenthesis.
fn take_parenthesized(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix('(')?;
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&rest[..i], &rest[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Like `take_parenthesized`, but the group must span the whole input.
fn strip_parenthesized(input: &str) -> Option<&str> {
    match take_parenthesized(input)? {
        (inner, "") => Some(inner),
        _ => None,
    }
}

impl fmt::Display for Expression {
    /// Writes the expression back in its surface form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Ternary { key, yes, no } => write!(f, "${}?({}):({})", key, yes, no),
            Expression::TernaryYes { key, yes } => write!(f, "${}?({}):", key, yes),
            Expression::TernaryNo { key, no } => write!(f, "${}?:({})", key, no),
            Expression::Presence { key } => write!(f, "${}?", key),
            Expression::Reference { key } => write!(f, "${}", key),
            Expression::Constant(text) => write!(f, "@{}", text),
            Expression::Enclosed(text) => write!(f, "<{}>", text),
            Expression::Unrecognized => Ok(()),
        }
    }
}
