//! Abstract Syntax Tree (AST) for filter expressions.

use std::fmt;

/// A parsed filter expression.
///
/// Trees are built bottom-up by the parser and never mutated afterwards.
/// Evaluation lives in the evaluator module; see [`Expression::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Posts authored by the user with this username.
    Author(String),

    /// Posts carrying the tag with this label.
    Tag(String),

    /// Every known post except those matching the inner expression.
    Not(Box<Expression>),

    /// Posts matching both expressions.
    And(Box<Expression>, Box<Expression>),

    /// Posts matching either expression.
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Creates an author leaf.
    pub fn author(username: impl Into<String>) -> Self {
        Expression::Author(username.into())
    }

    /// Creates a tag leaf.
    pub fn tag(label: impl Into<String>) -> Self {
        Expression::Tag(label.into())
    }

    /// Creates a NOT expression.
    ///
    /// # Example
    ///
    /// ```
    /// use fritter_expr_rs::expression::Expression;
    ///
    /// let expr = Expression::negate(Expression::tag("dog"));
    /// assert!(matches!(expr, Expression::Not(_)));
    /// ```
    pub fn negate(sub: Expression) -> Self {
        Expression::Not(Box::new(sub))
    }

    /// Creates an AND expression.
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    /// Creates an OR expression.
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// Builds an expression matching posts by any of the given authors.
    ///
    /// Adjacent authors are paired into `Or` nodes level by level, so the
    /// tree stays about log2(n) deep however many authors there are. Returns
    /// `None` when `usernames` is empty, since no expression matches nothing.
    ///
    /// ```
    /// use fritter_expr_rs::expression::Expression;
    ///
    /// let expr = Expression::any_author(["alice", "bob", "carol"]).unwrap();
    /// assert_eq!(expr.render(), "Or(Or(Author(alice),Author(bob)),Author(carol))");
    /// assert!(Expression::any_author(Vec::<String>::new()).is_none());
    /// ```
    pub fn any_author<I>(usernames: I) -> Option<Expression>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut level: Vec<Expression> = usernames.into_iter().map(Expression::author).collect();

        while level.len() > 1 {
            let mut paired = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();
            while let Some(left) = nodes.next() {
                paired.push(match nodes.next() {
                    Some(right) => Expression::or(left, right),
                    None => left,
                });
            }
            level = paired;
        }

        level.pop()
    }

    /// Returns the variant name, as used by [`render`](Self::render).
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Author(_) => "Author",
            Expression::Tag(_) => "Tag",
            Expression::Not(_) => "Not",
            Expression::And(_, _) => "And",
            Expression::Or(_, _) => "Or",
        }
    }

    /// Returns the canonical debug form, e.g. `And(Author(alice),Tag(dog))`.
    ///
    /// This form is for logs and diagnostics; it is not filter syntax. Use
    /// [`to_filter_string`](Self::to_filter_string) for text that parses back.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns this expression written in filter syntax.
    ///
    /// ```
    /// use fritter_expr_rs::expression::{parse, Expression};
    ///
    /// let expr = Expression::and(Expression::author("alice"), Expression::tag("dog"));
    /// assert_eq!(expr.to_filter_string(), "&(@alice,#dog)");
    /// assert_eq!(parse(&expr.to_filter_string()).unwrap(), expr);
    /// ```
    pub fn to_filter_string(&self) -> String {
        match self {
            Expression::Author(username) => format!("@{username}"),
            Expression::Tag(label) => format!("#{label}"),
            Expression::Not(sub) => format!("!({})", sub.to_filter_string()),
            Expression::And(left, right) => format!(
                "&({},{})",
                left.to_filter_string(),
                right.to_filter_string()
            ),
            Expression::Or(left, right) => format!(
                "|({},{})",
                left.to_filter_string(),
                right.to_filter_string()
            ),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Author(username) => write!(f, "Author({username})"),
            Expression::Tag(label) => write!(f, "Tag({label})"),
            Expression::Not(sub) => write!(f, "Not({sub})"),
            Expression::And(left, right) => write!(f, "And({left},{right})"),
            Expression::Or(left, right) => write!(f, "Or({left},{right})"),
        }
    }
}
