//! Named filters saved by a user.
//!
//! Only the filter text is persisted. It is compiled into an [`Expression`]
//! each time the filter is used, so a saved filter always reflects the
//! current grammar.

use fritter_store_rs::{PostIdSet, PostStore, TagStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FilterError, FilterResult};
use crate::expression::{is_word_char, parse, Expression, SyntaxError, SyntaxResult};

/// A named filter expression owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub id: Uuid,
    /// Identifier of the owning user.
    pub owner: String,
    pub name: String,
    /// Filter text, e.g. `&(@alice,#dog)`.
    pub expression: String,
}

impl SavedFilter {
    /// Creates a filter after validating its name and expression.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidName` if `name` is empty or not made of
    /// word characters, and `FilterError::Syntax` if `expression` does not
    /// parse.
    ///
    /// # Example
    ///
    /// ```
    /// use fritter_expr_rs::SavedFilter;
    ///
    /// let filter = SavedFilter::new("u1", "dogs", "#dog").unwrap();
    /// assert_eq!(filter.compile().unwrap().render(), "Tag(dog)");
    ///
    /// assert!(SavedFilter::new("u1", "my dogs", "#dog").is_err());
    /// ```
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        expression: impl Into<String>,
    ) -> FilterResult<Self> {
        let name = name.into();
        let expression = expression.into();
        validate_name(&name)?;
        validate_expression(&expression)?;

        Ok(Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            name,
            expression,
        })
    }

    /// Replaces the name and/or expression.
    ///
    /// Both new values are validated before either is applied, so a failed
    /// update leaves the filter unchanged.
    pub fn update(&mut self, name: Option<&str>, expression: Option<&str>) -> FilterResult<()> {
        if let Some(name) = name {
            validate_name(name)?;
        }
        if let Some(expression) = expression {
            validate_expression(expression)?;
        }

        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(expression) = expression {
            self.expression = expression.to_string();
        }
        Ok(())
    }

    /// Parses the stored expression text.
    pub fn compile(&self) -> SyntaxResult<Expression> {
        parse(&self.expression)
    }

    /// Compiles the filter and resolves it against `store`.
    pub async fn resolve<S>(&self, store: &S) -> FilterResult<PostIdSet>
    where
        S: PostStore + TagStore,
    {
        let expression = self.compile()?;
        Ok(expression.resolve(store).await?)
    }
}

fn validate_name(name: &str) -> FilterResult<()> {
    if name.is_empty() || !name.chars().all(is_word_char) {
        return Err(FilterError::invalid_name(name));
    }
    Ok(())
}

fn validate_expression(expression: &str) -> FilterResult<()> {
    if expression.is_empty() {
        return Err(SyntaxError::EmptyExpression.into());
    }
    parse(expression)?;
    Ok(())
}
