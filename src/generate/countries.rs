//! The country pool shared by every row of a run.

use super::entropy::Entropy;
use super::token::generate_token;
use crate::models::params::POOL_SIZE;
use crate::models::{MktestError, Result, Token};
use tracing::debug;

/// Universe of country tokens for one run.
///
/// Size is the number of generation calls; duplicate tokens are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPool {
    tokens: Vec<Token>,
}

impl CountryPool {
    /// Generate a fresh pool of 8 to 12 tokens.
    pub fn build<E: Entropy + ?Sized>(entropy: &mut E) -> Self {
        let size = entropy.between(POOL_SIZE.0, POOL_SIZE.1);
        let tokens: Vec<Token> = (0..size).map(|_| generate_token(entropy)).collect();
        debug!(size, "Built country pool");
        Self { tokens }
    }

    /// Wrap an existing list of tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(MktestError::EmptyPool);
        }
        Ok(Self { tokens })
    }

    /// Uniformly choose one token.
    pub fn pick<E: Entropy + ?Sized>(&self, entropy: &mut E) -> &Token {
        &self.tokens[entropy.index(self.tokens.len())]
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
