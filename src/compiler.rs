//! Token compilation for feijoa.
//! Compiles an ordered token sequence through each token's asynchronous
//! compile capability and concatenates the fragments into one output
//! string, preserving input order.

use crate::error::Result;
use async_trait::async_trait;
use futures::future::try_join_all;

/// Trait for a unit of parsed template content.
///
/// Tokens are produced by an external parser and are opaque to this core;
/// their only contract here is producing a compiled fragment from a shared,
/// read-only compiler context `C`.
#[async_trait]
pub trait Token<C: Sync>: Send + Sync {
    /// Compiles this token into an output fragment.
    async fn compile(&self, context: &C) -> Result<String>;
}

/// Compiles every token against the shared `context`.
///
/// The output sequence is in the same order as `tokens` regardless of the
/// order in which individual compile operations complete: each result is
/// collected into its origin index's slot, never appended in completion
/// order. Compile operations are interleaved cooperatively on the current
/// task; there is no shared mutable state between them. The first error
/// stops the pass, remaining compiles are dropped and partial results are
/// discarded.
///
/// # Arguments
/// * `tokens` - Ordered token sequence from the parser
/// * `context` - Compiler context, read-shared across all compiles
///
/// # Returns
/// * `Result<Vec<String>>` - Compiled fragments in input order
pub async fn compile_token_array<C: Sync>(
    tokens: &[Box<dyn Token<C>>],
    context: &C,
) -> Result<Vec<String>> {
    try_join_all(tokens.iter().map(|token| token.compile(context))).await
}

/// Compiles `tokens` and glues the fragments into one string.
///
/// Fragments are concatenated with no separator; an empty token sequence
/// yields an empty string. Errors from compilation propagate unchanged.
pub async fn compile_tokens<C: Sync>(
    tokens: &[Box<dyn Token<C>>],
    context: &C,
) -> Result<String> {
    let compiled = compile_token_array(tokens, context).await?;
    Ok(compiled.concat())
}
