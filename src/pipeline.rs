//! Asynchronous processor chains for feijoa.
//! A processor is a single-purpose asynchronous transformation over a
//! value; a pipeline threads a value through an ordered list of processors
//! with first-error short-circuiting.

use crate::error::Result;
use async_trait::async_trait;

/// Trait for a single asynchronous transformation step.
///
/// Processors are stateless from the pipeline's perspective: each
/// invocation receives the previous step's output exclusively and must not
/// retain or mutate state visible to sibling invocations.
#[async_trait]
pub trait Processor<T: Send + 'static>: Send + Sync {
    /// Transforms `input` into the next value.
    ///
    /// # Arguments
    /// * `input` - The value produced by the previous step
    /// * `args` - Extra engine-supplied arguments, identical for every step
    async fn process(&self, input: T, args: &[serde_json::Value]) -> Result<T>;
}

/// Applies exactly one processor to `input`.
///
/// The processor's error is propagated verbatim if present, otherwise its
/// result is yielded unchanged. Callers without extra arguments pass `&[]`.
pub async fn apply<T: Send + 'static>(
    input: T,
    processor: &dyn Processor<T>,
    args: &[serde_json::Value],
) -> Result<T> {
    processor.process(input, args).await
}

/// Threads `input` through `processors` in list order.
///
/// Step *i + 1* receives step *i*'s successful output as its input, with
/// the same `args` appended to every invocation. The chain is strictly
/// sequential: a step does not begin before the previous one has completed
/// successfully. The first error stops the chain and is surfaced unchanged;
/// later processors are never invoked. An empty list yields `input`.
pub async fn apply_all<T: Send + 'static>(
    input: T,
    processors: &[&dyn Processor<T>],
    args: &[serde_json::Value],
) -> Result<T> {
    let mut value = input;
    for processor in processors {
        value = apply(value, *processor, args).await?;
    }
    Ok(value)
}
