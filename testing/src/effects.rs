//! Driving effects without a store
//!
//! Logic units are tested by running the effects they return and inspecting
//! the follow-up actions, instead of spinning up a full store.

use console_store_core::effect::Effect;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;

/// Run one effect to completion and collect every action it produces.
///
/// Produced actions are not fed back into any reducer. `Delay` effects sleep
/// for their duration.
///
/// # Example
///
/// ```
/// use console_store_core::effect::Effect;
/// use console_store_testing::effects::run_effect;
///
/// # tokio_test::block_on(async {
/// let effect: Effect<u32> = Effect::Future(Box::pin(async { Some(7) }));
/// assert_eq!(run_effect(effect).await, vec![7]);
/// # });
/// ```
pub fn run_effect<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
where
    A: Send + 'static,
{
    async move {
        match effect {
            Effect::None => Vec::new(),
            Effect::Future(fut) => fut.await.into_iter().collect(),
            Effect::Delay { duration, action } => {
                tokio::time::sleep(duration).await;
                vec![*action]
            },
            Effect::Parallel(effects) => join_all(effects.into_iter().map(run_effect))
                .await
                .into_iter()
                .flatten()
                .collect(),
            Effect::Sequential(effects) => {
                let mut actions = Vec::new();
                for effect in effects {
                    actions.extend(run_effect(effect).await);
                }
                actions
            },
        }
    }
    .boxed()
}

/// Run a reducer's effect list, in order, and collect the produced actions.
pub async fn run_effects<A, I>(effects: I) -> Vec<A>
where
    A: Send + 'static,
    I: IntoIterator<Item = Effect<A>>,
{
    let mut actions = Vec::new();
    for effect in effects {
        actions.extend(run_effect(effect).await);
    }
    actions
}
