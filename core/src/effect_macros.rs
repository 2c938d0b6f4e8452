//! Declarative macros for effect construction

/// Create an `Effect::Future` from an async block
///
/// The block is `async move` and evaluates to the optional follow-up action.
///
/// # Example
///
/// ```rust,ignore
/// use console_store_core::async_effect;
///
/// async_effect! {
///     match api.me().await {
///         Ok(user) => Some(SessionAction::GetSessionSuccess(user)),
///         Err(_) => Some(SessionAction::GetSessionFailure),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

#[cfg(test)]
#[allow(clippy::panic)] // Test code can panic
mod tests {
    use crate::effect::Effect;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Fetched { count: u64 },
    }

    #[tokio::test]
    async fn test_async_effect_macro() {
        let total = 3;
        let effect = async_effect! {
            Some(TestAction::Fetched { count: total })
        };

        let Effect::Future(fut) = effect else {
            panic!("async_effect! must build a future effect");
        };
        assert_eq!(fut.await, Some(TestAction::Fetched { count: 3 }));
    }
}
