use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A bounded fixed-delay retry budget. Kept as a value so each caller can
/// declare its own budget instead of inlining loop constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

#[derive(Debug, Error)]
#[error("gave up after {attempts} attempts: {last_error}")]
pub struct RetryExhausted {
    pub attempts: u32,
    pub last_error: DbErr,
}

/// Runs `attempt` until it succeeds or the policy's budget is spent,
/// sleeping `policy.delay` between attempts. The wrapped operation must be
/// safe to repeat.
pub async fn run<T, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, RetryExhausted>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbErr>>,
{
    let mut last_error = None;

    for n in 1..=policy.max_attempts {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::warn!("attempt {n}/{} failed: {err}", policy.max_attempts);
                last_error = Some(err);
                if n < policy.max_attempts {
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }

    Err(RetryExhausted {
        attempts: policy.max_attempts,
        last_error: last_error.unwrap_or_else(|| DbErr::Custom("no attempts were made".into())),
    })
}
