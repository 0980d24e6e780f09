//! Reconcile result shorthands

use kube::runtime::controller::Action;
use std::time::Duration;

/// Wait for the next change event on the object
pub fn do_not_requeue<E>() -> Result<Action, E> {
    Ok(Action::await_change())
}

/// Reconcile again after `duration`, regardless of events
pub fn requeue_after<E>(duration: Duration) -> Result<Action, E> {
    Ok(Action::requeue(duration))
}

/// Hand the error to the controller runtime, which applies its error policy
pub fn requeue_on_err<E>(err: E) -> Result<Action, E> {
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KubeError;

    #[test]
    fn test_do_not_requeue() {
        let action = do_not_requeue::<KubeError>().unwrap();
        assert_eq!(action, Action::await_change());
    }

    #[test]
    fn test_requeue_after() {
        let action = requeue_after::<KubeError>(Duration::from_secs(1)).unwrap();
        assert_eq!(action, Action::requeue(Duration::from_secs(1)));
    }

    #[test]
    fn test_requeue_on_err() {
        let err = KubeError::InvalidData {
            key: "k".to_string(),
            kind: "secret",
            name: "n".to_string(),
            message: "bad".to_string(),
        };
        assert!(requeue_on_err(err).is_err());
    }
}
