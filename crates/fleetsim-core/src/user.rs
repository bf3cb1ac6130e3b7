//! Users and their remaining task work

/// A user occupying a server slot until its task drains.
///
/// Users carry no identity beyond ownership: each one lives in exactly one
/// server's collection, and two users with equal remaining work are still
/// distinct entities, so there are no equality derives.
#[derive(Debug)]
pub struct User {
    /// Ticks of work left. A zero-length task dips to -1 during the
    /// decrement that precedes pruning; it never surfaces negative outside
    /// `Server::advance_one_tick`.
    pub remaining_ticks: i64,
}

impl User {
    /// Create a user with `ttask` ticks of work.
    pub fn new(ttask: u32) -> Self {
        User {
            remaining_ticks: i64::from(ttask),
        }
    }

    /// True once the task has no work left.
    pub fn is_done(&self) -> bool {
        self.remaining_ticks <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_carries_task_length() {
        let user = User::new(4);
        assert_eq!(user.remaining_ticks, 4);
        assert!(!user.is_done());
    }

    #[test]
    fn test_zero_length_task_is_done_immediately() {
        let user = User::new(0);
        assert!(user.is_done());
    }

    #[test]
    fn test_done_after_decrement_to_zero() {
        let mut user = User::new(1);
        user.remaining_ticks -= 1;
        assert!(user.is_done());
    }
}
