//! A priority queue kept as an always-sorted `Vec`.
//!
//! [`OrderedQueue`] ranks its elements with an injected [`Compare`] strategy
//! and keeps them sorted after every mutation, so the top is always at
//! position 0 and traversal yields priority order.
//!
//! ```
//! use sortq::{Greater, OrderedQueue};
//!
//! let mut queue = OrderedQueue::<i32, Greater>::new();
//! queue.emplace_all([10, 5, 20]);
//! assert_eq!(queue.top(), Some(&20));
//! assert_eq!(queue.pop_back(), Some(20));
//! assert_eq!(queue.as_slice(), &[10, 5]);
//! ```

pub mod compare;
pub mod error;
pub mod queue;

pub use crate::compare::{ByKey, Compare, Greater, Less};
pub use crate::error::QueueError;
pub use crate::queue::OrderedQueue;
