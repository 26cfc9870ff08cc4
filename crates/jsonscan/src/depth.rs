//! Nesting tracker: one bit per open container for the first [`FAST_DEPTH`]
//! levels, an overflow stack beyond that.
//!
//! The overflow stack is provisioned when the depth ceiling is configured,
//! never on a push, so the common case (nesting of 64 or less) performs no
//! allocation at all.

use alloc::vec::Vec;
use core::fmt;

use crate::error::{ErrorKind, SyntaxError};

/// Number of nesting levels tracked in the bitmask.
pub const FAST_DEPTH: usize = 64;

/// The kind of an open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Container {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
}

impl Container {
    fn closer(self) -> u8 {
        match self {
            Container::Object => b'}',
            Container::Array => b']',
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Container::Object => "object",
            Container::Array => "array",
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ContainerStack {
    depth: usize,
    /// Bit 0 is the innermost container within the first 64 levels; set for
    /// objects.
    mask: u64,
    /// Levels 65 and deeper, `true` for objects.
    overflow: Vec<bool>,
}

impl ContainerStack {
    pub(crate) fn new(max_depth: usize) -> Self {
        let mut stack = Self::default();
        stack.provision(max_depth);
        stack
    }

    /// Reserves the overflow stack for `max_depth`, once.
    pub(crate) fn provision(&mut self, max_depth: usize) {
        let needed = max_depth.saturating_sub(FAST_DEPTH);
        if needed > self.overflow.capacity() {
            log::debug!("provisioning overflow stack for {needed} levels beyond {FAST_DEPTH}");
            self.overflow.reserve_exact(needed - self.overflow.len());
        }
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// The innermost open container, if any.
    #[inline]
    pub(crate) fn innermost(&self) -> Option<Container> {
        let is_object = match self.depth {
            0 => return None,
            d if d <= FAST_DEPTH => self.mask & 1 == 1,
            _ => *self.overflow.last()?,
        };
        Some(if is_object { Container::Object } else { Container::Array })
    }

    #[inline]
    pub(crate) fn in_object(&self) -> bool {
        self.innermost() == Some(Container::Object)
    }

    /// Opens a container, failing when it would exceed `max_depth`.
    #[inline]
    pub(crate) fn push(&mut self, container: Container, max_depth: usize) -> Result<(), ErrorKind> {
        if self.depth >= max_depth {
            return Err(ErrorKind::DepthExceeded { max_depth });
        }
        self.depth += 1;
        let is_object = container == Container::Object;
        if self.depth <= FAST_DEPTH {
            self.mask = (self.mask << 1) | u64::from(is_object);
        } else {
            self.overflow.push(is_object);
        }
        Ok(())
    }

    /// Closes the innermost container, which must be of kind `container`.
    #[inline]
    pub(crate) fn pop(&mut self, container: Container) -> Result<(), ErrorKind> {
        let Some(open) = self.innermost() else {
            return Err(SyntaxError::Unbalanced(container.closer()).into());
        };
        if open != container {
            return Err(SyntaxError::MismatchedCloser {
                found: container.closer(),
                open,
            }
            .into());
        }
        if self.depth <= FAST_DEPTH {
            self.mask >>= 1;
        } else {
            self.overflow.pop();
        }
        self.depth -= 1;
        Ok(())
    }

    /// Drops every container deeper than `depth`.
    pub(crate) fn truncate(&mut self, depth: usize) {
        if depth >= self.depth {
            return;
        }
        self.overflow.truncate(depth.saturating_sub(FAST_DEPTH));
        let fast_levels = self.depth.min(FAST_DEPTH) - depth.min(FAST_DEPTH);
        self.mask = u32::try_from(fast_levels)
            .ok()
            .and_then(|shift| self.mask.checked_shr(shift))
            .unwrap_or(0);
        self.depth = depth;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn no_overflow_allocation_at_default_depth() {
        let stack = ContainerStack::new(64);
        assert_eq!(stack.overflow.capacity(), 0);
    }

    #[test]
    fn overflow_provisioned_eagerly() {
        let stack = ContainerStack::new(100);
        assert!(stack.overflow.capacity() >= 36);
        assert_eq!(stack.depth(), 0);
    }

    #[rstest]
    #[case(Container::Object, Container::Array, b']')]
    #[case(Container::Array, Container::Object, b'}')]
    fn mismatched_closer(#[case] open: Container, #[case] close: Container, #[case] found: u8) {
        let mut stack = ContainerStack::new(8);
        stack.push(open, 8).unwrap();
        assert_eq!(
            stack.pop(close),
            Err(ErrorKind::Syntax(SyntaxError::MismatchedCloser { found, open }))
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn pop_on_empty_is_unbalanced() {
        let mut stack = ContainerStack::new(8);
        assert_eq!(
            stack.pop(Container::Array),
            Err(ErrorKind::Syntax(SyntaxError::Unbalanced(b']')))
        );
    }

    #[test]
    fn push_past_ceiling() {
        let mut stack = ContainerStack::new(2);
        stack.push(Container::Array, 2).unwrap();
        stack.push(Container::Array, 2).unwrap();
        assert_eq!(
            stack.push(Container::Array, 2),
            Err(ErrorKind::DepthExceeded { max_depth: 2 })
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn kinds_survive_the_mask_to_overflow_boundary() {
        let max = 150;
        let mut stack = ContainerStack::new(max);
        let kinds: Vec<Container> = (0..max)
            .map(|i| if i % 3 == 0 { Container::Object } else { Container::Array })
            .collect();
        for &kind in &kinds {
            stack.push(kind, max).unwrap();
            assert_eq!(stack.innermost(), Some(kind));
        }
        assert_eq!(stack.depth(), max);
        for &kind in kinds.iter().rev() {
            assert_eq!(stack.innermost(), Some(kind));
            stack.pop(kind).unwrap();
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.innermost(), None);
    }

    #[rstest]
    #[case(10, 3)]
    #[case(64, 0)]
    #[case(70, 64)]
    #[case(90, 66)]
    #[case(90, 10)]
    fn truncate_restores_outer_levels(#[case] deep: usize, #[case] keep: usize) {
        let max = 100;
        let kind = |i: usize| if i % 2 == 0 { Container::Object } else { Container::Array };
        let mut stack = ContainerStack::new(max);
        for i in 0..deep {
            stack.push(kind(i), max).unwrap();
        }
        stack.truncate(keep);
        assert_eq!(stack.depth(), keep);
        for i in (0..keep).rev() {
            assert_eq!(stack.innermost(), Some(kind(i)));
            stack.pop(kind(i)).unwrap();
        }
        assert_eq!(stack.innermost(), None);
    }
}
