//! Sequences produced by a generator instead of read from a source.
//!
//! `init` calls its generator with a 1-based index: the first element is
//! `generator(1)`. [`eager::range`](crate::eager::range) is written to
//! compensate for this.

use super::cursor::Lookahead;
use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// The elements `generator(1)`, `generator(2)`, ... up to an optional limit.
///
/// Created by [`init`](super::init) and [`init_unbounded`](super::init_unbounded).
#[derive(Debug, Clone)]
pub struct Init<F> {
    generator: F,
    limit: Option<usize>,
}

impl<F> Init<F> {
    pub(crate) const fn new(generator: F, limit: Option<usize>) -> Self {
        Self { generator, limit }
    }
}

impl<F, T> Sequence for Init<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;
    type Cursor<'a>
        = InitCursor<'a, F>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        InitCursor {
            generator: &self.generator,
            limit: self.limit,
            index: 1,
        }
    }
}

/// Cursor of [`Init`].
pub struct InitCursor<'a, F> {
    generator: &'a F,
    limit: Option<usize>,
    index: usize,
}

impl<F, T> Cursor for InitCursor<'_, F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.limit.is_none_or(|limit| self.index <= limit)
    }

    fn next_element(&mut self) -> Result<T> {
        if !self.has_next() {
            return Err(FunctionalError::exhausted("seq::init"));
        }
        let element = (self.generator)(self.index);
        self.index += 1;
        Ok(element)
    }
}

/// Elements generated from a seed until a stop condition holds.
///
/// Each step maps the current state to an emitted value and the next
/// state. `stop` is checked before every step, so a seed that already
/// satisfies it produces an empty sequence. Every traversal restarts from
/// the seed.
///
/// Created by [`unfold`](super::unfold).
#[derive(Debug, Clone)]
pub struct Unfold<St, F, P> {
    seed: St,
    step: F,
    stop: P,
}

impl<St, F, P> Unfold<St, F, P> {
    pub(crate) const fn new(step: F, stop: P, seed: St) -> Self {
        Self { seed, step, stop }
    }
}

impl<St, F, P, T> Sequence for Unfold<St, F, P>
where
    St: Clone,
    F: Fn(St) -> (T, St),
    P: Fn(&St) -> bool,
{
    type Item = T;
    type Cursor<'a>
        = UnfoldCursor<'a, St, F, P>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        UnfoldCursor {
            state: Some(self.seed.clone()),
            step: &self.step,
            stop: &self.stop,
        }
    }
}

/// Cursor of [`Unfold`].
pub struct UnfoldCursor<'a, St, F, P> {
    state: Option<St>,
    step: &'a F,
    stop: &'a P,
}

impl<St, F, P, T> Cursor for UnfoldCursor<'_, St, F, P>
where
    F: Fn(St) -> (T, St),
    P: Fn(&St) -> bool,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.state.as_ref().is_some_and(|state| !(self.stop)(state))
    }

    fn next_element(&mut self) -> Result<T> {
        if !self.has_next() {
            return Err(FunctionalError::exhausted("seq::unfold"));
        }
        let state = self
            .state
            .take()
            .ok_or_else(|| FunctionalError::exhausted("seq::unfold"))?;
        let (element, next) = (self.step)(state);
        self.state = Some(next);
        Ok(element)
    }
}

/// Elements generated from a seed until the step function returns `None`.
///
/// Created by [`unfold_option`](super::unfold_option).
#[derive(Debug, Clone)]
pub struct UnfoldOption<St, F> {
    seed: St,
    step: F,
}

impl<St, F> UnfoldOption<St, F> {
    pub(crate) const fn new(step: F, seed: St) -> Self {
        Self { seed, step }
    }
}

impl<St, F, T> Sequence for UnfoldOption<St, F>
where
    St: Clone,
    F: Fn(St) -> Option<(T, St)>,
{
    type Item = T;
    type Cursor<'a>
        = UnfoldOptionCursor<'a, St, F, T>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        UnfoldOptionCursor {
            state: Some(self.seed.clone()),
            step: &self.step,
            lookahead: Lookahead::Pending,
        }
    }
}

/// Cursor of [`UnfoldOption`].
pub struct UnfoldOptionCursor<'a, St, F, T> {
    state: Option<St>,
    step: &'a F,
    lookahead: Lookahead<T>,
}

impl<St, F, T> Cursor for UnfoldOptionCursor<'_, St, F, T>
where
    F: Fn(St) -> Option<(T, St)>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        let state = &mut self.state;
        let step = self.step;
        self.lookahead.fill_with(|| {
            let (element, next) = step(state.take()?)?;
            *state = Some(next);
            Some(element)
        })
    }

    fn next_element(&mut self) -> Result<T> {
        self.has_next();
        self.lookahead.take("seq::unfold_option")
    }
}
