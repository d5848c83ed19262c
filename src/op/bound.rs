use crate::seq::Sequence;

/// 截断装饰器，最多放行前`remaining`个元素。
pub struct Limit<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Limit<S> {
    pub(crate) fn new(upstream: S, max_size: usize) -> Limit<S> {
        Limit { upstream, remaining: max_size }
    }
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        // 计数耗尽后不再触碰上游
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.upstream.try_advance(action)
    }
}

/// 跳过装饰器，丢弃前`remaining`个元素后全部放行。
pub struct Skip<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(upstream: S, count: usize) -> Skip<S> {
        Skip { upstream, remaining: count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        while self.remaining > 0 {
            if !self.upstream.try_advance(&mut |_| {}) {
                return false;
            }
            self.remaining -= 1;
        }
        self.upstream.try_advance(action)
    }
}
