use crate::seq::Sequence;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// 条件过滤装饰器。
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Filter<S, P> {
        Filter { upstream, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        let predicate = &mut self.predicate;
        let mut found = false;
        // 上游元素不满足条件不代表本次推进失败，在同一次调用内持续拉取直到命中或上游耗尽
        while !found {
            let has_next = self.upstream.try_advance(&mut |item| {
                if predicate(&item) {
                    action(item);
                    found = true;
                }
            });
            if !has_next {
                break;
            }
        }
        found
    }
}

/// 按相等性去重的装饰器，保留首次出现的元素。
pub struct Distinct<S: Sequence> {
    upstream: S,
    seen: FxHashSet<S::Item>,
}

impl<S: Sequence> Distinct<S> {
    pub(crate) fn new(upstream: S) -> Distinct<S> {
        Distinct { upstream, seen: FxHashSet::default() }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        let seen = &mut self.seen;
        let mut found = false;
        while !found {
            let has_next = self.upstream.try_advance(&mut |item| {
                if seen.insert(item.clone()) {
                    action(item);
                    found = true;
                }
            });
            if !has_next {
                break;
            }
        }
        found
    }
}
