use crate::seq::Sequence;

/// 逐元素转换装饰器，一进一出。
pub struct Map<S, F> {
    upstream: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Map<S, F> {
        Map { upstream, mapper }
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    fn try_advance(&mut self, action: &mut dyn FnMut(R)) -> bool {
        let mapper = &mut self.mapper;
        self.upstream.try_advance(&mut |item| action(mapper(item)))
    }
}

/// 旁路观察装饰器，元素原样传递。
pub struct Peek<S, F> {
    upstream: S,
    observer: F,
}

impl<S, F> Peek<S, F> {
    pub(crate) fn new(upstream: S, observer: F) -> Peek<S, F> {
        Peek { upstream, observer }
    }
}

impl<S, F> Sequence for Peek<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        let observer = &mut self.observer;
        self.upstream.try_advance(&mut |item| {
            observer(&item);
            action(item);
        })
    }
}
