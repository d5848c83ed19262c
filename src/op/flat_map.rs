use crate::seq::Sequence;

/// 展平装饰器：每个上游元素映射为一个内层序列，完全排空当前内层后才拉取下一个上游元素。
pub struct FlatMap<S, U, F> {
    upstream: S,
    mapper: F,
    /// 当前正在排空的内层序列，无活跃内层时为`None`
    inner: Option<U>,
}

impl<S, U, F> FlatMap<S, U, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> FlatMap<S, U, F> {
        FlatMap { upstream, mapper, inner: None }
    }
}

impl<S, U, F> Sequence for FlatMap<S, U, F>
where
    S: Sequence,
    U: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(U::Item)) -> bool {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.try_advance(&mut *action) {
                    return true;
                }
                // 当前内层已耗尽，丢弃并回到上游；空的内层序列在同一次调用内被跨过
                self.inner = None;
            }
            let mapper = &mut self.mapper;
            let mut next_inner = None;
            if !self.upstream.try_advance(&mut |item| next_inner = Some(mapper(item))) {
                return false;
            }
            self.inner = next_inner;
        }
    }
}
