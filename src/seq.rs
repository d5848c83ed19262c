use crate::Integer;
use crate::op::{Distinct, Filter, FlatMap, Limit, Map, Peek, Skip};
use std::cmp::Ordering;
use std::hash::Hash;

/// 惰性拉取式序列，唯一的抽象方法是[`Sequence::try_advance`]，其余操作全部由其派生。
///
/// 一条链上的每个装饰器独占持有自己的上游，消费严格单调：越过最外层装饰器的元素
/// 不会被再次产出，链条耗尽后再次驱动只会得到空结果而不是错误。
/// 序列不支持并发驱动，同一时刻至多允许一次推进。
pub trait Sequence {
    type Item;

    /// 尝试推进一个元素：成功时恰好回调`action`一次并返回`true`；
    /// 耗尽时不回调并返回`false`，且后续调用始终返回`false`。
    fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

    /* **************************************** 中间操作 **************************************** */

    /// 逐元素转换，一进一出，原样传递耗尽信号。
    fn map<R, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, mapper)
    }

    /// 保留满足条件的元素；单次推进内会反复拉取上游直到命中或上游耗尽。
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// 观察每个经过的元素，不改变元素本身和耗尽行为。
    fn peek<F>(self, observer: F) -> Peek<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Peek::new(self, observer)
    }

    /// 按相等性去重，保留首次出现的元素；已见集合随不同元素数量增长，
    /// 这是整个设计中唯一一处以内存换单遍惰性的地方。
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Distinct::new(self)
    }

    /// 保留前`max_size`个元素；计数达到上限后不再触碰上游，直接返回`false`。
    fn limit(self, max_size: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, max_size)
    }

    /// 丢弃前`count`个元素，保留其后全部元素；上游提前耗尽则不产出任何元素。
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// 把每个元素映射为一个内层序列并逐个完全排空；
    /// 外层每次推进至多产出一个内层元素，排空当前内层后才拉取下一个外层元素。
    fn flat_map<U, F>(self, mapper: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: Sequence,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, mapper)
    }

    /* **************************************** 终结操作 **************************************** */

    /// 按产出顺序单遍消费全部元素。
    fn for_each<F>(&mut self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while self.try_advance(&mut action) {}
    }

    /// 以`identity`为初值按产出顺序左折叠。
    fn fold<A, F>(&mut self, identity: A, mut op: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = identity;
        loop {
            // 单元素暂存槽，把回调交付的元素接出来参与折叠
            let mut slot = None;
            if !self.try_advance(&mut |item| slot = Some(item)) {
                return acc;
            }
            if let Some(item) = slot {
                acc = op(acc, item);
            }
        }
    }

    /// 无初值左折叠：首个元素作为种子，空序列返回`None`。
    fn reduce<F>(&mut self, mut op: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.fold(None, |acc, item| match acc {
            Some(prev) => Some(op(prev, item)),
            None => Some(item),
        })
    }

    /// 统计元素数量。派生操作：把每个元素映射为1后求和，不做任何短路或规模预估。
    fn count(&mut self) -> Integer {
        (&mut *self).map(|_| 1 as Integer).fold(0, |acc, one| acc + one)
    }

    /// 按比较器取最小元素，空序列返回`None`，相等时保留先出现者。
    fn min_by<F>(&mut self, mut cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| if cmp(&a, &b) == Ordering::Greater { b } else { a })
    }

    /// 按比较器取最大元素，空序列返回`None`，相等时保留先出现者。
    fn max_by<F>(&mut self, mut cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| if cmp(&a, &b) == Ordering::Less { b } else { a })
    }

    /// 按产出顺序收集全部元素到新分配的`Vec`。
    /// 拉取模型下序列规模事先不可知，因此不做容量预估，完全消费后长度自然确定。
    fn to_vec(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut res = Vec::new();
        (&mut *self).for_each(|item| res.push(item));
        res
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        (**self).try_advance(action)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        (**self).try_advance(action)
    }
}
