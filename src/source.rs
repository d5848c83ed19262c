use crate::Integer;
use crate::seq::Sequence;

/// 把一个有限有序集合（或任意一次性迭代器）适配为序列，按原始顺序逐个产出。
pub fn of<C: IntoIterator>(data: C) -> IterSource<C::IntoIter> {
    IterSource { iter: data.into_iter() }
}

/// 生成`[from, to)`区间内的整数序列，升序产出，无额外分配。
pub fn range(from: Integer, to: Integer) -> Range {
    Range { next: from, end: to }
}

pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> Sequence for IterSource<I> {
    type Item = I::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(I::Item)) -> bool {
        match self.iter.next() {
            Some(item) => {
                action(item);
                true
            }
            None => false,
        }
    }
}

pub struct Range {
    next: Integer,
    end: Integer,
}

impl Sequence for Range {
    type Item = Integer;

    fn try_advance(&mut self, action: &mut dyn FnMut(Integer)) -> bool {
        if self.next >= self.end {
            return false;
        }
        let val = self.next;
        // 先推进游标再回调，消费者panic时该元素也视为已消费，不会重复产出
        self.next += 1;
        action(val);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_yields_in_original_order() {
        assert_eq!(of(vec!["a", "b", "c"]).to_vec(), vec!["a", "b", "c"]);
        assert_eq!(of(1..=4).to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_of_empty() {
        assert_eq!(of(Vec::<i32>::new()).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_of_exhaustion_is_idempotent() {
        let mut seq = of(vec![1]);
        assert!(seq.try_advance(&mut |_| {}));
        assert!(!seq.try_advance(&mut |_| {}));
        assert!(!seq.try_advance(&mut |_| {}));
    }

    #[test]
    fn test_range() {
        assert_eq!(range(0, 5).to_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(range(-2, 2).to_vec(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_range_empty_and_reverted() {
        assert_eq!(range(3, 3).to_vec(), Vec::<Integer>::new());
        assert_eq!(range(5, 0).to_vec(), Vec::<Integer>::new());
    }

    #[test]
    fn test_range_exhaustion_is_idempotent() {
        let mut seq = range(0, 1);
        assert!(seq.try_advance(&mut |_| {}));
        assert!(!seq.try_advance(&mut |_| {}));
        assert!(!seq.try_advance(&mut |_| {}));
    }

    #[test]
    fn test_consumer_called_exactly_once_per_advance() {
        let mut seq = of(vec![7, 8]);
        let mut calls = 0;
        assert!(seq.try_advance(&mut |_| calls += 1));
        assert_eq!(calls, 1);
        assert!(seq.try_advance(&mut |_| calls += 1));
        assert!(!seq.try_advance(&mut |_| calls += 1));
        assert_eq!(calls, 2);
    }
}
