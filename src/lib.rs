//! 惰性拉取式序列库。
//!
//! 整个库只依赖一个多态原语：[`Sequence::try_advance`]，即"尝试向消费者交付下一个元素"。
//! 所有中间操作（map、filter、distinct、limit、skip、flat_map、peek）都是围绕该原语的
//! 装饰器，逐元素按需求值，除单个装饰器自身必需的状态外不做任何中间缓存；
//! 所有终结操作（for_each、fold、reduce、count、min_by、max_by、to_vec）都通过反复
//! 调用该原语把链条驱动到耗尽。
//!
//! ```
//! use rseq::{Sequence, of};
//!
//! let lens = of(["isel", "ola", "isel", "ola", "-super", "babel", "super"])
//!     .distinct()
//!     .filter(|w| !w.starts_with('-'))
//!     .map(str::len)
//!     .limit(3)
//!     .to_vec();
//! assert_eq!(lens, vec![4, 3, 5]);
//! ```

pub mod op;
mod seq;
mod source;

pub use seq::Sequence;
pub use source::{IterSource, Range, of, range};

/// 整数类型
pub type Integer = i64;
