//! 围绕[`crate::Sequence::try_advance`]原语的装饰器。
//!
//! 每个装饰器独占持有一个上游序列和自身的私有状态（计数器、已见集合、活跃内层序列），
//! 状态只在自己的推进调用中变化，装饰器之间没有共享可变状态。

mod bound;
mod filter;
mod flat_map;
mod map;

pub use bound::{Limit, Skip};
pub use filter::{Distinct, Filter};
pub use flat_map::FlatMap;
pub use map::{Map, Peek};
