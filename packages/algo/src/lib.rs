//! # wordjet-algo - 词汇测验核心算法库
//!
//! 本 crate 提供纯 Rust 实现的测验选词算法:
//!
//! - **Wilson Score** - 基于答题记录的难度置信下界
//! - **Weight Planner** - 渐进引入 (ease-in) 与新词配额的权重规划
//! - **Quiz Sampler** - 有放回的加权抽样
//! - **Stats** - 难度分桶与直方图
//!
//! ## 设计理念
//!
//! - **纯函数** - 只读取调用方传入的计数快照，不做任何 I/O
//! - **可注入随机源** - 所有随机步骤接收 `&mut impl Rng`，测试可使用固定种子
//!
//! ## 模块结构
//!
//! - [`wilson`] - Wilson 置信下界
//! - [`planner`] - 权重规划 (基础权重、ease-in 斜坡、新词配额)
//! - [`sampler`] - 测验抽样
//! - [`stats`] - 难度统计
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use wordjet_algo::{quiz_rng, QuizSampler, WeightPlanner, WordTally};
//!
//! let tallies = vec![
//!     WordTally::new("apple", 0, 0),
//!     WordTally::new("pear", 4, 0),
//!     WordTally::new("plum", 1, 9),
//! ];
//!
//! let mut rng = quiz_rng(Some(42));
//! let weights = WeightPlanner::default().plan(&tallies, &mut rng);
//! let quiz = QuizSampler::new(10).draw(&tallies, &weights, &mut rng).unwrap();
//! assert_eq!(quiz.len(), 3);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod types;
pub mod wilson;
pub mod planner;
pub mod sampler;
pub mod stats;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出 Wilson 置信下界
pub use wilson::{wilson_lower_bound, WILSON_Z};

/// 重新导出权重规划
pub use planner::{PlanSummary, WeightPlanner};

/// 重新导出测验抽样
pub use sampler::{quiz_rng, QuizRng, QuizSampler, SampleError};

/// 重新导出难度统计
pub use stats::{build_report, difficulty_bucket, HistogramBin, StatsError, StatsReport, WordStat};
