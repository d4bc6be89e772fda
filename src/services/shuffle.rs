//! 选项打乱服务 - 业务能力层
//!
//! Fisher–Yates 洗牌，保留每个选项的原始下标

use crate::models::Question;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 打乱后的选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledOption {
    /// 选项在题目数据中的下标，作答和判分都用它
    pub original_index: usize,
    pub text: String,
}

/// 选项打乱器
///
/// 默认使用系统熵作种子，测试中用固定种子保证可复现
#[derive(Debug, Clone)]
pub struct OptionShuffler {
    rng: StdRng,
}

impl OptionShuffler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 有种子用种子，否则用系统熵
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    /// 返回 `0..n` 的一个随机排列
    pub fn shuffle_indices(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        fisher_yates(&mut indices, &mut self.rng);
        indices
    }

    /// 打乱题目的选项
    pub fn shuffle_options(&mut self, question: &Question) -> Vec<ShuffledOption> {
        let mut options: Vec<ShuffledOption> = question
            .options
            .iter()
            .enumerate()
            .map(|(original_index, text)| ShuffledOption {
                original_index,
                text: text.clone(),
            })
            .collect();
        fisher_yates(&mut options, &mut self.rng);
        options
    }
}

impl Default for OptionShuffler {
    fn default() -> Self {
        Self::new()
    }
}

/// 从最后一个位置往前，把位置 i 与 [0, i] 中随机一个位置交换
fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
