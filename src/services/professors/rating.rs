//! 评分聚合器
//!
//! avg_rating 是派生值：对该教授所有 type=professor 且 status=approved
//! 的评价做全量重算，保留一位小数；没有合格评价时写 0。
//!
//! 全量重算是幂等的，重复调用无害；但任何可能改变"已通过集合"的
//! 变更之后都不能漏调——创建、审核状态变更、编辑换目标、删除。
//! 教授不存在时记一条日志跳过，不向调用方抛错。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::Storage;

/// 算术平均，保留一位小数；空集返回 0.0
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// 重算并写回指定教授的平均分
pub async fn recompute_professor_rating(storage: &Arc<dyn Storage>, professor_id: i64) {
    let ratings = match storage
        .list_approved_professor_rating_values(professor_id)
        .await
    {
        Ok(ratings) => ratings,
        Err(e) => {
            warn!(
                "Failed to load ratings for professor {}: {}",
                professor_id, e
            );
            return;
        }
    };

    let avg = average_rating(&ratings);

    match storage
        .update_professor_avg_rating(professor_id, avg)
        .await
    {
        Ok(true) => {
            debug!(
                "Recomputed avg_rating for professor {}: {} ({} review(s))",
                professor_id,
                avg,
                ratings.len()
            );
        }
        Ok(false) => {
            // 教授已不存在（例如并发删除），静默跳过
            debug!(
                "Skipped avg_rating update: professor {} not found",
                professor_id
            );
        }
        Err(e) => {
            warn!(
                "Failed to write avg_rating for professor {}: {}",
                professor_id, e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ratings_yield_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_single_rating() {
        assert_eq!(average_rating(&[4]), 4.0);
    }

    #[test]
    fn test_mean_of_two() {
        // 4 和 2 的平均是 3.0
        assert_eq!(average_rating(&[4, 2]), 3.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.3
        assert_eq!(average_rating(&[5, 4, 4]), 4.3);
        // (5 + 4) / 2 = 4.5
        assert_eq!(average_rating(&[5, 4]), 4.5);
        // (2 + 3 + 3) / 3 = 2.666... -> 2.7
        assert_eq!(average_rating(&[2, 3, 3]), 2.7);
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let ratings = [1, 2, 3, 4, 5];
        assert_eq!(average_rating(&ratings), average_rating(&ratings));
    }
}
