use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::responses::VoteResponse,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoteKind {
    Up,
    Down,
}

/// 互斥开关语义：
/// - 已在同方向集合中：移除（取消投票）
/// - 否则从反方向集合移除（如果在）并加入本方向集合
///
/// 不变式：同一用户名最多出现在两个集合之一。
pub fn apply_vote(
    upvotes: &mut Vec<String>,
    downvotes: &mut Vec<String>,
    username: &str,
    kind: VoteKind,
) {
    let (same, opposite) = match kind {
        VoteKind::Up => (upvotes, downvotes),
        VoteKind::Down => (downvotes, upvotes),
    };

    if let Some(pos) = same.iter().position(|u| u == username) {
        same.remove(pos);
        return;
    }

    if let Some(pos) = opposite.iter().position(|u| u == username) {
        opposite.remove(pos);
    }
    same.push(username.to_string());
}

pub async fn vote_review(
    service: &ReviewService,
    review_id: i64,
    kind: VoteKind,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let voter = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let storage = service.get_storage(request);

    let review = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "Review not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get review: {e}"),
                )),
            );
        }
    };

    let mut upvotes = review.upvotes;
    let mut downvotes = review.downvotes;
    apply_vote(&mut upvotes, &mut downvotes, &voter.username, kind);

    match storage
        .update_review_votes(review_id, &upvotes, &downvotes)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VoteResponse {
                upvotes: upvotes.len(),
                downvotes: downvotes.len(),
            },
            "投票成功",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update votes: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_upvote_then_upvote_toggles_off() {
        let mut up = vec![];
        let mut down = vec![];
        apply_vote(&mut up, &mut down, "alice", VoteKind::Up);
        assert_eq!(up, names(&["alice"]));
        assert!(down.is_empty());

        apply_vote(&mut up, &mut down, "alice", VoteKind::Up);
        assert!(up.is_empty());
        assert!(down.is_empty());
    }

    #[test]
    fn test_upvote_then_downvote_switches_sets() {
        let mut up = vec![];
        let mut down = vec![];
        apply_vote(&mut up, &mut down, "alice", VoteKind::Up);
        apply_vote(&mut up, &mut down, "alice", VoteKind::Down);
        assert!(up.is_empty());
        assert_eq!(down, names(&["alice"]));
    }

    #[test]
    fn test_user_never_in_both_sets() {
        let mut up = names(&["bob"]);
        let mut down = vec![];
        apply_vote(&mut up, &mut down, "bob", VoteKind::Down);
        assert!(!up.contains(&"bob".to_string()));
        assert_eq!(down, names(&["bob"]));
    }

    #[test]
    fn test_votes_are_per_user() {
        let mut up = names(&["alice"]);
        let mut down = names(&["bob"]);
        apply_vote(&mut up, &mut down, "carol", VoteKind::Up);
        assert_eq!(up, names(&["alice", "carol"]));
        assert_eq!(down, names(&["bob"]));
    }
}
