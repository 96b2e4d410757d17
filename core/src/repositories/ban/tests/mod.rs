//! Tests for the in-memory ban repository

use chrono::{Duration, Utc};

use crate::domain::entities::ban::Ban;
use crate::repositories::ban::{BanRepository, InMemoryBanRepository};

#[tokio::test]
async fn test_find_active_by_phone_or_ip() {
    let repo = InMemoryBanRepository::new();
    let now = Utc::now();
    repo.create(Ban::until("0911", "1.1.1.1", now + Duration::hours(1)))
        .await
        .unwrap();

    assert!(repo.find_active("0911", "9.9.9.9", now).await.unwrap().is_some());
    assert!(repo.find_active("0999", "1.1.1.1", now).await.unwrap().is_some());
    assert!(repo.find_active("0999", "9.9.9.9", now).await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_ban_is_ignored() {
    let repo = InMemoryBanRepository::new();
    let now = Utc::now();
    repo.create(Ban::until("0911", "1.1.1.1", now - Duration::seconds(1)))
        .await
        .unwrap();

    assert!(repo.find_active("0911", "1.1.1.1", now).await.unwrap().is_none());
    assert_eq!(repo.all().await.len(), 1);
}
