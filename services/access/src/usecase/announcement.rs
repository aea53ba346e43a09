use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AnnouncementRepository;
use crate::domain::types::Announcement;
use crate::error::AccessServiceError;

/// How many announcements the dashboard feed returns.
pub const ANNOUNCEMENT_FEED_LIMIT: u64 = 50;

pub struct ListAnnouncementsUseCase<A: AnnouncementRepository> {
    pub announcements: A,
}

impl<A: AnnouncementRepository> ListAnnouncementsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<Announcement>, AccessServiceError> {
        self.announcements.list_recent(ANNOUNCEMENT_FEED_LIMIT).await
    }
}

pub struct CreateAnnouncementInput {
    pub title: String,
    pub message: String,
    pub is_important: bool,
}

pub struct CreateAnnouncementUseCase<A: AnnouncementRepository> {
    pub announcements: A,
}

impl<A: AnnouncementRepository> CreateAnnouncementUseCase<A> {
    pub async fn execute(
        &self,
        input: CreateAnnouncementInput,
    ) -> Result<Announcement, AccessServiceError> {
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: input.title,
            message: input.message,
            is_important: input.is_important,
            created_at: Utc::now(),
        };
        self.announcements.create(&announcement).await?;
        Ok(announcement)
    }
}
