//! Persistence seam: one insert per section kind plus the registration
//! lookup.
//!
//! The trait object is built in `main` and handed to the router, so the set
//! of storable kinds is explicit at construction time and tests can swap in
//! the in-memory implementation.

pub mod pg;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::sections::models::{
    AchievementSetInput, AchievementSetRecord, BasicInfoInput, BasicInfoRecord,
    EducationEntryInput, EducationEntryRecord, OtherNoteInput, OtherNoteRecord, ProjectInput,
    ProjectRecord, SummaryInput, SummaryRecord, WorkEntryInput, WorkEntryRecord,
};

/// Create/find operations over the seven section kinds and the read-only
/// registrations collection. Every insert is independent and gets a fresh
/// identity; nothing is ever updated or deleted through this trait.
#[async_trait]
pub trait SectionStore: Send + Sync {
    async fn insert_basic_info(&self, input: BasicInfoInput)
        -> Result<BasicInfoRecord, sqlx::Error>;

    async fn insert_work_entry(&self, input: WorkEntryInput)
        -> Result<WorkEntryRecord, sqlx::Error>;

    async fn insert_project(&self, input: ProjectInput) -> Result<ProjectRecord, sqlx::Error>;

    async fn insert_education_entry(
        &self,
        input: EducationEntryInput,
    ) -> Result<EducationEntryRecord, sqlx::Error>;

    async fn insert_achievement_set(
        &self,
        input: AchievementSetInput,
    ) -> Result<AchievementSetRecord, sqlx::Error>;

    async fn insert_summary(&self, input: SummaryInput) -> Result<SummaryRecord, sqlx::Error>;

    async fn insert_other_note(&self, input: OtherNoteInput)
        -> Result<OtherNoteRecord, sqlx::Error>;

    /// Exact-match lookup against the registrations collection.
    async fn registration_exists(&self, email: &str) -> Result<bool, sqlx::Error>;
}
