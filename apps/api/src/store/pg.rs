//! PostgreSQL-backed [`SectionStore`].

use async_trait::async_trait;
use sqlx::PgPool;

use super::SectionStore;
use crate::sections::models::{
    AchievementSetInput, AchievementSetRecord, BasicInfoInput, BasicInfoRecord,
    EducationEntryInput, EducationEntryRecord, OtherNoteInput, OtherNoteRecord, ProjectInput,
    ProjectRecord, SummaryInput, SummaryRecord, WorkEntryInput, WorkEntryRecord,
};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SectionStore for PgStore {
    async fn insert_basic_info(
        &self,
        input: BasicInfoInput,
    ) -> Result<BasicInfoRecord, sqlx::Error> {
        let record = BasicInfoRecord::new(input);
        sqlx::query(
            "INSERT INTO basic_info (id, name, title, linkedin, github, email, phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.title)
        .bind(&record.linkedin)
        .bind(&record.github)
        .bind(&record.email)
        .bind(&record.phone)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert_work_entry(
        &self,
        input: WorkEntryInput,
    ) -> Result<WorkEntryRecord, sqlx::Error> {
        let record = WorkEntryRecord::new(input);
        sqlx::query(
            "INSERT INTO work_entries
                (id, certification_link, company_name, start_date, end_date, location, title, points)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(record.id)
        .bind(&record.certification_link)
        .bind(&record.company_name)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(&record.location)
        .bind(&record.title)
        .bind(&record.points)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert_project(&self, input: ProjectInput) -> Result<ProjectRecord, sqlx::Error> {
        let record = ProjectRecord::new(input);
        sqlx::query(
            "INSERT INTO projects (id, github, link, overview, title, points)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.id)
        .bind(&record.github)
        .bind(&record.link)
        .bind(&record.overview)
        .bind(&record.title)
        .bind(&record.points)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert_education_entry(
        &self,
        input: EducationEntryInput,
    ) -> Result<EducationEntryRecord, sqlx::Error> {
        let record = EducationEntryRecord::new(input);
        sqlx::query(
            "INSERT INTO education_entries (id, college, title, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(&record.college)
        .bind(&record.title)
        .bind(record.start_date)
        .bind(record.end_date)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert_achievement_set(
        &self,
        input: AchievementSetInput,
    ) -> Result<AchievementSetRecord, sqlx::Error> {
        let record = AchievementSetRecord::new(input);
        sqlx::query("INSERT INTO achievement_sets (id, points) VALUES ($1, $2)")
            .bind(record.id)
            .bind(&record.points)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert_summary(&self, input: SummaryInput) -> Result<SummaryRecord, sqlx::Error> {
        let record = SummaryRecord::new(input);
        sqlx::query("INSERT INTO summaries (id, summary) VALUES ($1, $2)")
            .bind(record.id)
            .bind(&record.summary)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert_other_note(
        &self,
        input: OtherNoteInput,
    ) -> Result<OtherNoteRecord, sqlx::Error> {
        let record = OtherNoteRecord::new(input);
        sqlx::query("INSERT INTO other_notes (id, other) VALUES ($1, $2)")
            .bind(record.id)
            .bind(&record.other)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn registration_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM registrations WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
