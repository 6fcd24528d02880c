//! In-memory [`SectionStore`] used by router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::SectionStore;
use crate::sections::models::{
    AchievementSetInput, AchievementSetRecord, BasicInfoInput, BasicInfoRecord,
    EducationEntryInput, EducationEntryRecord, OtherNoteInput, OtherNoteRecord, ProjectInput,
    ProjectRecord, SummaryInput, SummaryRecord, WorkEntryInput, WorkEntryRecord,
};

#[derive(Default)]
pub struct MemStore {
    pub basic_info: Mutex<Vec<BasicInfoRecord>>,
    pub work_entries: Mutex<Vec<WorkEntryRecord>>,
    pub projects: Mutex<Vec<ProjectRecord>>,
    pub education_entries: Mutex<Vec<EducationEntryRecord>>,
    pub achievement_sets: Mutex<Vec<AchievementSetRecord>>,
    pub summaries: Mutex<Vec<SummaryRecord>>,
    pub other_notes: Mutex<Vec<OtherNoteRecord>>,
    pub registered_emails: Mutex<Vec<String>>,
}

impl MemStore {
    pub fn with_registered(emails: &[&str]) -> Self {
        let store = Self::default();
        *store.registered_emails.lock().unwrap() =
            emails.iter().map(|e| e.to_string()).collect();
        store
    }
}

#[async_trait]
impl SectionStore for MemStore {
    async fn insert_basic_info(
        &self,
        input: BasicInfoInput,
    ) -> Result<BasicInfoRecord, sqlx::Error> {
        let record = BasicInfoRecord::new(input);
        self.basic_info.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_work_entry(
        &self,
        input: WorkEntryInput,
    ) -> Result<WorkEntryRecord, sqlx::Error> {
        let record = WorkEntryRecord::new(input);
        self.work_entries.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_project(&self, input: ProjectInput) -> Result<ProjectRecord, sqlx::Error> {
        let record = ProjectRecord::new(input);
        self.projects.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_education_entry(
        &self,
        input: EducationEntryInput,
    ) -> Result<EducationEntryRecord, sqlx::Error> {
        let record = EducationEntryRecord::new(input);
        self.education_entries.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_achievement_set(
        &self,
        input: AchievementSetInput,
    ) -> Result<AchievementSetRecord, sqlx::Error> {
        let record = AchievementSetRecord::new(input);
        self.achievement_sets.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_summary(&self, input: SummaryInput) -> Result<SummaryRecord, sqlx::Error> {
        let record = SummaryRecord::new(input);
        self.summaries.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_other_note(
        &self,
        input: OtherNoteInput,
    ) -> Result<OtherNoteRecord, sqlx::Error> {
        let record = OtherNoteRecord::new(input);
        self.other_notes.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn registration_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        Ok(self
            .registered_emails
            .lock()
            .unwrap()
            .iter()
            .any(|e| e == email))
    }
}
