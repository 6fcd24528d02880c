//! Section record kinds: request inputs and persisted records.
//!
//! Wire casing is camelCase and the generated identity serializes as `_id`,
//! matching the JSON contract the frontend consumes. Every kind is an
//! independent insert — there are no relationships between them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request envelope shared by every creation route and the registration
/// check: the field bundle arrives nested under a single `params` key.
#[derive(Debug, Deserialize)]
pub struct ParamsEnvelope<T> {
    pub params: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasicInfoInput {
    pub name: String,
    pub title: String,
    pub linkedin: String,
    pub github: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicInfoRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub linkedin: String,
    pub github: String,
    pub email: String,
    pub phone: String,
}

impl BasicInfoRecord {
    pub fn new(input: BasicInfoInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            title: input.title,
            linkedin: input.linkedin,
            github: input.github,
            email: input.email,
            phone: input.phone,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryInput {
    pub certification_link: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub certification_link: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub title: String,
    pub points: Vec<String>,
}

impl WorkEntryRecord {
    pub fn new(input: WorkEntryInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            certification_link: input.certification_link,
            company_name: input.company_name,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            title: input.title,
            points: input.points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub github: String,
    pub link: String,
    pub overview: String,
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub github: String,
    pub link: String,
    pub overview: String,
    pub title: String,
    pub points: Vec<String>,
}

impl ProjectRecord {
    pub fn new(input: ProjectInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            github: input.github,
            link: input.link,
            overview: input.overview,
            title: input.title,
            points: input.points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntryInput {
    pub college: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntryRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub college: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EducationEntryRecord {
    pub fn new(input: EducationEntryInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            college: input.college,
            title: input.title,
            start_date: input.start_date,
            end_date: input.end_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AchievementSetInput {
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementSetRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub points: Vec<String>,
}

impl AchievementSetRecord {
    pub fn new(input: AchievementSetInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: input.points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryInput {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub summary: String,
}

impl SummaryRecord {
    pub fn new(input: SummaryInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: input.summary,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherNoteInput {
    pub other: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OtherNoteRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub other: String,
}

impl OtherNoteRecord {
    pub fn new(input: OtherNoteInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            other: input.other,
        }
    }
}
