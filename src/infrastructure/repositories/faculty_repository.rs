//! SeaORM implementation of FacultyRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::domain::sentinel;
use crate::domain::{
    CleanedFacultyRecord, ContactView, DomainError, FacultyRepository, FacultyView, LoadSummary,
};
use crate::infrastructure::db;
use crate::models::{contact, faculty, publication, teaching};

/// SeaORM-based implementation of FacultyRepository
pub struct SeaOrmFacultyRepository {
    db: DatabaseConnection,
}

impl SeaOrmFacultyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn stored(value: &Option<String>) -> Option<String> {
    Some(sentinel::render(value))
}

/// Rebuild the schema and insert every record on `conn`
async fn write_records<C: ConnectionTrait>(
    conn: &C,
    records: &[CleanedFacultyRecord],
) -> Result<LoadSummary, DbErr> {
    db::rebuild_schema(conn).await?;

    let mut summary = LoadSummary::default();

    for record in records {
        let row = faculty::ActiveModel {
            name: Set(sentinel::render(&record.name)),
            faculty_type: Set(stored(&record.faculty_type)),
            education: Set(stored(&record.education)),
            biography: Set(stored(&record.biography)),
            specialization: Set(stored(&record.specialization)),
            profile_url: Set(stored(&record.profile_url)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        summary.faculty += 1;

        contact::ActiveModel {
            faculty_id: Set(Some(row.id)),
            phone: Set(stored(&record.contact.phone)),
            email: Set(stored(&record.contact.email)),
            address: Set(stored(&record.contact.address)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        summary.contacts += 1;

        for subject in &record.teaching {
            teaching::ActiveModel {
                faculty_id: Set(Some(row.id)),
                subject: Set(Some(subject.clone())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            summary.teaching += 1;
        }

        for entry in &record.publications {
            publication::ActiveModel {
                faculty_id: Set(Some(row.id)),
                publication: Set(Some(entry.clone())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            summary.publications += 1;
        }
    }

    Ok(summary)
}

#[async_trait]
impl FacultyRepository for SeaOrmFacultyRepository {
    async fn replace_all(
        &self,
        records: &[CleanedFacultyRecord],
    ) -> Result<LoadSummary, DomainError> {
        let txn = self.db.begin().await?;

        let summary = match write_records(&txn, records).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("Load failed, rolling back: {}", e);
                txn.rollback().await?;
                return Err(e.into());
            }
        };

        txn.commit().await?;

        tracing::info!(
            "Loaded {} faculty, {} contacts, {} teaching rows, {} publications",
            summary.faculty,
            summary.contacts,
            summary.teaching,
            summary.publications
        );

        Ok(summary)
    }

    async fn find_all(&self) -> Result<Vec<FacultyView>, DomainError> {
        let rows = faculty::Entity::find()
            .order_by_asc(faculty::Column::Id)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut contacts: HashMap<i32, ContactView> = HashMap::new();
        for c in contact::Entity::find()
            .order_by_asc(contact::Column::Id)
            .all(&self.db)
            .await?
        {
            if let Some(faculty_id) = c.faculty_id {
                contacts.entry(faculty_id).or_insert(ContactView {
                    phone: c.phone,
                    email: c.email,
                    address: c.address,
                });
            }
        }

        let mut subjects: HashMap<i32, Vec<String>> = HashMap::new();
        for t in teaching::Entity::find()
            .order_by_asc(teaching::Column::Id)
            .all(&self.db)
            .await?
        {
            if let (Some(faculty_id), Some(subject)) = (t.faculty_id, t.subject) {
                subjects.entry(faculty_id).or_default().push(subject);
            }
        }

        let mut publications: HashMap<i32, Vec<String>> = HashMap::new();
        for p in publication::Entity::find()
            .order_by_asc(publication::Column::Id)
            .all(&self.db)
            .await?
        {
            if let (Some(faculty_id), Some(entry)) = (p.faculty_id, p.publication) {
                publications.entry(faculty_id).or_default().push(entry);
            }
        }

        Ok(rows
            .into_iter()
            .map(|f| FacultyView {
                contact: contacts.remove(&f.id).unwrap_or_default(),
                teaching: subjects.remove(&f.id).unwrap_or_default(),
                publications: publications.remove(&f.id).unwrap_or_default(),
                id: f.id,
                name: f.name,
                faculty_type: f.faculty_type,
                education: f.education,
                biography: f.biography,
                specialization: f.specialization,
                profile_url: f.profile_url,
            })
            .collect())
    }
}
