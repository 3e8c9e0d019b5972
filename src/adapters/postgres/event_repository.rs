//! PostgreSQL implementation of the EventRepository and VisitLog ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::event::{Event, FieldRow, PageRecord};
use crate::domain::foundation::{
    DomainError, ErrorCode, EventId, Timestamp, UserId,
};
use crate::ports::{EventRepository, EventWithPages, VisitLog};

/// PostgreSQL implementation of the EventRepository port.
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_pages(&self, event_id: &EventId) -> Result<Vec<PageRecord>, DomainError> {
        let page_rows: Vec<PageRow> = sqlx::query_as(
            r#"
            SELECT id, page_no, template_kind, template_variant
            FROM landing_pages
            WHERE event_id = $1
            ORDER BY page_no
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        let mut pages = Vec::with_capacity(page_rows.len());
        for page_row in page_rows {
            let contents: Vec<ContentRow> = sqlx::query_as(
                r#"
                SELECT field_id, field_value, field_color, is_visible
                FROM page_contents
                WHERE page_id = $1
                ORDER BY field_id
                "#,
            )
            .bind(page_row.id)
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::database)?;

            pages.push(PageRecord {
                page_no: page_row.page_no,
                template_kind: page_row.template_kind,
                template_variant: page_row.template_variant,
                contents: contents.into_iter().map(FieldRow::from).collect(),
            });
        }
        Ok(pages)
    }
}

/// Database row representation of an event.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    domain_code: String,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: EventId::from_uuid(row.id),
            owner_id: UserId::from_uuid(row.owner_id),
            name: row.name,
            domain_code: row.domain_code,
            is_published: row.is_published,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PageRow {
    id: Uuid,
    page_no: i32,
    template_kind: String,
    template_variant: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    field_id: String,
    field_value: String,
    field_color: Option<String>,
    is_visible: bool,
}

impl From<ContentRow> for FieldRow {
    fn from(row: ContentRow) -> Self {
        FieldRow {
            field_id: row.field_id,
            field_value: row.field_value,
            field_color: row.field_color,
            is_visible: row.is_visible,
        }
    }
}

const EVENT_COLUMNS: &str =
    "id, owner_id, name, domain_code, is_published, created_at, updated_at";

async fn write_pages(
    tx: &mut Transaction<'_, Postgres>,
    event_id: &EventId,
    pages: &[PageRecord],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM landing_pages WHERE event_id = $1")
        .bind(event_id.as_uuid())
        .execute(&mut **tx)
        .await?;

    for page in pages {
        let page_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO landing_pages (id, event_id, page_no, template_kind, template_variant)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(page_id)
        .bind(event_id.as_uuid())
        .bind(page.page_no)
        .bind(&page.template_kind)
        .bind(&page.template_variant)
        .execute(&mut **tx)
        .await?;

        for content in &page.contents {
            sqlx::query(
                r#"
                INSERT INTO page_contents (page_id, field_id, field_value, field_color, is_visible)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(page_id)
            .bind(&content.field_id)
            .bind(&content.field_value)
            .bind(&content.field_color)
            .bind(content.is_visible)
            .execute(&mut **tx)
            .await?;
        }
    }
    Ok(())
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(DomainError::database)?;

        sqlx::query(
            r#"
            INSERT INTO events (id, owner_id, name, domain_code, is_published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.owner_id.as_uuid())
        .bind(&event.name)
        .bind(&event.domain_code)
        .bind(event.is_published)
        .bind(event.created_at.as_datetime())
        .bind(event.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(DomainError::database)?;

        write_pages(&mut tx, &event.id, pages)
            .await
            .map_err(DomainError::database)?;

        tx.commit().await.map_err(DomainError::database)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<EventWithPages>, DomainError> {
        let row: Option<EventRow> =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(DomainError::database)?;

        match row {
            Some(row) => {
                let event = Event::from(row);
                let pages = self.load_pages(&event.id).await?;
                Ok(Some(EventWithPages { event, pages }))
            }
            None => Ok(None),
        }
    }

    async fn find_published_by_domain_code(
        &self,
        domain_code: &str,
    ) -> Result<Option<EventWithPages>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE domain_code = $1 AND is_published = TRUE"
        ))
        .bind(domain_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        match row {
            Some(row) => {
                let event = Event::from(row);
                let pages = self.load_pages(&event.id).await?;
                Ok(Some(EventWithPages { event, pages }))
            }
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn update(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(DomainError::database)?;

        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, domain_code = $3, is_published = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.name)
        .bind(&event.domain_code)
        .bind(event.is_published)
        .bind(event.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EventNotFound,
                format!("Event {} not found", event.id),
            ));
        }

        write_pages(&mut tx, &event.id, pages)
            .await
            .map_err(DomainError::database)?;

        tx.commit().await.map_err(DomainError::database)
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        // landing_pages, page_contents, and visits cascade via FK
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;
        Ok(())
    }
}

#[async_trait]
impl VisitLog for PostgresEventRepository {
    async fn record(&self, event_id: &EventId, at: Timestamp) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO visits (event_id, visited_at) VALUES ($1, $2)")
            .bind(event_id.as_uuid())
            .bind(at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;
        Ok(())
    }
}
