use crate::persist::event_row::EventRow;
use async_trait::async_trait;
use calendar_domain::{
    Event,
    error::{DomainError, DomainResult},
    persist::EventRepository,
    value_object::{EventId, UserId},
};
use sqlx::postgres::PgPool;
use tracing::instrument;

const SELECT_COLUMNS: &str = "SELECT id, user_id, title, description, start_time, end_time, \
     color, created_at, updated_at FROM events";

/// 基于 Postgres 的事件仓储
///
/// 每个写操作都在独立事务内执行；事务在提交前被丢弃即回滚。
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip_all, fields(event_id = %event.id()), err)]
    async fn create(&self, event: &Event) -> DomainResult<()> {
        let row = EventRow::from(event);
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO events
                (id, user_id, title, description, start_time, end_time, color, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(row.start_time)
        .bind(row.end_time)
        .bind(&row.color)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip_all, fields(event_id = %event.id()), err)]
    async fn update(&self, event: &Event) -> DomainResult<()> {
        let row = EventRow::from(event);
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE events
               SET user_id = $2,
                   title = $3,
                   description = $4,
                   start_time = $5,
                   end_time = $6,
                   color = $7,
                   created_at = $8,
                   updated_at = $9
             WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(row.start_time)
        .bind(row.end_time)
        .bind(&row.color)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found::<Event>(event.id()));
        }

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: &EventId) -> DomainResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DomainError::not_found::<Event>(id))?;

        Event::try_from(row)
    }

    #[instrument(skip(self), err)]
    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "{SELECT_COLUMNS} WHERE user_id = $1 ORDER BY start_time, end_time, id"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: &EventId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found::<Event>(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
