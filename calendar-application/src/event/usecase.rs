use crate::{
    command::Command,
    command_handler::CommandHandler,
    context::AppContext,
    error::AppError,
    event::{
        commands::{CreateEvent, DeleteEvent, UpdateEvent},
        dto::{EventDto, EventListDto},
        queries::{GetEvent, ListEvents},
    },
    gateway::UserGateway,
    query::Query,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use calendar_domain::{
    Event,
    aggregate::Aggregate,
    persist::EventRepository,
    value_object::{Color, Description, EventId, Title, UserId},
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

/// 日历事件用例编排
///
/// 每个操作的固定顺序：解析调用者 → 解析标识 → 加载聚合 → 所有权校验
/// → 校验输入 → 变更/持久化。所有校验都发生在任何写入之前。
pub struct EventUsecase<R, G> {
    repo: R,
    users: G,
}

impl<R, G> EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    pub fn new(repo: R, users: G) -> Self {
        Self { repo, users }
    }

    #[instrument(
        name = "CreateEvent",
        skip_all,
        fields(correlation_id = ctx.correlation_id())
    )]
    pub async fn create_event(&self, ctx: &AppContext, cmd: CreateEvent) -> Result<Event, AppError> {
        let owner = self.authenticate(ctx).await?;

        let title = Title::new(&cmd.title)?;
        let description = Description::new(&cmd.description)?;
        let start_time = cmd.start_time.ok_or(AppError::MissingField("start_time"))?;
        let end_time = cmd.end_time.ok_or(AppError::MissingField("end_time"))?;
        let color = Color::new(cmd.color.as_deref().unwrap_or_default())?;

        let event = Event::create(owner, title, description, start_time, end_time, color);
        self.repo.create(&event).await?;

        info!(event_id = %event.id(), user_id = %owner, "event created");
        Ok(event)
    }

    #[instrument(
        name = "UpdateEvent",
        skip_all,
        fields(correlation_id = ctx.correlation_id(), event_id = %cmd.event_id)
    )]
    pub async fn update_event(&self, ctx: &AppContext, cmd: UpdateEvent) -> Result<Event, AppError> {
        let caller = self.authenticate(ctx).await?;
        let id = EventId::parse(&cmd.event_id)?;

        let mut event = self.repo.find_by_id(&id).await?;
        ensure_owner(&event, &caller)?;

        let title = Title::new(&cmd.title)?;
        let description = Description::new(&cmd.description)?;
        let color = Color::new(cmd.color.as_deref().unwrap_or_default())?;
        let start_time = overlay(cmd.start_time, event.start_time());
        let end_time = overlay(cmd.end_time, event.end_time());

        event.update(title, description, start_time, end_time, color);
        self.repo.update(&event).await?;

        info!(event_id = %id, "event updated");
        Ok(event)
    }

    #[instrument(
        name = "GetEvent",
        skip_all,
        fields(correlation_id = ctx.correlation_id(), event_id = %event_id)
    )]
    pub async fn get_event(&self, ctx: &AppContext, event_id: &str) -> Result<Event, AppError> {
        let caller = self.authenticate(ctx).await?;
        let id = EventId::parse(event_id)?;

        let event = self.repo.find_by_id(&id).await?;
        ensure_owner(&event, &caller)?;

        debug!("event loaded");
        Ok(event)
    }

    #[instrument(
        name = "ListEvents",
        skip_all,
        fields(correlation_id = ctx.correlation_id())
    )]
    pub async fn list_events(&self, ctx: &AppContext) -> Result<Vec<Event>, AppError> {
        let owner = self.authenticate(ctx).await?;

        let events = self.repo.list_by_user_id(&owner).await?;

        debug!(user_id = %owner, count = events.len(), "events listed");
        Ok(events)
    }

    #[instrument(
        name = "DeleteEvent",
        skip_all,
        fields(correlation_id = ctx.correlation_id(), event_id = %event_id)
    )]
    pub async fn delete_event(&self, ctx: &AppContext, event_id: &str) -> Result<(), AppError> {
        let caller = self.authenticate(ctx).await?;
        let id = EventId::parse(event_id)?;

        let event = self.repo.find_by_id(&id).await?;
        ensure_owner(&event, &caller)?;

        self.repo.delete(&id).await?;

        info!("event deleted");
        Ok(())
    }

    async fn authenticate(&self, ctx: &AppContext) -> Result<UserId, AppError> {
        self.users.get_user(ctx).await.map_err(|err| {
            warn!(error = %err, "caller identity could not be resolved");
            match err {
                AppError::Authentication(_) => err,
                other => AppError::Authentication(other.to_string()),
            }
        })
    }
}

/// 合并可选字段：调用方提供则采用，否则沿用聚合当前值
fn overlay(supplied: Option<DateTime<Utc>>, current: DateTime<Utc>) -> DateTime<Utc> {
    supplied.unwrap_or(current)
}

fn ensure_owner<A>(aggregate: &A, caller: &A::Owner) -> Result<(), AppError>
where
    A: Aggregate,
{
    if aggregate.is_owned_by(caller) {
        return Ok(());
    }

    warn!(
        aggregate = A::TYPE,
        id = %aggregate.id(),
        "ownership check failed"
    );
    Err(AppError::PermissionDenied {
        aggregate: A::TYPE,
        id: aggregate.id().to_string(),
    })
}

// ---- 入站接口：命令/查询处理器 ----

#[async_trait]
impl<R, G> CommandHandler<CreateEvent> for EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: CreateEvent,
    ) -> Result<<CreateEvent as Command>::Output, AppError> {
        let event = self.create_event(ctx, cmd).await?;
        Ok(EventDto::from(&event))
    }
}

#[async_trait]
impl<R, G> CommandHandler<UpdateEvent> for EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: UpdateEvent,
    ) -> Result<<UpdateEvent as Command>::Output, AppError> {
        let event = self.update_event(ctx, cmd).await?;
        Ok(EventDto::from(&event))
    }
}

#[async_trait]
impl<R, G> CommandHandler<DeleteEvent> for EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    async fn handle(&self, ctx: &AppContext, cmd: DeleteEvent) -> Result<(), AppError> {
        self.delete_event(ctx, &cmd.event_id).await
    }
}

#[async_trait]
impl<R, G> QueryHandler<GetEvent> for EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        q: GetEvent,
    ) -> Result<<GetEvent as Query>::Dto, AppError> {
        let event = self.get_event(ctx, &q.event_id).await?;
        Ok(EventDto::from(&event))
    }
}

#[async_trait]
impl<R, G> QueryHandler<ListEvents> for EventUsecase<R, G>
where
    R: EventRepository,
    G: UserGateway,
{
    async fn handle(&self, ctx: &AppContext, _q: ListEvents) -> Result<EventListDto, AppError> {
        let events = self.list_events(ctx).await?;
        Ok(events.iter().map(EventDto::from).collect())
    }
}
