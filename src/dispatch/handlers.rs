//! One handler per route family.
//!
//! Each handler performs its side effects (cache warm-up, navigation) against
//! the injected context and reports whether the link was fully handled.
//! Returning `false` signals a degraded outcome (invalid identifier fallback,
//! failed prefetch on a detail screen), not an exception.

use crate::dispatch::context::HandlerContext;
use crate::dispatch::dispatcher::DispatchError;
use crate::link::ParsedDeepLink;
use crate::routing::{is_valid_session_id, HandlerKind};

/// Safe landing place when a link targets a session we cannot open.
const DEFAULT_TAB_PATH: &str = "/sessions";

/// Cache key for the sessions collection.
const SESSIONS_PREFETCH_KEY: &str = "sessions";

fn session_prefetch_key(id: &str) -> String {
    format!("session:{id}")
}

/// Run the handler for `kind`. Exhaustive over the closed handler set.
pub(crate) async fn run(
    kind: HandlerKind,
    link: &ParsedDeepLink,
    ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    match kind {
        HandlerKind::SessionDetail => session_detail(link, ctx).await,
        HandlerKind::SessionCreate => session_create(link, ctx).await,
        HandlerKind::SessionsList => sessions_list(link, ctx).await,
        HandlerKind::NotificationsList => notifications_list(link, ctx).await,
        HandlerKind::Settings => settings(link, ctx).await,
        HandlerKind::Chat => chat(link, ctx).await,
        HandlerKind::OauthCallback => oauth_callback(link, ctx).await,
    }
}

/// `/sessions/{id}`: warm the session cache, then navigate to the session.
///
/// The identifier is re-derived from the path, with a query fallback for
/// hosts that pass it explicitly. Prefetch failure does not block navigation
/// but is reported as a degraded outcome.
async fn session_detail(
    link: &ParsedDeepLink,
    ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    let id = link
        .path
        .strip_prefix("/sessions/")
        .map(str::to_string)
        .or_else(|| link.query_params.get("id").cloned())
        .unwrap_or_default();

    if !is_valid_session_id(&id) {
        tracing::warn!(%id, "invalid session id in deep link, falling back to sessions tab");
        ctx.navigator.replace(DEFAULT_TAB_PATH);
        return Ok(false);
    }

    if let Some(tab) = link.query_params.get("tab") {
        // TODO: forward the tab selection once the session screen accepts it.
        tracing::debug!(%tab, "session tab parameter recognized");
    }

    let key = session_prefetch_key(&id);
    let prefetched = match ctx.cache.prefetch(&key).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(%key, error = %e, "session prefetch failed, navigating anyway");
            false
        }
    };

    ctx.navigator.push(&link.path);
    Ok(prefetched)
}

/// `/sessions/new`: navigate to the creation screen.
async fn session_create(
    link: &ParsedDeepLink,
    ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    for param in ["repo", "workflow", "pr"] {
        if let Some(value) = link.query_params.get(param) {
            tracing::debug!(param, %value, "creation parameter recognized");
        }
    }
    ctx.navigator.push("/sessions/new");
    Ok(true)
}

/// `/sessions`: best-effort prefetch of the collection, then navigate.
async fn sessions_list(
    link: &ParsedDeepLink,
    ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    if let Some(filter) = link.query_params.get("filter") {
        tracing::debug!(%filter, "sessions filter recognized");
    }

    if let Err(e) = ctx.cache.prefetch(SESSIONS_PREFETCH_KEY).await {
        tracing::warn!(error = %e, "sessions prefetch failed");
    }

    ctx.navigator.push("/sessions");
    Ok(true)
}

/// `/notifications`: navigate unconditionally.
async fn notifications_list(
    link: &ParsedDeepLink,
    ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    if let Some(filter) = link.query_params.get("filter") {
        tracing::debug!(%filter, "notifications filter recognized");
    }
    ctx.navigator.push("/notifications");
    Ok(true)
}

/// `/settings` or `/settings/{section}`: navigate to root or subsection.
async fn settings(link: &ParsedDeepLink, ctx: &HandlerContext) -> Result<bool, DispatchError> {
    ctx.navigator.push(&link.path);
    Ok(true)
}

/// `/chat`: navigate unconditionally.
async fn chat(link: &ParsedDeepLink, ctx: &HandlerContext) -> Result<bool, DispatchError> {
    if let Some(session) = link.query_params.get("session") {
        tracing::debug!(%session, "chat session context recognized");
    }
    ctx.navigator.push("/chat");
    Ok(true)
}

/// `/auth/callback`: deliberate no-op.
///
/// The external OAuth flow owns this transition; resolving the link must not
/// navigate on top of it.
async fn oauth_callback(
    _link: &ParsedDeepLink,
    _ctx: &HandlerContext,
) -> Result<bool, DispatchError> {
    tracing::debug!("oauth callback link observed, transition owned by auth flow");
    Ok(true)
}
