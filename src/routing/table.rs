//! Route table: ordered definitions and lookup operations.
//!
//! # Responsibilities
//! - Hold the static, ordered route list (built once, never mutated)
//! - First-match-wins lookup over the full normalized path
//! - Companion lookups: auth requirement, handler name, capture extraction
//!
//! # Design Decisions
//! - Declared order is the tie-break contract; `/sessions/new` precedes
//!   `/sessions/{id}` so the literal wins
//! - `requires_auth` is fail-closed: unmatched paths require auth
//! - Handlers are a closed enum so dispatch stays exhaustively matched

use std::collections::BTreeMap;

use crate::routing::pattern::RoutePattern;
use crate::routing::validators::is_valid_session_id;

/// The closed set of dispatchable handlers, one per route family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    SessionDetail,
    SessionCreate,
    SessionsList,
    NotificationsList,
    Settings,
    Chat,
    OauthCallback,
}

impl HandlerKind {
    /// Stable string identifier, used in analytics and lookups.
    pub fn name(self) -> &'static str {
        match self {
            HandlerKind::SessionDetail => "session-detail",
            HandlerKind::SessionCreate => "session-create",
            HandlerKind::SessionsList => "sessions-list",
            HandlerKind::NotificationsList => "notifications-list",
            HandlerKind::Settings => "settings",
            HandlerKind::Chat => "chat",
            HandlerKind::OauthCallback => "oauth-callback",
        }
    }

    /// Reverse of [`HandlerKind::name`]; None for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "session-detail" => Some(HandlerKind::SessionDetail),
            "session-create" => Some(HandlerKind::SessionCreate),
            "sessions-list" => Some(HandlerKind::SessionsList),
            "notifications-list" => Some(HandlerKind::NotificationsList),
            "settings" => Some(HandlerKind::Settings),
            "chat" => Some(HandlerKind::Chat),
            "oauth-callback" => Some(HandlerKind::OauthCallback),
            _ => None,
        }
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicate over extracted parameters (path captures merged over query).
pub type ParamValidator = fn(&BTreeMap<String, String>) -> bool;

/// One route: pattern, handler, auth requirement, optional validator.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub pattern: RoutePattern,
    pub handler: HandlerKind,
    pub requires_auth: bool,
    pub param_validator: Option<ParamValidator>,
}

impl RouteDefinition {
    fn new(pattern: RoutePattern, handler: HandlerKind) -> Self {
        Self {
            pattern,
            handler,
            requires_auth: true,
            param_validator: None,
        }
    }

    fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    fn validated(mut self, validator: ParamValidator) -> Self {
        self.param_validator = Some(validator);
        self
    }
}

fn session_params_valid(params: &BTreeMap<String, String>) -> bool {
    params
        .get("id")
        .is_some_and(|id| is_valid_session_id(id))
}

/// Ordered route list with first-match-wins lookup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Build the default application route table.
    pub fn with_default_routes() -> Self {
        Self {
            routes: vec![
                RouteDefinition::new(
                    RoutePattern::Literal("/sessions/new"),
                    HandlerKind::SessionCreate,
                ),
                RouteDefinition::new(
                    RoutePattern::Capture {
                        prefix: "/sessions",
                        param: "id",
                    },
                    HandlerKind::SessionDetail,
                )
                .validated(session_params_valid),
                RouteDefinition::new(RoutePattern::Literal("/sessions"), HandlerKind::SessionsList),
                RouteDefinition::new(
                    RoutePattern::Literal("/notifications"),
                    HandlerKind::NotificationsList,
                ),
                RouteDefinition::new(RoutePattern::Literal("/chat"), HandlerKind::Chat),
                RouteDefinition::new(RoutePattern::Literal("/settings"), HandlerKind::Settings),
                RouteDefinition::new(
                    RoutePattern::OneOf {
                        prefix: "/settings",
                        param: "section",
                        options: &["appearance", "notifications", "repos"],
                    },
                    HandlerKind::Settings,
                ),
                RouteDefinition::new(
                    RoutePattern::Literal("/auth/callback"),
                    HandlerKind::OauthCallback,
                )
                .public(),
            ],
        }
    }

    /// Build a table from explicit definitions, preserving order.
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        Self { routes }
    }

    /// First definition whose pattern matches the full path.
    pub fn match_route(&self, path: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.pattern.matches(path))
    }

    /// Handler name for the path, if any route matches.
    pub fn handler_name_for(&self, path: &str) -> Option<&'static str> {
        self.match_route(path).map(|route| route.handler.name())
    }

    /// Whether navigation to the path requires authentication.
    ///
    /// Defaults to true for unmatched paths (fail-closed).
    pub fn requires_auth(&self, path: &str) -> bool {
        self.match_route(path)
            .map(|route| route.requires_auth)
            .unwrap_or(true)
    }

    /// All definitions in declared order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_default_routes()
    }
}
