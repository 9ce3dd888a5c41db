//! Route planning and live transport, both backed by fixed mock data.

pub mod route;
pub mod transport;

pub use route::{
    plan_route, spoken_summary, AccessibilityInfo, RoutePlan, RoutePreferences, RouteRequest,
    RouteStep, StepKind,
};
pub use transport::{TransportArrival, TransportBoard, TransportKind, TransportStatus};

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("From and to locations are required")]
    MissingEndpoints,
}

pub type NavigationResult<T> = Result<T, NavigationError>;
