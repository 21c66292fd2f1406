//! Static, name-based category classification.
//!
//! Each category owns a hand-maintained list of schema names. Lists are
//! consulted in [`Category::PRIORITY`] order and the first list containing a
//! name decides its category. Names missing from every list fall back to
//! [`Category::DEFAULT`].
//!
//! Providers that declare a category do not depend on these lists for
//! grouping; the registry still compares the two to surface drift.

use sysapi_core::Category;

const COMMON: &[&str] = &[
    "Timestamp",
    "ResourceId",
    "PaginationParams",
    "PaginationInfo",
    "KeyValue",
    "ByteSize",
    "Percentage",
    "HealthStatus",
];

const DOCKER: &[&str] = &[
    "ContainerInfo",
    "ContainerStats",
    "ContainerPort",
    "ContainerCreateRequest",
    "ImageInfo",
    "DockerNetwork",
    "DockerVolume",
];

const SYSTEM: &[&str] = &[
    "SystemInfo",
    "CpuInfo",
    "MemoryInfo",
    "SystemStats",
    "LoadAverage",
    "NetworkInterface",
    "ServiceStatus",
    "ProcessInfo",
];

const STORAGE: &[&str] = &[
    "DiskInfo",
    "ArrayStatus",
    "ShareInfo",
    "SmartData",
    "PoolInfo",
    "MountPoint",
];

const VM: &[&str] = &[
    "VmInfo",
    "VmCreateRequest",
    "VmStats",
    "VmSnapshot",
    "VmDisk",
];

const WEBSOCKET: &[&str] = &[
    "WebSocketMessage",
    "WebSocketSubscribeRequest",
    "WebSocketEvent",
    "WebSocketError",
];

const AUTH: &[&str] = &[
    "LoginRequest",
    "LoginResponse",
    "UserInfo",
    "TokenRefreshRequest",
    "TokenResponse",
    "ApiKeyInfo",
    "SessionInfo",
];

const DIAGNOSTICS: &[&str] = &[
    "DiagnosticReport",
    "HealthCheckResult",
    "LogEntry",
    "LogQuery",
    "PerformanceMetrics",
];

const NOTIFICATIONS: &[&str] = &[
    "Notification",
    "NotificationCreateRequest",
    "NotificationChannel",
    "NotificationPreferences",
];

const OPERATIONS: &[&str] = &[
    "BulkOperationRequest",
    "BulkOperationResult",
    "OperationStatus",
    "ScheduledTask",
];

const RESPONSES: &[&str] = &[
    "SuccessResponse",
    "ListResponse",
    "EmptyResponse",
    "MessageResponse",
    "BatchResponse",
    "ApiInfo",
    "EndpointInfo",
    "ApiVersionInfo",
    "ChangelogEntry",
];

const ASYNC_OPERATIONS: &[&str] = &[
    "AsyncOperation",
    "AsyncOperationStatus",
    "AsyncOperationProgress",
    "AsyncOperationResult",
];

const RATE_LIMITING: &[&str] = &[
    "RateLimitInfo",
    "RateLimitConfig",
    "RateLimitStatus",
    "RateLimitExceeded",
];

const ERRORS: &[&str] = &[
    "ErrorResponse",
    "ValidationErrorResponse",
    "FieldError",
    "NotFoundError",
    "ConflictError",
];

/// Category lists in classification priority order.
const CATEGORY_LISTS: [(Category, &[&str]); 14] = [
    (Category::Common, COMMON),
    (Category::Docker, DOCKER),
    (Category::System, SYSTEM),
    (Category::Storage, STORAGE),
    (Category::Vm, VM),
    (Category::WebSocket, WEBSOCKET),
    (Category::Auth, AUTH),
    (Category::Diagnostics, DIAGNOSTICS),
    (Category::Notifications, NOTIFICATIONS),
    (Category::Operations, OPERATIONS),
    (Category::Responses, RESPONSES),
    (Category::AsyncOperations, ASYNC_OPERATIONS),
    (Category::RateLimiting, RATE_LIMITING),
    (Category::Errors, ERRORS),
];

/// Classify a schema name, falling back to [`Category::DEFAULT`].
#[must_use]
pub fn classify(name: &str) -> Category {
    lookup(name).unwrap_or(Category::DEFAULT)
}

/// Find the first category list containing `name`, without fallback.
#[must_use]
pub fn lookup(name: &str) -> Option<Category> {
    first_match(&CATEGORY_LISTS, name)
}

/// Names statically assigned to `category`.
#[must_use]
pub fn listed_names(category: Category) -> &'static [&'static str] {
    CATEGORY_LISTS
        .iter()
        .find(|(listed, _)| *listed == category)
        .map(|(_, names)| *names)
        .unwrap_or_default()
}

fn first_match(lists: &[(Category, &[&str])], name: &str) -> Option<Category> {
    lists
        .iter()
        .find(|(_, names)| names.iter().any(|listed| *listed == name))
        .map(|(category, _)| *category)
}
