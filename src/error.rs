use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Error, Debug, Clone)]
pub enum UiError {
    // --- construction errors ---

    #[error("Missing required argument '{argument}' for component '{component}'")]
    MissingArgument { component: String, argument: String },

    #[error("Duplicate child id '{id}' under '{parent}': sibling ids must be unique")]
    DuplicateChildId { parent: String, id: String },

    #[error("Unknown component kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Component kind '{kind}' is already registered")]
    DuplicateKind { kind: String },

    #[error("Invalid kind name '{kind}': must be PascalCase")]
    InvalidKindName { kind: String },

    #[error("Invalid component id '{id}': must be lowercase snake_case")]
    InvalidComponentId { id: String },

    #[error("Invalid route '{route}': expected 'controller/action' in lowercase snake_case")]
    InvalidRoute { route: String },

    #[error("Component '{component}' has no view path")]
    MissingViewPath { component: String },

    // --- routing errors ---

    #[error("Unknown controller '{controller}'")]
    UnknownController { controller: String },

    #[error("Controller '{controller}' is already registered")]
    DuplicateController { controller: String },

    #[error("Unknown action '{action}' on controller '{controller}'")]
    UnknownAction { controller: String, action: String },

    #[error("No handler for event '{event}' on controller '{controller}'")]
    NoHandler { controller: String, event: String },

    // --- navigation errors ---

    #[error("No event in flight: display is only valid while a handler is running")]
    NotDispatching,

    #[error("An event is already in flight on this navigator")]
    EventInFlight,

    #[error("Navigation already decided for this event: at most one display call is honored")]
    NavigationDecided,

    // --- collaborator errors ---

    #[error("Render error in view '{view_path}': {message}")]
    Render { view_path: String, message: String },

    #[error("User directory error: {0}")]
    Directory(String),

    // --- session errors ---

    #[error("Unknown session '{session}'")]
    UnknownSession { session: String },

    // --- manifest errors ---

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("YAML error: {0}")]
    YamlError(String),
}

impl From<serde_yaml::Error> for UiError {
    fn from(err: serde_yaml::Error) -> Self {
        UiError::YamlError(err.to_string())
    }
}
