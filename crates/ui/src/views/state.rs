use dioxus::prelude::*;
use services::LoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Load(LoadError),
    InvalidLessonId(String),
}

impl ViewError {
    /// Every load failure shows the same panel text.
    #[must_use]
    pub fn message(&self) -> &'static str {
        "Could not load lesson. Please try again."
    }
}

impl From<LoadError> for ViewError {
    fn from(err: LoadError) -> Self {
        ViewError::Load(err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
