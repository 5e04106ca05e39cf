use crate::components::error::Error;
use crate::components::loader::Loader;

use yew::{html, Html};

pub type BoxError = Box<dyn std::error::Error + 'static>;

/// The state of data loaded from the API: still loading, loaded or failed.
#[derive(Debug)]
pub struct FetchData<T> {
    inner: Option<Result<T, BoxError>>,
}

impl<T> FetchData<T> {
    /// Creates a new `FetchData` in the loading state.
    pub fn new() -> Self {
        Self { inner: None }
    }

    pub fn from_err<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Some(Err(err.into())),
        }
    }

    /// Returns a reference to the loaded value, if any.
    pub fn get(&self) -> Option<&T> {
        match &self.inner {
            Some(Ok(value)) => Some(value),
            _ => None,
        }
    }

    /// Renders the value using `f`, a [`Loader`] while loading or an [`Error`] on failure.
    pub fn render<F>(&self, f: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &self.inner {
            Some(Ok(value)) => f(value),
            Some(Err(err)) => {
                log::debug!("FetchData holds an error, rendering error component");

                html! {
                    <Error error={err.to_string()} />
                }
            }
            None => html! {
                <Loader />
            },
        }
    }
}

impl<T> Default for FetchData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Result<T, BoxError>> for FetchData<T> {
    fn from(res: Result<T, BoxError>) -> Self {
        Self { inner: Some(res) }
    }
}

impl<T> From<T> for FetchData<T> {
    fn from(value: T) -> Self {
        Self {
            inner: Some(Ok(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchData;

    #[test]
    fn test_fetch_data_state() {
        let data = FetchData::<u32>::new();
        assert!(data.inner.is_none());
        assert_eq!(data.get(), None);

        let data = FetchData::from(3_u32);
        assert_eq!(data.get(), Some(&3));

        let data = FetchData::<u32>::from_err("failed");
        assert!(matches!(data.inner, Some(Err(_))));
        assert_eq!(data.get(), None);
    }
}
