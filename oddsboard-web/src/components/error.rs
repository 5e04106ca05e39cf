use yew::prelude::*;

/// Placeholder shown in place of data that failed to load.
pub struct Error;

impl Component for Error {
    type Message = ();
    type Properties = ErrorProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="ob-error" role="alert">
                <span class="ob-error-title">{ "Something went wrong" }</span>
                <span class="ob-error-message">{ ctx.props().error.clone() }</span>
            </div>
        }
    }
}

#[derive(Clone, Debug, Properties, PartialEq, Eq)]
pub struct ErrorProperties {
    pub error: String,
}
