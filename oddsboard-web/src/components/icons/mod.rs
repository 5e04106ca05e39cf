//! FontAwesome icons. The stylesheet is loaded by the host page.
use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    /// Text announced by screen readers in place of the icon.
    pub label: &'static str,
    #[prop_or_default]
    pub classes: &'static str,
}

macro_rules! fa_icon {
    ($($id:ident, $name:expr),*$(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $id;

            impl Component for $id {
                type Message = ();
                type Properties = Props;

                fn create(_ctx: &Context<Self>) -> Self {
                    Self
                }

                fn view(&self, ctx: &Context<Self>) -> Html {
                    let props = ctx.props();
                    let classes = classes!($name, "fa-solid", props.classes);

                    html! {
                        <>
                            <i aria-hidden="true" class={classes}></i>
                            <span class="sr-only">{ props.label }</span>
                        </>
                    }
                }
            }
        )*
    };
}

fa_icon! {
    FaChevronRight, "fa-chevron-right",
    FaChevronDown, "fa-chevron-down",
}
