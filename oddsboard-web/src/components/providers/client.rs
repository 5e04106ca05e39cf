use yew::context::ContextProvider;
use yew::prelude::*;

use oddsboard_api::Client;

use super::Provider;
use crate::statics::config;

/// Provides the API [`Client`] for the configured api base to all children.
pub struct ClientProvider {
    client: Client,
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        let api_base = config().api_base();
        log::debug!("Using API at {}", api_base);

        Self {
            client: Client::new(api_base.to_owned()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Client> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Client>>
        }
    }
}

impl<C> Provider<Client, C> for ClientProvider
where
    C: Component,
{
    fn take(ctx: &Context<C>) -> Client {
        let (client, _) = ctx
            .link()
            .context(Callback::noop())
            .expect("No ClientProvider given");

        client
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
