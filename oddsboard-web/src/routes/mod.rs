pub mod games;

use crate::components::providers::ClientProvider;

use yew::prelude::*;

use games::GameList;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ClientProvider>
                <div class="main-wrapper">
                    <div class="ob-main">
                        <GameList />
                    </div>
                    <div class="footer">
                        <p>{ "Odds are provided by third-party bookmakers and may be delayed." }</p>
                    </div>
                </div>
            </ClientProvider>
        }
    }
}
