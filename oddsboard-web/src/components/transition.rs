use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Animates its children in and out when `show` changes.
///
/// While animating the wrapper carries the css classes `{name}-enter-active` and
/// `{name}-enter-from`/`{name}-enter-to` when entering, or `{name}-exit-active` and
/// `{name}-exit-from`/`{name}-exit-to` when exiting. The children are removed once the exit
/// transition finished.
/// The time a "from" phase is applied before moving on, about a single frame at 60Hz. A zero
/// timeout may fire before the browser painted the "from" classes.
const FRAME_MILLIS: u32 = 16;

pub struct Transition {
    show: bool,
    phase: Phase,
    // Dropping the timeout cancels the pending phase change.
    timeout: Option<Timeout>,
}

impl Transition {
    fn set_phase(&mut self, ctx: &Context<Self>, phase: Phase) {
        log::trace!("Transition {:?} -> {:?}", self.phase, phase);
        self.phase = phase;

        self.timeout = phase.delay(ctx.props().duration).map(|millis| {
            let link = ctx.link().clone();
            Timeout::new(millis, move || link.send_message(Message::Advance))
        });
    }
}

impl Component for Transition {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let show = ctx.props().show;

        Self {
            show,
            phase: Phase::initial(show),
            timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Advance => {
                let phase = self.phase.next();
                self.set_phase(ctx, phase);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let show = ctx.props().show;

        if show != self.show {
            self.show = show;

            let phase = self.phase.toggle(show);
            self.set_phase(ctx, phase);
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.phase.is_visible() {
            return html! {};
        }

        let classes = classes!("ob-transition", self.phase.classes(ctx.props().name));

        html! {
            <div class={classes}>
                { for ctx.props().children.iter() }
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub show: bool,
    #[prop_or("slide-fade")]
    pub name: &'static str,
    /// The duration of the enter and exit transitions in milliseconds.
    #[prop_or(300)]
    pub duration: u32,
    pub children: Children,
}

pub enum Message {
    Advance,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    EnterFrom,
    EnterTo,
    Shown,
    ExitFrom,
    ExitTo,
}

impl Phase {
    /// The phase of a newly created transition. There is no animation on the first render.
    fn initial(show: bool) -> Self {
        if show {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    /// Returns the phase after `show` changed. An interrupted transition starts over in the
    /// opposite direction.
    fn toggle(self, show: bool) -> Self {
        match (show, self) {
            (true, Self::Hidden | Self::ExitFrom | Self::ExitTo) => Self::EnterFrom,
            (false, Self::EnterFrom | Self::EnterTo | Self::Shown) => Self::ExitFrom,
            (_, phase) => phase,
        }
    }

    fn next(self) -> Self {
        match self {
            Self::EnterFrom => Self::EnterTo,
            Self::EnterTo => Self::Shown,
            Self::ExitFrom => Self::ExitTo,
            Self::ExitTo => Self::Hidden,
            phase => phase,
        }
    }

    /// Returns the time in milliseconds until the next phase, or `None` if the phase is final.
    fn delay(self, duration: u32) -> Option<u32> {
        match self {
            Self::EnterFrom | Self::ExitFrom => Some(FRAME_MILLIS),
            Self::EnterTo | Self::ExitTo => Some(duration),
            Self::Hidden | Self::Shown => None,
        }
    }

    fn is_visible(self) -> bool {
        self != Self::Hidden
    }

    fn classes(self, name: &str) -> Classes {
        let (active, state) = match self {
            Self::EnterFrom => ("enter-active", "enter-from"),
            Self::EnterTo => ("enter-active", "enter-to"),
            Self::ExitFrom => ("exit-active", "exit-from"),
            Self::ExitTo => ("exit-active", "exit-to"),
            Self::Hidden | Self::Shown => return Classes::new(),
        };

        classes!(format!("{}-{}", name, active), format!("{}-{}", name, state))
    }
}
