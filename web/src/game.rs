use gloo::timers::callback::{Interval, Timeout};
use memocalc_core::{
    CardIndex, GameConfig, GRID_SIZE, RoundController, Scheduler, TimerEvent, index_of,
};
use yew::html::Scope;
use yew::prelude::*;

use crate::utils::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClicked(CardIndex),
    Reset,
    ToggleReveal,
    Timer(TimerEvent),
}

/// Keeps a gloo timer alive, dropping it cancels the timer.
pub(crate) enum TimerHandle {
    Interval { _interval: Interval },
    Timeout { _timeout: Timeout },
}

/// Arms gloo timers that report back through the component's message queue, so timer events and clicks are
/// applied in the order they happen.
pub(crate) struct GlooScheduler {
    link: Scope<GameView>,
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn every(&mut self, period_ms: u32, event: TimerEvent) -> Self::Handle {
        let link = self.link.clone();
        TimerHandle::Interval {
            _interval: Interval::new(period_ms, move || link.send_message(Msg::Timer(event))),
        }
    }

    fn after(&mut self, delay_ms: u32, event: TimerEvent) -> Self::Handle {
        let link = self.link.clone();
        TimerHandle::Timeout {
            _timeout: Timeout::new(delay_ms, move || link.send_message(Msg::Timer(event))),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: CardIndex,
    face: String,
    letter_side: bool,
    callback: Callback<CardIndex>,
}

#[function_component(CardTile)]
fn card_tile(props: &CardProps) -> Html {
    let CardProps {
        index,
        face,
        letter_side,
        callback,
    } = props.clone();
    let class = classes!("card", if letter_side { "letter" } else { "face" });

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} click", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>{face}</td>
    }
}

pub(crate) struct GameView {
    controller: RoundController<GlooScheduler>,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = GlooScheduler {
            link: ctx.link().clone(),
        };
        Self {
            controller: RoundController::new(GameConfig::default(), js_random_seed(), scheduler),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardClicked(index) => self.controller.on_card_clicked(index),
            Reset => {
                log::debug!("reset requested");
                self.controller.on_reset_requested();
                true
            }
            ToggleReveal => self.controller.on_toggle_reveal_requested(),
            Timer(event) => self.controller.on_timer(event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.controller.view();
        let cb_reset = ctx.link().callback(|_: MouseEvent| Msg::Reset);
        let cb_toggle = ctx.link().callback(|_: MouseEvent| Msg::ToggleReveal);
        let cb_card = ctx.link().callback(Msg::CardClicked);
        let label = toggle_label(view.phase.is_recalling());
        let (_, cols) = GRID_SIZE;

        html! {
            <div class="memocalc">
                <nav>
                    <button onclick={cb_reset}>{"Reset"}</button>
                    <button onclick={cb_toggle} disabled={view.game_over}>{label}</button>
                </nav>
                {
                    if view.game_over {
                        html! {
                            <h2 class="game-over">{"Game over! Every problem is solved."}</h2>
                        }
                    } else {
                        html! {
                            <>
                                {
                                    for view.seconds_remaining.map(|seconds| html! {
                                        <aside class="timer">{format_countdown(seconds)}</aside>
                                    })
                                }
                                {
                                    for view.target.map(|target| html! {
                                        <h3 class="target">
                                            {format!("Problem {}/{}: {}", view.problem_number, view.problem_count, target)}
                                        </h3>
                                    })
                                }
                                <table>
                                    {
                                        for view.cards.chunks(usize::from(cols)).enumerate().map(|(row, cards)| html! {
                                            <tr>
                                                {
                                                    for cards.iter().enumerate().map(|(col, card)| {
                                                        let index = index_of((row as u8, col as u8));
                                                        html! {
                                                            <CardTile
                                                                {index}
                                                                face={card.face.clone()}
                                                                letter_side={card.letter_side}
                                                                callback={cb_card.clone()}
                                                            />
                                                        }
                                                    })
                                                }
                                            </tr>
                                        })
                                    }
                                </table>
                            </>
                        }
                    }
                }
            </div>
        }
    }
}
