pub mod config;
pub mod data;
pub mod elimination;
pub mod rejection_log;

use config::Endpoints;
use data::fetch_profiles;
use elimination::{load_outcome, plan_rejection, Action, EliminationState, Item, Screen};
use log::{debug, error};
use rejection_log::record_rejection;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub endpoints: Endpoints,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(EliminationState::default);

    {
        let state = state.clone();
        let endpoints = props.endpoints.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = fetch_profiles(&endpoints).await;
                    match &result {
                        Ok(items) => debug!("Loaded {} profiles", items.len()),
                        Err(err) => error!("Error fetching data: {}", err),
                    }
                    for action in load_outcome(result) {
                        state.dispatch(action);
                    }
                });

                || ()
            },
            (),
        );
    }

    // Clicks that land before the next render still see the handle's old
    // snapshot, so rejections are planned against the last settled state.
    let settled = use_mut_ref(|| None::<EliminationState>);

    let on_reject = {
        let state = state.clone();
        let settled = settled.clone();
        let log_url = props.endpoints.rejection_log_url.clone();

        Callback::from(move |index: usize| {
            let base = settled
                .borrow()
                .clone()
                .unwrap_or_else(|| (*state).clone());
            let Some(rejection) = plan_rejection(&base, index) else {
                return;
            };
            *settled.borrow_mut() = Some(base.apply_all(rejection.actions.clone()));

            for action in rejection.actions {
                match &action {
                    Action::SetWinner(winner) => debug!("Winner: {}", winner.name),
                    Action::SetComparison(pair) if pair.is_empty() => {
                        debug!("Every face has been rejected")
                    }
                    _ => {}
                }
                state.dispatch(action);
            }

            record_rejection(log_url.clone(), rejection.rejected);
        })
    };

    html! {
        <div class="searchBar">
            <h1>{ "Facesmash" }</h1>
            { render_screen(&state, &on_reject) }
        </div>
    }
}

fn render_screen(state: &EliminationState, on_reject: &Callback<usize>) -> Html {
    match state.screen() {
        Screen::Failed(message) => html! {
            <div class="errorContainer">
                <p>{ message }</p>
            </div>
        },
        Screen::Winner(winner) => html! {
            <div class="winnerContainer">
                <h2>{ "The winner is:" }</h2>
                <img src={winner.url.clone()} alt="Winner" class="winnerImage" />
                <p>{ &winner.name }</p>
            </div>
        },
        Screen::Loading => html! { <p class="placeholder">{ "Loading faces…" }</p> },
        Screen::Exhausted => {
            html! { <p class="placeholder">{ "Every face was rejected. Nobody wins." }</p> }
        }
        Screen::Comparing(pair) => html! {
            <>
                <p class="remaining">{ format!("{} faces left", state.remaining()) }</p>
                <div class="imageContainer">
                    { for pair.iter().map(|item| render_candidate(item, on_reject)) }
                </div>
            </>
        },
    }
}

fn render_candidate(item: &Item, on_reject: &Callback<usize>) -> Html {
    let index = item.index;
    let on_click = {
        let on_reject = on_reject.clone();
        Callback::from(move |_: yew::MouseEvent| on_reject.emit(index))
    };

    html! {
        <div key={index.to_string()} class="imageContainerItem">
            <img src={item.url.clone()} alt={item.name.clone()} class="userImage" />
            <p>{ &item.name }</p>
            <button onclick={on_click}>{ "Reject" }</button>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
