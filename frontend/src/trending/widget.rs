use crate::router::Route;
use crate::trending::api::analyze_trend;
use crate::trending::components::{
    EmptyPanel, ErrorPanel, LoadingIndicator, ResultsPanel, TrendForm,
};
use crate::trending::state::{Phase, Query, RequestTracker, WidgetAction, WidgetState};
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(TrendingApp)]
pub fn trending_app() -> Html {
    let state = use_reducer(WidgetState::default);
    let tracker = use_mut_ref(RequestTracker::default);
    let in_flight = use_mut_ref(|| None::<AbortController>);

    // Abort whatever is still pending when the page goes away
    {
        let tracker = tracker.clone();
        let in_flight = in_flight.clone();
        use_effect_with((), move |_| {
            move || {
                tracker.borrow_mut().cancel_all();
                if let Some(controller) = in_flight.borrow_mut().take() {
                    controller.abort();
                }
            }
        });
    }

    let on_submit = {
        let state = state.clone();
        let tracker = tracker.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |raw: String| {
            let Some(query) = Query::parse(&raw) else {
                return;
            };

            let ticket = tracker.borrow_mut().next_ticket();

            if let Some(previous) = in_flight.borrow_mut().take() {
                previous.abort();
            }
            let controller = match AbortController::new() {
                Ok(controller) => Some(controller),
                Err(e) => {
                    log::warn!("AbortController unavailable, request cannot be cancelled: {e:?}");
                    None
                }
            };
            let signal = controller.as_ref().map(|controller| controller.signal());
            *in_flight.borrow_mut() = controller;

            log::info!("Analyzing trends for \"{}\" (request #{ticket})", query.as_str());
            state.dispatch(WidgetAction::Submit {
                ticket,
                query: query.clone(),
            });

            let state = state.clone();
            let tracker = tracker.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = analyze_trend(&query, signal.as_ref()).await;

                if tracker.borrow().is_current(ticket) {
                    match &outcome {
                        Err(e) => log::error!("Trend analysis failed: {e}"),
                        Ok(result) if !result.success => log::warn!(
                            "No trending videos for \"{}\": {}",
                            query.as_str(),
                            result.message.as_deref().unwrap_or("no message")
                        ),
                        Ok(result) => log::debug!(
                            "Received {} videos for \"{}\"",
                            result.videos.len(),
                            query.as_str()
                        ),
                    }
                }

                state.dispatch(WidgetAction::Resolve { ticket, outcome });
            });
        })
    };

    let panel = match &state.phase {
        Phase::Idle => html! {},
        Phase::Loading => html! { <LoadingIndicator /> },
        Phase::Error(message) => html! { <ErrorPanel message={message.clone()} /> },
        Phase::Empty(message) => html! { <EmptyPanel message={message.clone()} /> },
        Phase::Results(result) => html! { <ResultsPanel result={result.clone()} /> },
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-3xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {"Trending Video Analysis"}
                </h1>

                <div class="text-center mb-4">
                    <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline text-sm">
                        {"← Back to Dashboard"}
                    </Link<Route>>
                </div>

                <TrendForm loading={state.phase.is_loading()} on_submit={on_submit} />

                {
                    if let Some(caption) = state.query_caption() {
                        html! { <p class="text-sm text-gray-500 mb-2">{ caption }</p> }
                    } else {
                        html! {}
                    }
                }

                { panel }
            </div>
        </div>
    }
}
