use council_core::{ElectionResults, ElectionStatus, ElectionView, Screen, StartGate};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::components::results::{ManifestoGrid, VoteList, WinnerBanner};

/// Council election view.
///
/// `status` and `results` belong to the election service; this component only
/// reads them and reports the two user intents through the callbacks.
#[component]
pub fn Election(
    #[prop(into)] status: Signal<ElectionStatus>,
    #[prop(into)] results: Signal<Option<ElectionResults>>,
    #[prop(into)] on_start_election: Callback<()>,
    #[prop(into)] on_proceed: Callback<()>,
) -> impl IntoView {
    let gate = RwSignal::new(StartGate::new());
    let election = Memo::new(move |_| ElectionView::from_parts(status.get(), results.get()));

    // Same gate rules as ElectionWidget: follow every view, one request per pending phase
    Effect::new(move || {
        election.with(|view| gate.maybe_update(|g| g.follow(view)));
    });

    let handle_start = move |_| {
        if start_clicked(gate, election) {
            on_start_election.run(());
        }
    };

    move || match Screen::build(&election.get(), &gate.get()) {
        Screen::CallToAction { title, lines, start } => view! {
            <div class="election-container">
                <div class="election-card">
                    <h2>{title}</h2>
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                    <button
                        class="election-button"
                        on:click=handle_start
                        disabled={!start.enabled}
                    >
                        {start.label}
                    </button>
                </div>
            </div>
        }
        .into_any(),
        Screen::Progress { title, caption } => view! {
            <div class="election-container">
                <div class="election-card">
                    <h2>{title}</h2>
                    <div class="loading-spinner"></div>
                    <p>{caption}</p>
                </div>
            </div>
        }
        .into_any(),
        Screen::Results {
            title,
            headline,
            winner,
            manifestos,
            votes,
            closing,
            proceed,
        } => view! {
            <div class="election-container">
                <div class="election-results">
                    <WinnerBanner title=title headline=headline winner=winner />
                    <div class="election-details">
                        <ManifestoGrid manifestos=manifestos />
                        <VoteList votes=votes />
                    </div>
                    <div class="continue-section">
                        <p>{closing}</p>
                        <button class="proceed-button" on:click=move |_| on_proceed.run(())>
                            {proceed.label}
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        Screen::Nothing => ().into_any(),
    }
}

/// Record a click on the start control. The callback runs outside the signal update.
fn start_clicked(gate: RwSignal<StartGate>, election: Memo<ElectionView>) -> bool {
    let mut fire = false;
    election.with_untracked(|view| gate.update(|g| fire = g.request(view)));
    fire
}
