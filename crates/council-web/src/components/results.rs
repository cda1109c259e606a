use council_core::election::screen::{MANIFESTOS_HEADING, VOTES_HEADING, VOTE_ARROW};
use council_core::{ManifestoCard, VoteLine};
use leptos::prelude::*;

pub(crate) fn card_class(is_winner: bool) -> &'static str {
    if is_winner {
        "manifesto-card winner-card"
    } else {
        "manifesto-card"
    }
}

pub(crate) fn quoted(manifesto: &str) -> String {
    format!("\"{}\"", manifesto)
}

#[component]
pub fn WinnerBanner(title: &'static str, headline: &'static str, winner: String) -> impl IntoView {
    view! {
        <div class="winner-banner">
            <h2>{title}</h2>
            <div class="winner-announcement">
                <span class="trophy">"🏆"</span>
                <h3>{headline}</h3>
                <div class="winner-name">{winner}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ManifestoGrid(manifestos: Vec<ManifestoCard>) -> impl IntoView {
    view! {
        <div class="manifestos-section">
            <h3>{MANIFESTOS_HEADING}</h3>
            <div class="manifestos-grid">
                {manifestos
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class=card_class(card.is_winner)>
                                <h4>{card.model}</h4>
                                <p>{quoted(&card.manifesto)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn VoteList(votes: Vec<VoteLine>) -> impl IntoView {
    view! {
        <div class="votes-section">
            <h3>{VOTES_HEADING}</h3>
            <div class="votes-list">
                {votes
                    .into_iter()
                    .map(|vote| {
                        view! {
                            <div class="vote-item">
                                <span class="voter">{vote.voter}</span>
                                <span class="arrow">{VOTE_ARROW}</span>
                                <span class="voted-for">{vote.vote_for}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
