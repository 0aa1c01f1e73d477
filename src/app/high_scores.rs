use crate::storage::local_date;
use arrow_core::logic::game::GameSnapshot;
use leptos::{component, view, IntoView, ReadSignal, SignalGet};

#[component]
pub fn HighScoresPanel(snapshot: ReadSignal<GameSnapshot>) -> impl IntoView {
    move || {
        let scores = snapshot.get().high_scores;
        (!scores.is_empty()).then(|| {
            view! {
                <div class="high-scores">
                    <h3>"High Scores"</h3>
                    <ul>
                        {scores.into_iter().map(|record| view! {
                            <li>
                                {format!(
                                    "{} ({}): {} ({})",
                                    record.difficulty,
                                    record.game_mode,
                                    record.score,
                                    local_date(&record.date)
                                )}
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            }
        })
    }
}
