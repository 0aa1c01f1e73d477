use arrow_core::logic::game::{GameSnapshot, GameState};
use arrow_core::logic::level::{Difficulty, GameMode};
use leptos::{
    component, event_target_value, view, Callable, Callback, IntoView, ReadSignal, SignalGet,
};

#[must_use]
pub const fn start_label(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Start Game",
        GameState::Playing | GameState::Finished => "Restart",
    }
}

#[component]
pub fn ControlsArea(
    snapshot: ReadSignal<GameSnapshot>,
    on_difficulty: Callback<Difficulty>,
    on_mode: Callback<GameMode>,
    on_start: Callback<()>,
) -> impl IntoView {
    let playing = move || snapshot.get().state == GameState::Playing;

    view! {
        <div class="controls-area">
            <select
                disabled=playing
                on:change=move |ev| {
                    if let Some(difficulty) = Difficulty::parse(&event_target_value(&ev)) {
                        on_difficulty.call(difficulty);
                    }
                }
                prop:value=move || snapshot.get().difficulty.as_str()
            >
                <option value="easy">"Easy"</option>
                <option value="medium">"Medium"</option>
                <option value="hard">"Hard"</option>
            </select>

            <select
                disabled=playing
                on:change=move |ev| {
                    if let Some(mode) = GameMode::parse(&event_target_value(&ev)) {
                        on_mode.call(mode);
                    }
                }
                prop:value=move || snapshot.get().mode.as_str()
            >
                {GameMode::ALL.into_iter().map(|mode| view! {
                    <option value=mode.as_str()>{mode.label()}</option>
                }).collect::<Vec<_>>()}
            </select>

            <button class="control-btn" disabled=playing on:click=move |_| on_start.call(())>
                {move || start_label(snapshot.get().state)}
            </button>
        </div>
    }
}
