use arrow_core::logic::game::GameSnapshot;
use arrow_core::logic::level::PowerUp;
use leptos::{component, view, IntoView, ReadSignal, SignalGet};

const HOT_STREAK: u32 = 5;

#[must_use]
pub fn time_percent(remaining: u32, budget: u32) -> u32 {
    if budget == 0 {
        return 0;
    }
    (remaining.min(budget) * 100) / budget
}

const fn power_up_icon(power_up: PowerUp) -> &'static str {
    match power_up {
        PowerUp::SlowTime => "⏱",
        PowerUp::DoublePoints => "🎯",
        PowerUp::Shuffle => "🔀",
    }
}

#[component]
pub fn StatsPanel(snapshot: ReadSignal<GameSnapshot>) -> impl IntoView {
    view! {
        <div class="stats">
            <div class="progress">
                <div
                    class="progress-fill"
                    style=move || {
                        let s = snapshot.get();
                        format!("width: {}%;", time_percent(s.remaining, s.budget))
                    }
                ></div>
            </div>
            <div class="stats-row">
                <span>{move || format!("Time: {}s", snapshot.get().remaining)}</span>
                <span>{move || format!("Score: {}", snapshot.get().score)}</span>
            </div>
            <div class="stats-row">
                <span>
                    {move || {
                        let streak = snapshot.get().streak;
                        if streak >= HOT_STREAK {
                            format!("Streak: {streak} 🔥")
                        } else {
                            format!("Streak: {streak}")
                        }
                    }}
                </span>
                <span>{move || format!("Combo: x{}", snapshot.get().multiplier)}</span>
            </div>
            {move || {
                snapshot.get().lives.map(|lives| view! {
                    <div>{format!("Lives: {}", "❤️".repeat(lives as usize))}</div>
                })
            }}
            {move || {
                snapshot.get().power_up.map(|power_up| view! {
                    <span class="badge">{format!("{} {power_up}", power_up_icon(power_up))}</span>
                })
            }}
        </div>
    }
}
