use crate::app::controls::ControlsArea;
use crate::app::high_scores::HighScoresPanel;
use crate::app::stats::StatsPanel;
use crate::app::styles::GAME_STYLES;
use crate::components::board::{GameBoard, SwipeFeedback};
use crate::storage::{load_config, BrowserClock, LocalStorageStore};
use arrow_core::logic::direction::Direction;
use arrow_core::logic::game::{GameEngine, GameState};
use arrow_core::logic::level::{Difficulty, GameMode};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{
    component, create_signal, ev, on_cleanup, set_interval_with_handle, set_timeout, store_value,
    view, window_event_listener, Callback, IntoView, SignalGet, SignalSet,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[component]
#[allow(clippy::too_many_lines)]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = LocalStorageStore::new(&config.storage_key, config.high_score_capacity);
    let engine = store_value(GameEngine::new(
        config,
        StdRng::from_entropy(),
        Box::new(store),
        Box::new(BrowserClock),
    ));

    let (snapshot, set_snapshot) = create_signal(engine.with_value(GameEngine::snapshot));
    let (last_swipe, set_last_swipe) = create_signal(Option::<Direction>::None);
    let interval = store_value(Option::<(IntervalHandle, Duration)>::None);
    let swipe_origin = store_value(Option::<(i32, i32)>::None);

    let publish = move || set_snapshot.set(engine.with_value(GameEngine::snapshot));

    let stop_timer = move || {
        if let Some((handle, _)) = interval.get_value() {
            handle.clear();
            interval.set_value(None);
        }
    };

    let on_tick = move || {
        engine.update_value(|e| {
            e.tick();
        });
        publish();
        if !engine.with_value(GameEngine::is_timer_running) {
            stop_timer();
        }
    };

    let arm_timer = move |period: Duration| {
        stop_timer();
        match set_interval_with_handle(on_tick, period) {
            Ok(handle) => interval.set_value(Some((handle, period))),
            Err(e) => log::error!("failed to arm game timer: {e:?}"),
        }
    };

    // Inputs can end the game or change the tick period through a power-up.
    let sync_timer = move || match engine.with_value(GameEngine::tick_interval) {
        None => stop_timer(),
        Some(period) => {
            let armed = interval.with_value(|slot| slot.as_ref().map(|(_, p)| *p));
            if armed != Some(period) {
                log::debug!("re-arming game timer at {}ms", period.as_millis());
                arm_timer(period);
            }
        }
    };

    let start_game = move || {
        stop_timer();
        engine.update_value(GameEngine::start);
        publish();
        if let Some(period) = engine.with_value(GameEngine::tick_interval) {
            arm_timer(period);
        }
    };

    let on_difficulty = Callback::new(move |difficulty: Difficulty| {
        engine.update_value(|e| {
            e.set_difficulty(difficulty);
        });
        publish();
    });

    let on_mode = Callback::new(move |mode: GameMode| {
        engine.update_value(|e| {
            e.set_mode(mode);
        });
        publish();
    });

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        engine.update_value(|e| {
            e.handle_key(&key);
        });
        publish();
        sync_timer();
    });

    let touch_begin_listener = window_event_listener(ev::touchstart, move |ev| {
        if engine.with_value(GameEngine::state) != GameState::Playing {
            return;
        }
        if let Some(touch) = ev.changed_touches().get(0) {
            swipe_origin.set_value(Some((touch.client_x(), touch.client_y())));
        }
    });

    let touch_end_listener = window_event_listener(ev::touchend, move |ev| {
        let Some((start_x, start_y)) = swipe_origin.get_value() else {
            return;
        };
        swipe_origin.set_value(None);
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let dx = touch.client_x() - start_x;
        let dy = touch.client_y() - start_y;

        let swiped = engine
            .try_update_value(|e| e.handle_swipe(dx, dy))
            .flatten();
        if let Some((direction, _)) = swiped {
            set_last_swipe.set(Some(direction));
            let feedback = engine.with_value(|e| e.config().swipe_feedback());
            set_timeout(move || set_last_swipe.set(None), feedback);
        }
        publish();
        sync_timer();
    });

    on_cleanup(move || {
        key_listener.remove();
        touch_begin_listener.remove();
        touch_end_listener.remove();
        stop_timer();
    });

    view! {
        <div class="game-container" style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; min-height: 100vh; background-color: #222; color: #eee; display: flex; flex-direction: column; align-items: center;">
            <style>
                {GAME_STYLES}
            </style>

            <div class="game-card">
                <h2 style="margin: 0 0 16px; color: #f0d9b5; text-align: center;">"Arrow Key Speed Test"</h2>

                <ControlsArea
                    snapshot=snapshot
                    on_difficulty=on_difficulty
                    on_mode=on_mode
                    on_start=Callback::new(move |()| start_game())
                />

                {move || {
                    (snapshot.get().state != GameState::Idle).then(|| view! {
                        <StatsPanel snapshot=snapshot />
                        <GameBoard snapshot=snapshot />
                    })
                }}

                {move || {
                    snapshot.get().easter_egg.then(|| view! {
                        <div class="alert">
                            <div class="alert-title">"⚡ Easter Egg Activated!"</div>
                            <div>"You've unlocked the secret Konami Code! Enjoy double points for the rest of the game!"</div>
                        </div>
                    })
                }}

                {move || {
                    let s = snapshot.get();
                    (s.state == GameState::Finished).then(|| view! {
                        <div class="alert">
                            <div class="alert-title">"Game Over!"</div>
                            <div>{format!("Final Score: {}", s.score)}</div>
                        </div>
                    })
                }}

                <HighScoresPanel snapshot=snapshot />

                <SwipeFeedback last_swipe=last_swipe />
            </div>
        </div>
    }
}
