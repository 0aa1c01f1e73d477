use arrow_core::logic::direction::Direction;
use arrow_core::logic::game::GameSnapshot;
use leptos::{component, view, IntoView, ReadSignal, SignalGet};

fn arrow_class(correct: Option<bool>, extra: &str) -> String {
    let state = match correct {
        Some(true) => " correct",
        Some(false) => " wrong",
        None => "",
    };
    if extra.is_empty() {
        format!("arrow{state}")
    } else {
        format!("arrow{state} {extra}")
    }
}

#[component]
pub fn ArrowIcon(
    direction: Direction,
    correct: Option<bool>,
    #[prop(optional)] extra: &'static str,
) -> impl IntoView {
    view! {
        <span class=arrow_class(correct, extra) title=direction.to_string()>
            {direction.glyph()}
        </span>
    }
}

/// Target sequence, with entered arrows highlighted.
#[component]
pub fn GameBoard(snapshot: ReadSignal<GameSnapshot>) -> impl IntoView {
    view! {
        <div class="arrow-board">
            {move || {
                snapshot.get().cells.into_iter().map(|cell| {
                    view! { <ArrowIcon direction=cell.direction correct=cell.correct /> }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Large arrow echoing the last recognised swipe.
#[component]
pub fn SwipeFeedback(last_swipe: ReadSignal<Option<Direction>>) -> impl IntoView {
    move || {
        last_swipe.get().map(|direction| {
            view! {
                <div class="swipe-overlay">
                    <ArrowIcon direction=direction correct=None extra="swipe-pulse" />
                </div>
            }
        })
    }
}
