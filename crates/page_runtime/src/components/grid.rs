use std::rc::Rc;

use content_contract::{
    led_color_at, led_step_interval, led_title_style, GridCardPlan, ImagePlan, PagePlan,
    TitleStyle, DEFAULT_TITLE_COLOR,
};
use leptos::*;
use platform_host::Scheduler;

use crate::runtime_context::use_page_runtime;

/// Grid container committed from a [`PagePlan`]; applies the single-item
/// layout variant.
#[component]
pub(super) fn ContentGrid(plan: PagePlan) -> impl IntoView {
    let grid_class = if plan.single_item {
        "content-grid single-item"
    } else {
        "content-grid"
    };

    view! {
        <div class=grid_class>
            {plan
                .cards
                .into_iter()
                .map(|card| view! { <GridCard card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn GridCard(card: GridCardPlan) -> impl IntoView {
    let led = matches!(card.title_style, TitleStyle::Led { .. });
    let title_style = install_title_style(card.title_style);

    view! {
        <div class="grid-part" style=format!("animation-delay:{}ms", card.reveal_delay_ms)>
            <h3 class="grid-part-title" class=("led-text", led) style=move || title_style.get()>
                {card.title}
            </h3>
            <p class="grid-part-description">{card.description}</p>
            {(!card.bullets.is_empty())
                .then(|| view! {
                    <div class="grid-part-bulletin">
                        <ul>
                            {card
                                .bullets
                                .into_iter()
                                .map(|bullet| view! { <li>{bullet}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                })}
            {card.image.map(|image| view! { <CardImage image /> })}
        </div>
    }
}

/// Resolves a title style into a reactive inline style, attaching a color
/// cycler for LED titles with a non-empty color list.
fn install_title_style(title_style: TitleStyle) -> Signal<String> {
    match title_style {
        TitleStyle::Led { colors } if !colors.is_empty() => {
            let runtime = use_page_runtime();
            install_led_cycler(runtime.host.get_value().scheduler(), colors)
        }
        // LED styling without colors keeps the class hook but no cycler.
        TitleStyle::Led { .. } => Signal::derive(String::new),
        TitleStyle::Fixed { color } => {
            let style = format!("color:{color};");
            Signal::derive(move || style.clone())
        }
    }
}

/// Attaches one color cycler for one LED title. Page-lifetime by contract; the
/// handle is deliberately dropped so nothing can cancel it.
fn install_led_cycler(scheduler: Rc<dyn Scheduler>, colors: Vec<String>) -> Signal<String> {
    let step = create_rw_signal(0usize);

    let _ = scheduler.repeat(
        led_step_interval(colors.len()),
        Box::new(move || step.update(|value| *value += 1)),
    );

    Signal::derive(move || {
        led_title_style(led_color_at(&colors, step.get()).unwrap_or(DEFAULT_TITLE_COLOR))
    })
}

#[component]
fn CardImage(image: ImagePlan) -> impl IntoView {
    let hidden = create_rw_signal(false);

    view! {
        <img
            class="grid-part-image"
            src=image.url
            alt=image.alt
            loading="lazy"
            style=move || if hidden.get() { "display:none" } else { "" }
            on:error=move |_| hidden.set(true)
        />
    }
}
