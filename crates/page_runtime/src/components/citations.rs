use content_contract::CitationsPlan;
use leptos::*;

/// Citations section; hidden entirely when the plan carries no entries.
#[component]
pub(super) fn CitationsSection(plan: CitationsPlan) -> impl IntoView {
    (!plan.entries.is_empty()).then(|| {
        view! {
            <section class="citations-section">
                <h2 class="citations-title">"Citations"</h2>
                <div class="citations-list">
                    {plan
                        .entries
                        .into_iter()
                        .map(|entry| view! {
                            <div
                                class="citation-item"
                                style=format!("animation-delay:{}ms", entry.reveal_delay_ms)
                            >
                                {entry.text}
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
