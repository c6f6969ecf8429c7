//! 結果パネル（要約・JSONビューア・ダウンロード）

use contract_analyzer_common::WidgetView;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel<FE>(widget: ReadSignal<WidgetView>, on_export: FE) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone,
{
    let summary_rows = move || widget.with(|v| v.summary_rows.clone());

    view! {
        <section id="resultsSection" class="results-section" hidden=move || !widget.with(|v| v.results_visible)>
            <h2>"Resultado da análise"</h2>

            <Show when=move || !summary_rows().is_empty()>
                <table class="summary-table">
                    <tbody>
                        <For
                            each=summary_rows
                            key=|(label, _)| *label
                            children=|(label, value)| view! {
                                <tr>
                                    <th>{label}</th>
                                    <td>{value}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <div id="jsonViewer" class="json-viewer">
                <pre>{move || widget.with(|v| v.viewer_text.clone().unwrap_or_default())}</pre>
            </div>

            <button
                id="downloadJson"
                class="btn btn-primary"
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Baixar JSON"
            </button>
        </section>
    }
}
