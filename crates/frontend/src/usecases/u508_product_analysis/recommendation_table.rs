use super::model::RecommendationRow;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RecommendationTable(#[prop(into)] rows: Signal<Vec<RecommendationRow>>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Рекомендация"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! {
                            <TableRow>
                                <TableCell>
                                    <div style="white-space: pre-wrap;">{row.recomendation}</div>
                                </TableCell>
                            </TableRow>
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}
