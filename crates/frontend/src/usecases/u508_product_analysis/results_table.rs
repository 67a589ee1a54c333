use super::model::{ProductRow, PROMO_YES};
use crate::shared::components::ui::Badge;
use leptos::prelude::*;
use thaw::*;

/// Таблица показателей: по строке на каждый успешный запрос
#[component]
pub fn ResultsTable(#[prop(into)] rows: Signal<Vec<ProductRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! {
                <div class="table__empty">
                    "Результатов пока нет. Отправьте запрос по артикулу."
                </div>
            }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=140.0>"Время"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Артикул"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Регион"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Запрос"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Выручка"</TableHeaderCell>
                        <TableHeaderCell>"Рейтинг"</TableHeaderCell>
                        <TableHeaderCell>"Отзывы"</TableHeaderCell>
                        <TableHeaderCell>"Рейтинг бренда"</TableHeaderCell>
                        <TableHeaderCell>"Уровень лояльности"</TableHeaderCell>
                        <TableHeaderCell>"Акции"</TableHeaderCell>
                        <TableHeaderCell>"Дней в акциях"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.key
                        children=|row| view! { <ResultRow row=row /> }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

#[component]
fn ResultRow(row: ProductRow) -> impl IntoView {
    // Дополнительные метрики показываем подсказкой к строке
    let title = row
        .extras
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n");
    let promo_variant = if row.has_promos == PROMO_YES {
        "success"
    } else {
        "neutral"
    };

    view! {
        <TableRow attr:title=title>
            <TableCell>{row.received_at}</TableCell>
            <TableCell>{row.article}</TableCell>
            <TableCell>{row.region}</TableCell>
            <TableCell>{row.query}</TableCell>
            <TableCell>
                <span class="table__number">{row.revenue}</span>
            </TableCell>
            <TableCell>{row.rating}</TableCell>
            <TableCell>{row.reviews_last_day}</TableCell>
            <TableCell>{row.brand_rating}</TableCell>
            <TableCell>{row.loyalty_level}</TableCell>
            <TableCell>
                <Badge variant=promo_variant>{row.has_promos}</Badge>
            </TableCell>
            <TableCell>{row.promo_days}</TableCell>
        </TableRow>
    }
}
