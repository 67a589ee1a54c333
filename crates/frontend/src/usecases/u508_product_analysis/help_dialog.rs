use super::view_model::ProductAnalysisVm;
use leptos::prelude::*;
use thaw::*;

pub const HELP_TITLE: &str = "Как пользоваться";

pub const HELP_PARAGRAPHS: [&str; 3] = [
    "Введите артикул товара Wildberries, выберите регион и укажите поисковый запрос, по которому покупатели ищут товар.",
    "Нажмите «Отправить». Показатели товара появятся новой строкой в таблице, предыдущие результаты сохраняются до перезагрузки страницы.",
    "Кнопка «Получить рекомендацию» запрашивает совет по улучшению позиции последнего проанализированного товара.",
];

/// Справка по работе со страницей. Пока диалог закрыт, его содержимого нет в DOM.
#[component]
pub fn HelpDialog(vm: ProductAnalysisVm) -> impl IntoView {
    view! {
        <Show when=move || vm.help_open.get()>
            <Dialog open=vm.help_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{HELP_TITLE}</DialogTitle>
                        <DialogContent>
                            {HELP_PARAGRAPHS
                                .iter()
                                .map(|text| view! { <p>{*text}</p> })
                                .collect_view()}
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.close_help()
                            >
                                "Закрыть"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </Show>
    }
}
