use super::help_dialog::HelpDialog;
use super::recommendation_table::RecommendationTable;
use super::region_picker::RegionPicker;
use super::results_table::ResultsTable;
use super::view_model::ProductAnalysisVm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_product_analysis::ProductAnalysis;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductAnalysisPage() -> impl IntoView {
    let vm = ProductAnalysisVm::new();

    // Справочник регионов с сервера при монтировании
    Effect::new(move |_| vm.load_regions());

    let page_id = format!("{}--{}", ProductAnalysis::full_name(), PAGE_CAT_USECASE);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_USECASE>
            <PageHeader
                title=ProductAnalysis::display_name()
                subtitle=ProductAnalysis::description().to_string()
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.open_help()
                >
                    {icon("help")}
                    " Справка"
                </Button>
            </PageHeader>

            <div class="page__content">
                <RequestForm vm=vm />
                <Messages vm=vm />

                <div class="card">
                    <div class="card__header">
                        {icon("products")}
                        <h2 class="card__title">"Показатели товара"</h2>
                    </div>
                    <ResultsTable rows=vm.products />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Рекомендации"</h2>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || vm.is_loading_recommendation.get())
                            on_click=move |_| vm.recommendation_command()
                        >
                            {icon("lightbulb")}
                            " "
                            {move || vm.recommendation_label()}
                        </Button>
                    </div>
                    <RecommendationTable rows=vm.recommendations />
                </div>
            </div>

            <HelpDialog vm=vm />
        </PageFrame>
    }
}

/// Форма: артикул, регион, поисковый запрос
#[component]
fn RequestForm(vm: ProductAnalysisVm) -> impl IntoView {
    let is_submitting = Signal::derive(move || vm.is_submitting.get());

    view! {
        <div class="card">
            <Flex vertical=true gap=FlexGap::Large>
                <div class="form__group">
                    <label class="form__label">"Артикул"</label>
                    <Input
                        value=vm.article
                        placeholder="Например, 393594116"
                        disabled=is_submitting
                    />
                </div>

                <RegionPicker vm=vm />

                <div class="form__group">
                    <label class="form__label">"Поисковый запрос"</label>
                    <Input
                        value=vm.query
                        placeholder="Например, футболка мужская"
                        disabled=is_submitting
                    />
                </div>

                <div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_submit())
                        on_click=move |_| vm.submit_command()
                    >
                        {icon("send")}
                        " "
                        {move || vm.submit_label()}
                    </Button>
                </div>
            </Flex>
        </div>
    }
}

#[component]
fn Messages(vm: ProductAnalysisVm) -> impl IntoView {
    view! {
        {move || vm.error.get().map(|e| view! {
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
        {move || vm.success.get().map(|msg| view! {
            <div class="info-box">{msg}</div>
        })}
    }
}
