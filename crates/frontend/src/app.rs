use crate::usecases::u508_product_analysis::ProductAnalysisPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app">
                <ProductAnalysisPage />
            </main>
        </ConfigProvider>
    }
}
