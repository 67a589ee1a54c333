use super::view_model::ProductAnalysisVm;
use crate::shared::components::ui::GroupedSelect;
use leptos::prelude::*;

/// Пикер региона: федеральный округ → регион
#[component]
pub fn RegionPicker(vm: ProductAnalysisVm) -> impl IntoView {
    let value = Signal::derive(move || vm.region.get().normalize());
    let groups = Signal::derive(move || {
        vm.region_groups
            .get()
            .into_iter()
            .map(|g| (g.district, g.options))
            .collect::<Vec<_>>()
    });

    let on_change = Callback::new(move |selected: String| {
        if selected.is_empty() {
            vm.select_region(Vec::new());
        } else {
            vm.select_region(vec![selected]);
        }
    });

    view! {
        <GroupedSelect
            id="u508_region"
            label="Регион"
            placeholder="Выберите регион"
            value=value
            groups=groups
            on_change=on_change
            disabled=vm.is_submitting
        />
    }
}
