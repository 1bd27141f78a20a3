use shared::ExportFormat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExportButtonsProps {
    pub on_export: Callback<ExportFormat>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ExportButtons)]
pub fn export_buttons(props: &ExportButtonsProps) -> Html {
    let export_with = |format: ExportFormat| {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(format))
    };

    html! {
        <div class="btn-group export-buttons">
            <button type="button" class="btn btn-outline-secondary btn-sm"
                onclick={export_with(ExportFormat::Csv)} disabled={props.disabled}>
                <i class="bi bi-filetype-csv me-1"></i>{"Export CSV"}
            </button>
            <button type="button" class="btn btn-outline-secondary btn-sm"
                onclick={export_with(ExportFormat::Json)} disabled={props.disabled}>
                <i class="bi bi-filetype-json me-1"></i>{"Export JSON"}
            </button>
        </div>
    }
}
